//! Chat host glue
//!
//! Decides whether an incoming message is a `roll` command or plain text to
//! scan, and shares one random stream between concurrent handlers.

use std::fmt;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::BotConfig;
use crate::roller::{Origin, Roller};

const ACTION_PREFIX: &str = "\u{1}ACTION ";
const ACTION_SUFFIX: char = '\u{1}';

/// An incoming chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Channel name, or the nick for a private conversation
    pub target: String,
    /// Raw message text
    pub text: String,
}

impl Message {
    pub fn new(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
        }
    }

    pub fn origin(&self) -> Origin {
        if is_channel(&self.target) {
            Origin::Channel
        } else {
            Origin::Private
        }
    }

    /// The text with any CTCP ACTION (`/me`) wrapper removed
    pub fn body(&self) -> &str {
        match self.text.strip_prefix(ACTION_PREFIX) {
            Some(action) => action.strip_suffix(ACTION_SUFFIX).unwrap_or(action),
            None => &self.text,
        }
    }
}

/// Channel names start with one of the IRC channel prefixes
pub fn is_channel(target: &str) -> bool {
    target.starts_with(['#', '&', '+', '!'])
}

/// What the bot says back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Error(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Message(text) => f.write_str(text),
            Reply::Error(text) => write!(f, "Error: {}", text),
        }
    }
}

/// The dice bot: one configuration and one shared roller
pub struct DiceBot {
    config: BotConfig,
    roller: Mutex<Roller<StdRng>>,
}

impl DiceBot {
    pub fn new(config: BotConfig) -> Self {
        let roller = Roller::with_seed(config.seed);
        Self {
            config,
            roller: Mutex::new(roller),
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Run the `roll` command on its argument string
    pub fn roll(&self, args: &str) -> Reply {
        match self.roller.lock().roll(args) {
            Ok(text) => Reply::Message(text),
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    /// Handle one incoming message; commands are never also scanned
    pub fn handle(&self, message: &Message) -> Option<Reply> {
        if let Some(args) = self.command_args(&message.text) {
            debug!("roll command in {}: {:?}", message.target, args);
            return Some(self.roll(args));
        }

        let enabled = self
            .config
            .scan_context(&message.target)
            .enabled(message.origin());

        self.roller
            .lock()
            .scan(message.body(), enabled)
            .map(Reply::Message)
    }

    /// Argument string of a `<prefix>roll` command, if `text` is one
    fn command_args<'a>(&self, text: &'a str) -> Option<&'a str> {
        let rest = text
            .strip_prefix(self.config.command_prefix.as_str())?
            .strip_prefix("roll")?;

        // "!rolling" is not the roll command
        (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
    }
}
