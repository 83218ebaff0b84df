//! Integration test harness
//!
//! `TestBot` builds a `DiceBot` from a TOML snippet written to a temporary
//! file, so every test goes through the same loading path as the binary.
//!
//! ```rust,ignore
//! let bot = TestBot::start("[auto_roll]\ndefault = true").unwrap();
//! let reply = bot.say("#rpg", "I roll 2d6").unwrap();
//! assert!(reply.starts_with("[2d6] "));
//! ```

use std::io::Write;

use anyhow::Result;
use dicebot::{BotConfig, DiceBot, Message, Reply};
use tempfile::NamedTempFile;

/// Seed used unless a test config sets its own
pub const TEST_SEED: u64 = 4242;

pub struct TestBot {
    pub bot: DiceBot,
    _config_file: NamedTempFile,
}

impl TestBot {
    /// Start a bot from `toml`, seeded with [`TEST_SEED`] unless `toml` sets a seed
    pub fn start(toml: &str) -> Result<Self> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", toml)?;

        let mut config = BotConfig::load(Some(file.path()))?;
        if config.seed.is_none() {
            config.seed = Some(TEST_SEED);
        }

        Ok(Self {
            bot: DiceBot::new(config),
            _config_file: file,
        })
    }

    /// Bot with scanning on everywhere
    pub fn scanning() -> Result<Self> {
        Self::start("[auto_roll]\ndefault = true\nprivate = true")
    }

    /// Send a message and return the full reply, if any
    pub fn send(&self, target: &str, text: &str) -> Option<Reply> {
        self.bot.handle(&Message::new(target, text))
    }

    /// Send a message and return the reply text, panicking on an error reply
    pub fn say(&self, target: &str, text: &str) -> Option<String> {
        match self.send(target, text)? {
            Reply::Message(text) => Some(text),
            Reply::Error(e) => panic!("unexpected error reply to {:?}: {}", text, e),
        }
    }
}

/// Split `"[2d6+1] 4, 7"` into the header and the totals
pub fn parse_reply(reply: &str) -> (String, Vec<i64>) {
    let (header, totals) = reply
        .strip_prefix('[')
        .and_then(|rest| rest.split_once("] "))
        .unwrap_or_else(|| panic!("malformed reply: {:?}", reply));

    let totals = totals
        .split(", ")
        .map(|t| t.parse().unwrap_or_else(|_| panic!("bad total {:?} in {:?}", t, reply)))
        .collect();

    (header.to_string(), totals)
}
