//! Bot configuration
//!
//! Layered with figment: built-in defaults, then an optional TOML file, then
//! `DICEBOT_*` environment variables (`__` separates nested keys, e.g.
//! `DICEBOT_AUTO_ROLL__PRIVATE=true`).
//!
//! ```toml
//! command_prefix = "!"
//!
//! [auto_roll]
//! default = false
//! private = true
//!
//! [auto_roll.channels]
//! "#rpg" = true
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roller::ScanContext;

/// Errors loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

/// Top-level bot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Prefix that marks a command, as in `!roll 2d6`
    pub command_prefix: String,
    /// Passive scanning switches
    pub auto_roll: AutoRollConfig,
    /// Fixed seed for reproducible rolls (default: seeded from the OS)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
            auto_roll: AutoRollConfig::default(),
            seed: None,
        }
    }
}

/// Where passive scanning is switched on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoRollConfig {
    /// Channels without an entry in `channels` use this
    pub default: bool,
    /// Private conversations
    pub private: bool,
    /// Per-channel overrides, keyed by channel name
    pub channels: HashMap<String, bool>,
}

impl AutoRollConfig {
    /// Whether scanning is on in `channel`; names compare case-insensitively
    pub fn channel_enabled(&self, channel: &str) -> bool {
        self.channels
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(channel))
            .map(|(_, enabled)| *enabled)
            .unwrap_or(self.default)
    }
}

impl BotConfig {
    /// The provider stack: defaults, then `path` if given, then environment
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(BotConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed("DICEBOT_").split("__"))
    }

    /// Load configuration, failing if an explicitly named file is missing
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
        }
        Self::from_figment(&Self::figment(path))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Resolve the scan switches for a message sent to `channel`
    pub fn scan_context(&self, channel: &str) -> ScanContext {
        ScanContext {
            channel: self.auto_roll.channel_enabled(channel),
            private: self.auto_roll.private,
        }
    }
}
