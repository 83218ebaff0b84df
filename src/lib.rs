//! dicebot - dice roll expressions for chat bots
//!
//! Parses expressions like `4d20+3` or `3#2d6-1`, rolls them and formats a
//! reply, either on demand (`!roll`) or by scanning ordinary chat text.

pub mod bot;
pub mod config;
pub mod dice;
pub mod roller;

pub use bot::{DiceBot, Message, Reply};
pub use config::{BotConfig, ConfigError};
pub use dice::{DiceExpression, Evaluation, RollEngine, RollSet};
pub use roller::{Origin, RollError, Roller, ScanContext};
