//! Dice expressions
//!
//! Parses, validates, rolls and formats dice notation like "2d6+3" and
//! repeated roll sets like "3#1d20".

pub mod bounds;
pub mod engine;
pub mod format;
pub mod grammar;

use std::fmt;
use std::str::FromStr;

pub use bounds::Violation;
pub use engine::RollEngine;
pub use grammar::{Extraction, Form};

/// Most dice a single expression may roll
pub const MAX_DICE_COUNT: u32 = 1000;
/// Fewest sides a die may have
pub const MIN_SIDES: u32 = 2;
/// Most sides a die may have
pub const MAX_SIDES: u32 = 100;
/// Most repeats a roll set may ask for
pub const MAX_REPEATS: u32 = 30;

/// A parsed dice expression: roll `count` dice of `sides` sides, sum, add `modifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpression {
    /// Number of dice to roll
    pub count: u32,
    /// Number of sides per die
    pub sides: u32,
    /// Modifier added once to the sum
    pub modifier: i64,
}

impl DiceExpression {
    /// Create a new dice expression
    pub fn new(count: u32, sides: u32, modifier: i64) -> Self {
        Self { count, sides, modifier }
    }

    /// Get the minimum possible total
    pub fn min(&self) -> i64 {
        i64::from(self.count).saturating_add(self.modifier)
    }

    /// Get the maximum possible total
    pub fn max(&self) -> i64 {
        (i64::from(self.count) * i64::from(self.sides)).saturating_add(self.modifier)
    }
}

impl FromStr for DiceExpression {
    type Err = crate::roller::RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::parse_exact(s).ok_or(crate::roller::RollError::Usage)
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d{}{}",
            self.count,
            self.sides,
            format::signed_modifier(self.modifier)
        )
    }
}

/// A roll set: evaluate `expression` independently `repeats` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSet {
    /// How many times to evaluate the expression
    pub repeats: u32,
    /// The per-roll expression
    pub expression: DiceExpression,
}

impl RollSet {
    pub fn new(repeats: u32, expression: DiceExpression) -> Self {
        Self { repeats, expression }
    }
}

impl fmt::Display for RollSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repeats, self.expression)
    }
}

/// The outcome of evaluating an expression or a roll set, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Single {
        expression: DiceExpression,
        total: i64,
    },
    Set {
        set: RollSet,
        /// One total per repeat, in generation order
        totals: Vec<i64>,
    },
}
