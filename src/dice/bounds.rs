//! Bounds policy
//!
//! Checks run in a fixed order (dice count, too many sides, too few sides,
//! repeats) and the first failure is the one reported.

use thiserror::Error;

use super::{DiceExpression, RollSet, MAX_DICE_COUNT, MAX_REPEATS, MAX_SIDES, MIN_SIDES};

/// The limit an expression violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("You can't roll more than {limit} dice.", limit = MAX_DICE_COUNT)]
    TooManyDice,

    #[error("Dice can't have more than {limit} sides.", limit = MAX_SIDES)]
    TooManySides,

    #[error("Dice can't have fewer than {limit} sides.", limit = MIN_SIDES)]
    TooFewSides,

    #[error("You can't roll more than {limit} times.", limit = MAX_REPEATS)]
    TooManyRepeats,
}

/// Validate a single expression
pub fn check(expression: &DiceExpression) -> Result<(), Violation> {
    if expression.count > MAX_DICE_COUNT {
        return Err(Violation::TooManyDice);
    }
    if expression.sides > MAX_SIDES {
        return Err(Violation::TooManySides);
    }
    if expression.sides < MIN_SIDES {
        return Err(Violation::TooFewSides);
    }
    Ok(())
}

/// Validate a roll set: the expression first, then the repeat count
pub fn check_set(set: &RollSet) -> Result<(), Violation> {
    check(&set.expression)?;

    if set.repeats < 1 || set.repeats > MAX_REPEATS {
        return Err(Violation::TooManyRepeats);
    }
    Ok(())
}
