//! Strict evaluation for the `roll` command

use rand::Rng;
use tracing::debug;

use super::RollError;
use crate::dice::{bounds, grammar, Evaluation, RollEngine};

/// Evaluate a command argument that must be exactly one single-form expression.
///
/// Surrounding whitespace is ignored; anything else around the expression
/// is a usage error.
///
/// # Errors
/// * [`RollError::Usage`] - the argument is not `<count>d<sides>[<modifier>]`
/// * [`RollError::OutOfBounds`] - the first limit the expression violates
pub fn evaluate<R: Rng>(engine: &mut RollEngine<R>, args: &str) -> Result<Evaluation, RollError> {
    let Some(expression) = grammar::parse_exact(args.trim()) else {
        debug!("roll rejected, not an expression: {:?}", args);
        return Err(RollError::Usage);
    };

    if let Err(violation) = bounds::check(&expression) {
        debug!(%expression, ?violation, "roll rejected");
        return Err(violation.into());
    }

    let total = engine.evaluate(&expression);
    Ok(Evaluation::Single { expression, total })
}
