//! Roll engine
//!
//! Evaluates validated expressions with draws from an injected generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DiceExpression, RollSet};

/// Rolls dice using the generator it owns
#[derive(Debug, Clone)]
pub struct RollEngine<R> {
    rng: R,
}

impl RollEngine<StdRng> {
    /// Engine with a fixed seed, for reproducible rolls
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RollEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Sum of `count` independent uniform draws over `1..=sides`, plus the modifier.
    ///
    /// The expression must already have passed [`super::bounds::check`];
    /// `sides` of zero would leave the draw range empty.
    pub fn evaluate(&mut self, expression: &DiceExpression) -> i64 {
        debug_assert!(expression.sides >= 1, "evaluated an unchecked expression");

        let mut sum: i64 = 0;
        for _ in 0..expression.count {
            sum += i64::from(self.rng.random_range(1..=expression.sides));
        }

        sum.saturating_add(expression.modifier)
    }

    /// Evaluate the set's expression `repeats` times, in generation order
    pub fn evaluate_set(&mut self, set: &RollSet) -> Vec<i64> {
        (0..set.repeats)
            .map(|_| self.evaluate(&set.expression))
            .collect()
    }
}
