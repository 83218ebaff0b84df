//! Roll orchestration
//!
//! Two ways to turn text into a reply:
//! - strict: the `roll` command, where the whole argument must be an expression
//! - scan: passive rolling of the first expression seen in a message

pub mod scan;
pub mod strict;

use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;

use crate::dice::{RollEngine, Violation};

pub use scan::{Origin, ScanContext};

/// Why a strict roll produced an error instead of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("Dice must be of the form <dice>d<sides><modifier>")]
    Usage,

    #[error(transparent)]
    OutOfBounds(#[from] Violation),
}

/// Owns a roll engine and exposes both evaluation modes
#[derive(Debug, Clone)]
pub struct Roller<R> {
    engine: RollEngine<R>,
}

impl Roller<StdRng> {
    /// Roller with a fixed seed, or an OS-seeded one when `seed` is `None`
    pub fn with_seed(seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => RollEngine::seeded(seed),
            None => RollEngine::from_os_rng(),
        };
        Self::new(engine)
    }
}

impl<R: Rng> Roller<R> {
    pub fn new(engine: RollEngine<R>) -> Self {
        Self { engine }
    }

    /// Evaluate a `roll` command argument; exactly one reply or one error
    pub fn roll(&mut self, args: &str) -> Result<String, RollError> {
        strict::evaluate(&mut self.engine, args).map(|evaluation| evaluation.to_string())
    }

    /// Scan free-form text; `None` means there is nothing to say
    pub fn scan(&mut self, text: &str, enabled: bool) -> Option<String> {
        scan::evaluate(&mut self.engine, text, enabled).map(|evaluation| evaluation.to_string())
    }
}
