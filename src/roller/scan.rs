//! Passive scanning of chat text
//!
//! The repeated form is tried first. If it is missing or out of bounds the
//! single form is tried. Failures are never reported.

use rand::Rng;
use tracing::{debug, trace};

use crate::dice::{bounds, grammar, Evaluation, Extraction, Form, RollEngine};

/// Where a message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Channel,
    Private,
}

/// Whether scanning is switched on, as resolved by the host for one conversation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanContext {
    /// Scanning enabled in the channel the message was sent to
    pub channel: bool,
    /// Scanning enabled in private messages
    pub private: bool,
}

impl ScanContext {
    pub fn enabled(&self, origin: Origin) -> bool {
        match origin {
            Origin::Channel => self.channel,
            Origin::Private => self.private,
        }
    }
}

/// Roll the first valid expression in `text`, if scanning is enabled
pub fn evaluate<R: Rng>(engine: &mut RollEngine<R>, text: &str, enabled: bool) -> Option<Evaluation> {
    if !enabled {
        return None;
    }

    if let Extraction::RepeatedSet(set) = grammar::find(text, Form::Repeated) {
        match bounds::check_set(&set) {
            Ok(()) => {
                let totals = engine.evaluate_set(&set);
                return Some(Evaluation::Set { set, totals });
            }
            Err(violation) => debug!(%set, ?violation, "skipping roll set"),
        }
    }

    if let Extraction::Single(expression) = grammar::find(text, Form::Single) {
        match bounds::check(&expression) {
            Ok(()) => {
                let total = engine.evaluate(&expression);
                return Some(Evaluation::Single { expression, total });
            }
            Err(violation) => debug!(%expression, ?violation, "skipping expression"),
        }
    }

    trace!("nothing to roll");
    None
}
