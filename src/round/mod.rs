//! Round state machine: card reveal state, pending selection, match
//! resolution, and win/loss detection.

mod machine;
mod selection;

pub use machine::{IgnoreReason, Round, RoundId, RoundPhase, SelectOutcome};
pub use selection::Selection;
