//! Timer service: the per-round countdown that ends the round as lost when
//! it reaches zero.

mod countdown;

pub use countdown::{Countdown, TickOutcome};
