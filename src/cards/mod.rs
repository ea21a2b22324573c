//! Card system: symbols, card instances, and the deck builder.
//!
//! ## Key Types
//!
//! - `Symbol`: Opaque face value shared by exactly two cards
//! - `Alphabet`: The fixed set of symbols for a round, with display glyphs
//! - `Card`: Runtime card state (position, symbol, reveal state)
//! - `build_round`: Shuffled layout of every symbol twice

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::build_round;
pub use definition::{Alphabet, Symbol};
pub use instance::{Card, CardPosition, RevealState};
