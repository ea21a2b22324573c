//! Core engine types: RNG and configuration.
//!
//! These are the leaf building blocks shared by the deck builder, the round
//! state machine and the session.

pub mod config;
pub mod rng;

pub use config::{ConfigError, Difficulty, GameConfig, DEFAULT_GLYPHS};
pub use rng::GameRng;
