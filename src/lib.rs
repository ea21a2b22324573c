//! # memory-match
//!
//! Core engine for a single-player memory-matching (concentration) card game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine publishes `GameEvent`s; a thin
//!    adapter in the host maps them onto tiles, counters and modals.
//!
//! 2. **Services Behind Traits**: Timing (`Scheduler`) and persistence
//!    (`KeyValueStore`) are supplied by the host.
//!
//! 3. **Deterministic**: A seeded `GameRng` and the virtual-clock
//!    `ManualScheduler` reproduce a round exactly.
//!
//! ## Architecture
//!
//! - **Single-threaded**: Every click and timer callback is a `&mut self`
//!   call on `Session`; handlers never overlap.
//!
//! - **Guarded Callbacks**: Scheduled timeouts carry the `RoundId` they were
//!   created for and are dropped once that round is gone.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: Symbols, card instances, deck builder
//! - `round`: Round state machine and pending selection
//! - `schedule`: Scheduler trait and virtual-clock implementation
//! - `timer`: Countdown service
//! - `streak`: Persisted win streak and key-value stores
//! - `events`: Events for the render surface
//! - `session`: Session controller wiring everything together

pub mod core;
pub mod cards;
pub mod round;
pub mod schedule;
pub mod timer;
pub mod streak;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ConfigError, Difficulty, GameConfig, GameRng};

pub use crate::cards::{build_round, Alphabet, Card, CardPosition, RevealState, Symbol};

pub use crate::round::{IgnoreReason, Round, RoundId, RoundPhase, SelectOutcome, Selection};

pub use crate::schedule::{ManualScheduler, Scheduler, TaskHandle, Timeout, TimeoutKind};

pub use crate::timer::{Countdown, TickOutcome};

pub use crate::streak::{JsonFileStore, KeyValueStore, MemoryStore, StoreError, StreakStore};

pub use crate::events::{GameEvent, Outcome, RenderSurface, View};

pub use crate::session::{Session, SessionError, SessionPhase};
