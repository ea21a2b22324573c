//! Game session controller.
//!
//! Orchestrates the round lifecycle for the presentation layer:
//! - `start` / `start_difficulty`: deal a round and begin the preview
//! - `select`: forward card clicks to the round state machine
//! - `handle_timeout`: preview end, mismatch revert, countdown ticks
//! - `restart`: discard the round and return to the setup screen
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{GameConfig, GameRng};
//! use memory_match::schedule::ManualScheduler;
//! use memory_match::session::{Session, SessionPhase};
//! use memory_match::streak::MemoryStore;
//!
//! let mut session = Session::new(
//!     GameConfig::default(),
//!     ManualScheduler::new(),
//!     MemoryStore::new(),
//!     GameRng::new(42),
//! )
//! .unwrap();
//!
//! session.start_difficulty("hard").unwrap();
//! assert_eq!(session.phase(), SessionPhase::Previewing);
//!
//! session.advance(Duration::from_secs(2));
//! assert_eq!(session.phase(), SessionPhase::Active);
//!
//! // Nobody plays: the clock runs out
//! session.advance(Duration::from_secs(20));
//! assert!(matches!(session.phase(), SessionPhase::Finished(o) if !o.is_win()));
//! ```

mod controller;

pub use controller::{Session, SessionError, SessionPhase};
