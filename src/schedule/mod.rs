//! Scheduler seam for timed callbacks.
//!
//! The engine has exactly three suspension points: the preview delay, the
//! mismatch display delay, and the one-second countdown tick. Each is handed
//! to a `Scheduler` as a `Timeout` value. When the delay elapses the host
//! passes the same value back to
//! [`Session::handle_timeout`](crate::session::Session::handle_timeout).
//!
//! ## Design Philosophy
//!
//! Timeouts are plain data rather than closures, so the host's timing
//! primitive never needs mutable access to the session. Each timeout carries
//! the `RoundId` it was scheduled for; handlers drop timeouts from earlier
//! rounds, and restart cancels every outstanding handle.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::round::RoundId;
//! use memory_match::schedule::{ManualScheduler, Scheduler, Timeout, TimeoutKind};
//!
//! let mut scheduler = ManualScheduler::new();
//! let tick = Timeout::new(RoundId::new(1), TimeoutKind::Tick);
//! let handle = scheduler.every(Duration::from_secs(1), tick);
//!
//! assert_eq!(scheduler.next_due(Duration::from_secs(1)), Some(tick));
//! scheduler.cancel(handle);
//! assert_eq!(scheduler.next_due(Duration::from_secs(5)), None);
//! ```

mod manual;

pub use manual::{ManualScheduler, MIN_PERIOD};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::round::RoundId;

/// Which suspension point a timeout belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeoutKind {
    /// Preview over; hide the cards and start the clock.
    PreviewEnd,
    /// Mismatch display over; flip the pair back.
    MismatchRevert,
    /// One countdown period elapsed.
    Tick,
}

/// A scheduled callback, addressed to a specific round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timeout {
    pub round: RoundId,
    pub kind: TimeoutKind,
}

impl Timeout {
    #[must_use]
    pub const fn new(round: RoundId, kind: TimeoutKind) -> Self {
        Self { round, kind }
    }
}

/// Handle used to cancel a scheduled timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Host timing primitive.
///
/// Implementations deliver each due `Timeout` back to the session exactly
/// once per firing, in due-time order, and never after it was cancelled.
pub trait Scheduler {
    /// Fire `timeout` once after `delay`.
    fn after(&mut self, delay: Duration, timeout: Timeout) -> TaskHandle;

    /// Fire `timeout` every `period` until cancelled.
    ///
    /// `period` must be non-zero. Implementations may raise shorter periods
    /// to a minimum of their own.
    fn every(&mut self, period: Duration, timeout: Timeout) -> TaskHandle;

    /// Cancel a scheduled timeout. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TaskHandle);
}
