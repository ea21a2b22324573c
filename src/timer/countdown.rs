//! Round countdown clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::round::RoundId;
use crate::schedule::{Scheduler, TaskHandle, Timeout, TimeoutKind};

/// Result of delivering one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Time left after this tick.
    Running(u32),
    /// Reached zero on this tick. The countdown has stopped itself.
    Expired,
    /// The countdown is not running; the tick was late and is dropped.
    Stopped,
}

/// Countdown over a fixed budget of seconds.
///
/// Owns the repeating tick handle. Any tick that arrives after `stop` (or
/// after expiry) is reported as `Stopped`, so a tick racing a win can never
/// turn into a loss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    budget: u32,
    remaining: u32,
    handle: Option<TaskHandle>,
}

impl Countdown {
    /// A stopped countdown showing the full budget.
    #[must_use]
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            remaining: budget,
            handle: None,
        }
    }

    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Begin ticking every `period` for `round`.
    ///
    /// Restarting a running countdown replaces its tick handle.
    pub fn start<S>(&mut self, round: RoundId, period: Duration, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        self.stop(scheduler);
        let handle = scheduler.every(period, Timeout::new(round, TimeoutKind::Tick));
        tracing::debug!(%round, %handle, budget = self.budget, "countdown started");
        self.handle = Some(handle);
    }

    /// Consume one tick.
    pub fn tick<S>(&mut self, scheduler: &mut S) -> TickOutcome
    where
        S: Scheduler + ?Sized,
    {
        if !self.is_running() {
            return TickOutcome::Stopped;
        }

        self.remaining = self.remaining.saturating_sub(1);
        tracing::trace!(remaining = self.remaining, "tick");

        if self.remaining == 0 {
            self.stop(scheduler);
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    /// Cancel the tick handle. Returns true if the countdown was running.
    pub fn stop<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: Scheduler + ?Sized,
    {
        match self.handle.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }
}
