//! Virtual-clock scheduler.
//!
//! Time only moves when the owner says so. Tests use it to step through
//! rounds deterministically; hosts with their own frame loop can drive it
//! from their clock.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;

use super::{Scheduler, TaskHandle, Timeout};

/// Shortest repeat period. Zero periods are raised to this so a repeating
/// task always moves forward in time.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Clone, Debug)]
struct Task {
    handle: TaskHandle,
    timeout: Timeout,
    period: Option<Duration>,
}

/// Deterministic scheduler driven by explicit clock advances.
///
/// Tasks fire ordered by due time, then by the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    next_handle: u64,
    queue: BTreeMap<(Duration, u64), Task>,
    keys: FxHashMap<TaskHandle, (Duration, u64)>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of outstanding tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Check whether a handle is still scheduled.
    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.keys.contains_key(&handle)
    }

    /// Pop the earliest task due at or before `deadline`.
    ///
    /// Moves the clock to the task's due time. Repeating tasks are
    /// rescheduled one period later under the same handle, or dropped once
    /// their next firing would lie past the end of representable time.
    pub fn next_due(&mut self, deadline: Duration) -> Option<Timeout> {
        let (&key, _) = self.queue.first_key_value()?;
        if key.0 > deadline {
            return None;
        }
        let task = self.queue.remove(&key)?;
        self.now = self.now.max(key.0);

        match task.period {
            Some(period) => {
                let timeout = task.timeout;
                let handle = task.handle;
                match self.now.checked_add(period) {
                    Some(due) => self.insert(due, task),
                    None => {
                        tracing::debug!(%handle, "repeating task ran out of clock");
                        self.keys.remove(&handle);
                    }
                }
                tracing::trace!(%handle, ?timeout, "repeating task fired");
                Some(timeout)
            }
            None => {
                self.keys.remove(&task.handle);
                Some(task.timeout)
            }
        }
    }

    /// Move the clock forward to `to` without firing anything.
    ///
    /// Never moves the clock backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    fn schedule(&mut self, delay: Duration, timeout: Timeout, period: Option<Duration>) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.insert(
            self.now.saturating_add(delay),
            Task {
                handle,
                timeout,
                period,
            },
        );
        handle
    }

    fn insert(&mut self, due: Duration, task: Task) {
        let key = (due, self.next_seq);
        self.next_seq += 1;
        self.keys.insert(task.handle, key);
        self.queue.insert(key, task);
    }
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay: Duration, timeout: Timeout) -> TaskHandle {
        self.schedule(delay, timeout, None)
    }

    fn every(&mut self, period: Duration, timeout: Timeout) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        self.schedule(period, timeout, Some(period))
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if let Some(key) = self.keys.remove(&handle) {
            self.queue.remove(&key);
        }
    }
}
