//! Win-streak tracking.
//!
//! The streak is a single non-negative integer persisted under one fixed
//! key. It only changes when a round ends: a win adds one, a loss resets it
//! to zero. Storage failures degrade to an in-memory streak and are logged,
//! never surfaced to the round.

mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

/// Key the streak is persisted under.
pub const STREAK_KEY: &str = "streak";

/// Persisted consecutive-wins counter.
#[derive(Clone, Debug)]
pub struct StreakStore<K> {
    store: K,
    current: u32,
}

impl<K: KeyValueStore> StreakStore<K> {
    /// Wrap a store and read the current streak from it.
    pub fn open(store: K) -> Self {
        let mut streak = Self { store, current: 0 };
        streak.current = streak.load();
        streak
    }

    /// Read the persisted streak.
    ///
    /// Returns 0 when nothing is stored, the store fails, or the value is
    /// not a non-negative integer.
    pub fn load(&self) -> u32 {
        match self.store.get(STREAK_KEY) {
            Ok(None) => 0,
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unreadable streak value");
                0
            }),
            Err(e) => {
                tracing::warn!("streak store unavailable, starting from 0: {e}");
                0
            }
        }
    }

    /// Persist a new streak value. The in-memory value updates even if the
    /// write fails.
    ///
    /// Saving does not notify anyone. `Session` announces each value it saves
    /// with a `StreakChanged` event, so callers using a `StreakStore` on its
    /// own must report changes themselves.
    pub fn save(&mut self, value: u32) {
        self.current = value;
        if let Err(e) = self.store.set(STREAK_KEY, value.to_string()) {
            tracing::warn!(streak = value, "failed to persist streak: {e}");
        }
    }

    /// Current streak.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Add one win and persist. Returns the new streak.
    pub fn record_win(&mut self) -> u32 {
        let next = self.current.saturating_add(1);
        self.save(next);
        next
    }

    /// Reset after a loss and persist. Returns the new streak (always 0).
    pub fn record_loss(&mut self) -> u32 {
        self.save(0);
        0
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Unwrap the underlying store.
    #[must_use]
    pub fn into_store(self) -> K {
        self.store
    }
}
