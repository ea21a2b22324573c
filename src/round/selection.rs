//! Pending card selection.
//!
//! Holds the zero, one or two face-up cards that have not been resolved yet.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardPosition;

/// Cards revealed this turn and awaiting match resolution.
///
/// Never holds more than two positions. Once full, the round must resolve
/// it before anything else is added.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pending: SmallVec<[CardPosition; 2]>,
}

impl Selection {
    /// Maximum number of pending cards.
    pub const CAPACITY: usize = 2;

    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Two cards are waiting for resolution.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pending.len() == Self::CAPACITY
    }

    #[must_use]
    pub fn contains(&self, position: CardPosition) -> bool {
        self.pending.contains(&position)
    }

    /// The pending pair, if two cards are selected.
    #[must_use]
    pub fn pair(&self) -> Option<(CardPosition, CardPosition)> {
        match self.pending.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Add a card. Returns false if the selection is already full.
    pub fn push(&mut self, position: CardPosition) -> bool {
        if self.is_full() {
            return false;
        }
        self.pending.push(position);
        true
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardPosition] {
        &self.pending
    }
}
