//! Round state machine.
//!
//! ## Phases
//!
//! `Previewing -> Active -> (Won | Lost)`
//!
//! - **Previewing**: every card face-up, input ignored
//! - **Active**: cards hidden, `select` flips them and resolves pairs
//! - **Won**: every pair found (terminal)
//! - **Lost**: the clock ran out (terminal)
//!
//! The round never touches a clock. Callers schedule the preview end and
//! mismatch revert, then call back into `end_preview` / `resolve_mismatch`.
//! Both are no-ops when the round has moved on, so a late callback is harmless.

use serde::{Deserialize, Serialize};

use super::selection::Selection;
use crate::cards::{Card, CardPosition};

/// Generation number of a round.
///
/// Every scheduled timeout carries the id of the round that created it so
/// stale callbacks can be recognised after a restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Lifecycle phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    Previewing,
    Active,
    Won,
    Lost,
}

impl RoundPhase {
    /// Won or Lost.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

/// Why a selection was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Round is previewing or already over.
    NotActive,
    /// No card at that position.
    OutOfRange,
    /// Card is part of a found pair.
    AlreadyMatched,
    /// Card is already the pending selection.
    AlreadySelected,
    /// A mismatched pair is still on display.
    ResolutionPending,
}

/// Result of selecting a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Revealed(CardPosition),
    /// Second card matched the first.
    Matched {
        first: CardPosition,
        second: CardPosition,
        matches: usize,
    },
    /// Second card differs; both stay face-up until `resolve_mismatch`.
    Mismatched {
        first: CardPosition,
        second: CardPosition,
    },
    /// Final pair found.
    Won {
        first: CardPosition,
        second: CardPosition,
        score: usize,
    },
}

impl SelectOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }
}

/// One play-through of the grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    id: RoundId,
    cards: Vec<Card>,
    pairs: usize,
    phase: RoundPhase,
    selection: Selection,
    matches: usize,
}

impl Round {
    /// Start a round in the preview phase with every card face-up.
    ///
    /// `cards` must hold each symbol exactly twice, as produced by
    /// [`build_round`](crate::cards::build_round).
    #[must_use]
    pub fn new(id: RoundId, mut cards: Vec<Card>) -> Self {
        for card in &mut cards {
            card.reveal();
        }
        let pairs = cards.len() / 2;
        Self {
            id,
            cards,
            pairs,
            phase: RoundPhase::Previewing,
            selection: Selection::new(),
            matches: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, position: CardPosition) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Pairs in the round (alphabet size).
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// A mismatched pair is on display and input is blocked.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.selection.is_full()
    }

    /// Hide every card and accept input.
    ///
    /// Returns false if the round was not previewing.
    pub fn end_preview(&mut self) -> bool {
        if self.phase != RoundPhase::Previewing {
            return false;
        }
        for card in &mut self.cards {
            card.hide();
        }
        self.phase = RoundPhase::Active;
        true
    }

    /// Flip a card and resolve the pair if it is the second one.
    pub fn select(&mut self, position: CardPosition) -> SelectOutcome {
        if self.phase != RoundPhase::Active {
            return SelectOutcome::Ignored(IgnoreReason::NotActive);
        }
        let Some(card) = self.cards.get(position) else {
            return SelectOutcome::Ignored(IgnoreReason::OutOfRange);
        };
        if card.is_matched() {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if self.selection.is_full() {
            return SelectOutcome::Ignored(IgnoreReason::ResolutionPending);
        }
        if self.selection.contains(position) {
            return SelectOutcome::Ignored(IgnoreReason::AlreadySelected);
        }

        self.cards[position].reveal();
        self.selection.push(position);

        let Some((first, second)) = self.selection.pair() else {
            return SelectOutcome::Revealed(position);
        };

        if self.cards[first].symbol != self.cards[second].symbol {
            return SelectOutcome::Mismatched { first, second };
        }

        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        self.selection.clear();
        self.matches += 1;

        if self.matches == self.pairs {
            self.phase = RoundPhase::Won;
            SelectOutcome::Won {
                first,
                second,
                score: self.pairs,
            }
        } else {
            SelectOutcome::Matched {
                first,
                second,
                matches: self.matches,
            }
        }
    }

    /// Flip a displayed mismatch back face-down and clear the selection.
    ///
    /// No-op unless the round is active with a full, unmatched selection.
    pub fn resolve_mismatch(&mut self) -> Option<(CardPosition, CardPosition)> {
        if self.phase != RoundPhase::Active {
            return None;
        }
        let (first, second) = self.selection.pair()?;
        self.cards[first].hide();
        self.cards[second].hide();
        self.selection.clear();
        Some((first, second))
    }

    /// End the round as lost. Returns the pairs found, or `None` if the
    /// round was not active.
    pub fn lose(&mut self) -> Option<usize> {
        if self.phase != RoundPhase::Active {
            return None;
        }
        self.phase = RoundPhase::Lost;
        Some(self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{RevealState, Symbol};

    /// Layout `[A, A, B, B]`.
    fn round() -> Round {
        let cards = [0, 0, 1, 1]
            .iter()
            .enumerate()
            .map(|(i, &s)| Card::new(i, Symbol::new(s)))
            .collect();
        Round::new(RoundId::new(1), cards)
    }

    fn active_round() -> Round {
        let mut round = round();
        assert!(round.end_preview());
        round
    }

    #[test]
    fn test_round_id() {
        let id = RoundId::new(3);
        assert_eq!(id.next(), RoundId::new(4));
        assert_eq!(format!("{}", id), "Round(3)");
    }

    #[test]
    fn test_preview_reveals_then_hides() {
        let mut round = round();
        assert_eq!(round.phase(), RoundPhase::Previewing);
        assert!(round.cards().iter().all(Card::is_revealed));
        assert_eq!(round.pairs(), 2);

        assert!(round.end_preview());
        assert_eq!(round.phase(), RoundPhase::Active);
        assert!(round.cards().iter().all(Card::is_hidden));

        // Second call is a no-op
        assert!(!round.end_preview());
    }

    #[test]
    fn test_select_during_preview_ignored() {
        let mut round = round();
        assert_eq!(
            round.select(0),
            SelectOutcome::Ignored(IgnoreReason::NotActive)
        );
    }

    #[test]
    fn test_match() {
        let mut round = active_round();
        assert_eq!(round.select(0), SelectOutcome::Revealed(0));
        assert_eq!(
            round.select(1),
            SelectOutcome::Matched {
                first: 0,
                second: 1,
                matches: 1
            }
        );
        assert!(round.card(0).unwrap().is_matched());
        assert!(round.card(1).unwrap().is_matched());
        assert!(round.selection().is_empty());
        assert_eq!(round.matches(), 1);
    }

    #[test]
    fn test_mismatch_blocks_until_resolved() {
        let mut round = active_round();
        round.select(0);
        assert_eq!(
            round.select(2),
            SelectOutcome::Mismatched { first: 0, second: 2 }
        );
        assert!(round.is_resolving());
        assert_eq!(round.card(2).unwrap().reveal, RevealState::Revealed);

        // Dropped, not queued
        assert_eq!(
            round.select(3),
            SelectOutcome::Ignored(IgnoreReason::ResolutionPending)
        );
        assert!(round.card(3).unwrap().is_hidden());

        assert_eq!(round.resolve_mismatch(), Some((0, 2)));
        assert!(round.card(0).unwrap().is_hidden());
        assert!(round.card(2).unwrap().is_hidden());
        assert!(!round.is_resolving());

        // Nothing left to resolve
        assert_eq!(round.resolve_mismatch(), None);
    }

    #[test]
    fn test_reselect_is_not_a_self_match() {
        let mut round = active_round();
        round.select(0);
        assert_eq!(
            round.select(0),
            SelectOutcome::Ignored(IgnoreReason::AlreadySelected)
        );
        assert_eq!(round.selection().len(), 1);
        assert_eq!(round.matches(), 0);
    }

    #[test]
    fn test_matched_and_out_of_range_ignored() {
        let mut round = active_round();
        round.select(0);
        round.select(1);

        assert_eq!(
            round.select(1),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(
            round.select(99),
            SelectOutcome::Ignored(IgnoreReason::OutOfRange)
        );
    }

    #[test]
    fn test_win() {
        let mut round = active_round();
        round.select(0);
        round.select(1);
        round.select(2);
        assert_eq!(
            round.select(3),
            SelectOutcome::Won {
                first: 2,
                second: 3,
                score: 2
            }
        );
        assert_eq!(round.phase(), RoundPhase::Won);
        assert!(round.phase().is_finished());

        // Terminal: no loss, no further input
        assert_eq!(round.lose(), None);
        assert!(round.select(0).is_ignored());
    }

    #[test]
    fn test_lose_freezes_input() {
        let mut round = active_round();
        round.select(0);
        round.select(1);
        round.select(2);

        assert_eq!(round.lose(), Some(1));
        assert_eq!(round.phase(), RoundPhase::Lost);
        assert_eq!(
            round.select(3),
            SelectOutcome::Ignored(IgnoreReason::NotActive)
        );
        assert_eq!(round.lose(), None);
    }

    #[test]
    fn test_late_revert_after_loss_is_noop() {
        let mut round = active_round();
        round.select(0);
        round.select(2);
        round.lose();

        assert_eq!(round.resolve_mismatch(), None);
        assert!(round.card(0).unwrap().is_revealed());
    }

    #[test]
    fn test_lose_during_preview_is_noop() {
        let mut round = round();
        assert_eq!(round.lose(), None);
        assert_eq!(round.phase(), RoundPhase::Previewing);
    }
}
