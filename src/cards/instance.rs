//! Card instances - runtime card state.
//!
//! A `Card` is one face-down (or face-up) tile on the grid. It is owned by
//! the round for its whole lifetime and discarded when the next round starts.

use serde::{Deserialize, Serialize};

use super::definition::Symbol;

/// Grid index of a card.
pub type CardPosition = usize;

/// Visibility of a card.
///
/// `Hidden -> Revealed -> Matched` is the normal path; a mismatch sends a
/// card from `Revealed` back to `Hidden`. `Matched` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

/// A card on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Index in the grid.
    pub position: CardPosition,

    /// Face value.
    pub symbol: Symbol,

    /// Current visibility.
    pub reveal: RevealState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(position: CardPosition, symbol: Symbol) -> Self {
        Self {
            position,
            symbol,
            reveal: RevealState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.reveal == RevealState::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal == RevealState::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.reveal == RevealState::Matched
    }

    /// Turn the card face-up. Matched cards are left alone.
    pub fn reveal(&mut self) {
        if !self.is_matched() {
            self.reveal = RevealState::Revealed;
        }
    }

    /// Turn the card face-down. Matched cards are left alone.
    pub fn hide(&mut self) {
        if !self.is_matched() {
            self.reveal = RevealState::Hidden;
        }
    }

    /// Lock the card as part of a found pair.
    pub fn mark_matched(&mut self) {
        self.reveal = RevealState::Matched;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_lifecycle() {
        let mut card = Card::new(3, Symbol::new(1));
        assert!(card.is_hidden());

        card.reveal();
        assert!(card.is_revealed());

        card.hide();
        assert!(card.is_hidden());

        card.reveal();
        card.mark_matched();
        assert!(card.is_matched());
    }

    #[test]
    fn test_matched_is_terminal() {
        let mut card = Card::new(0, Symbol::new(0));
        card.mark_matched();

        card.hide();
        assert!(card.is_matched());

        card.reveal();
        assert!(card.is_matched());
    }

    #[test]
    fn test_reveal_state_default() {
        assert_eq!(RevealState::default(), RevealState::Hidden);
    }
}
