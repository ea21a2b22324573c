//! Deck builder.
//!
//! Lays out one round: every symbol of the alphabet twice, shuffled.

use super::definition::Alphabet;
use super::instance::{Card, RevealState};
use crate::core::GameRng;

/// Build a shuffled round layout.
///
/// Produces `2 * alphabet.len()` cards with each symbol exactly twice,
/// permuted with Fisher-Yates. Cards start `Revealed` for the preview and
/// carry their final grid position. The returned vector is the only
/// allocation; cards are shuffled in place.
///
/// ```
/// use memory_match::cards::{build_round, Alphabet};
/// use memory_match::core::GameRng;
///
/// let alphabet = Alphabet::from_base(["A", "B"]).unwrap();
/// let cards = build_round(&alphabet, &mut GameRng::new(1));
///
/// assert_eq!(cards.len(), 4);
/// assert!(cards.iter().enumerate().all(|(i, c)| c.position == i));
/// ```
#[must_use]
pub fn build_round(alphabet: &Alphabet, rng: &mut GameRng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(alphabet.card_count());
    for symbol in alphabet.symbols() {
        let card = Card {
            position: 0,
            symbol,
            reveal: RevealState::Revealed,
        };
        cards.push(card.clone());
        cards.push(card);
    }

    rng.shuffle(&mut cards);
    for (position, card) in cards.iter_mut().enumerate() {
        card.position = position;
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    #[test]
    fn test_two_of_each_symbol() {
        let alphabet = Alphabet::from_base(["a", "b", "c", "d"]).unwrap();
        let cards = build_round(&alphabet, &mut GameRng::new(42));

        assert_eq!(cards.len(), 8);
        for symbol in alphabet.symbols() {
            assert_eq!(cards.iter().filter(|c| c.symbol == symbol).count(), 2);
        }
    }

    #[test]
    fn test_cards_start_revealed() {
        let alphabet = Alphabet::from_base(["a", "b"]).unwrap();
        let cards = build_round(&alphabet, &mut GameRng::new(0));
        assert!(cards.iter().all(Card::is_revealed));
    }

    #[test]
    fn test_seeded_layout_is_reproducible() {
        let alphabet = Alphabet::from_base(["a", "b", "c", "d", "e"]).unwrap();
        let first = build_round(&alphabet, &mut GameRng::new(9));
        let second = build_round(&alphabet, &mut GameRng::new(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_fills_exact_capacity() {
        let alphabet = Alphabet::from_base(["a", "b", "c", "d"]).unwrap();
        let cards = build_round(&alphabet, &mut GameRng::new(3));

        assert_eq!(cards.capacity(), alphabet.card_count());
        assert!(cards.iter().enumerate().all(|(i, c)| c.position == i));
    }

    #[test]
    fn test_layout_follows_shuffled_symbols() {
        let alphabet = Alphabet::from_base(["a", "b", "c", "d", "e", "f"]).unwrap();
        let mut expected: Vec<Symbol> = alphabet.symbols().flat_map(|s| [s, s]).collect();
        GameRng::new(11).shuffle(&mut expected);

        let cards = build_round(&alphabet, &mut GameRng::new(11));
        let layout: Vec<Symbol> = cards.iter().map(|c| c.symbol).collect();
        assert_eq!(layout, expected);
    }

    #[test]
    fn test_single_pair() {
        let alphabet = Alphabet::from_base(["only"]).unwrap();
        let cards = build_round(&alphabet, &mut GameRng::new(5));
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.symbol == Symbol::new(0)));
    }
}
