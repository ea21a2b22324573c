//! Round state machine tests.
//!
//! These tests drive `Round` directly, without a session or clock:
//! - Match and mismatch resolution
//! - Win detection
//! - Loss freezing input

use memory_match::cards::{build_round, Alphabet, Card, RevealState, Symbol};
use memory_match::core::GameRng;
use memory_match::round::{IgnoreReason, Round, RoundId, RoundPhase, SelectOutcome};

const A: Symbol = Symbol::new(0);
const B: Symbol = Symbol::new(1);

/// Active round over `[A, A, B, B]`.
fn abab() -> Round {
    let cards = [A, A, B, B]
        .into_iter()
        .enumerate()
        .map(|(i, s)| Card::new(i, s))
        .collect();
    let mut round = Round::new(RoundId::new(1), cards);
    round.end_preview();
    round
}

fn reveal_states(round: &Round) -> Vec<RevealState> {
    round.cards().iter().map(|c| c.reveal).collect()
}

// =============================================================================
// Worked Example
// =============================================================================

/// Mismatch, revert, then two matches win the round.
#[test]
fn test_worked_example() {
    let mut round = abab();

    assert_eq!(round.select(0), SelectOutcome::Revealed(0));
    assert_eq!(
        round.select(2),
        SelectOutcome::Mismatched { first: 0, second: 2 }
    );
    assert_eq!(round.resolve_mismatch(), Some((0, 2)));
    assert!(round.cards().iter().all(Card::is_hidden));

    round.select(0);
    assert_eq!(
        round.select(1),
        SelectOutcome::Matched {
            first: 0,
            second: 1,
            matches: 1
        }
    );

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
    assert!(round.cards().iter().all(Card::is_matched));
}

// =============================================================================
// Resolution Invariants
// =============================================================================

/// Matched cards survive a stray revert and further clicks.
#[test]
fn test_matched_never_reverts() {
    let mut round = abab();
    round.select(0);
    round.select(1);

    assert_eq!(round.resolve_mismatch(), None);
    assert_eq!(
        round.select(0),
        SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
    );
    assert_eq!(
        reveal_states(&round),
        vec![
            RevealState::Matched,
            RevealState::Matched,
            RevealState::Hidden,
            RevealState::Hidden
        ]
    );
}

/// A mismatched pair is never marked matched and never counts.
#[test]
fn test_mismatch_never_matches() {
    let mut round = abab();
    round.select(1);
    round.select(3);
    assert_eq!(round.matches(), 0);
    assert!(round.cards().iter().all(|c| !c.is_matched()));

    round.resolve_mismatch();
    assert!(round.card(1).unwrap().is_hidden());
    assert!(round.card(3).unwrap().is_hidden());
}

/// Selection never exceeds two cards.
#[test]
fn test_selection_capped_at_two() {
    let mut round = abab();
    round.select(0);
    round.select(2);

    for position in 0..4 {
        round.select(position);
        assert!(round.selection().len() <= 2);
    }
    assert_eq!(round.selection().as_slice(), &[0, 2]);
}

// =============================================================================
// Loss
// =============================================================================

/// Losing keeps the pairs found and blocks every later click.
#[test]
fn test_loss_freezes_round() {
    let mut round = abab();
    round.select(0);
    round.select(1);

    assert_eq!(round.lose(), Some(1));
    for position in 0..4 {
        assert_eq!(
            round.select(position),
            SelectOutcome::Ignored(IgnoreReason::NotActive)
        );
    }
    assert_eq!(round.matches(), 1);
}

// =============================================================================
// Full Rounds
// =============================================================================

/// Playing every pair of a shuffled 8-pair round wins it exactly once.
#[test]
fn test_shuffled_round_played_to_win() {
    let alphabet = Alphabet::from_base(["a", "b", "c", "d", "e", "f", "g", "h"]).unwrap();
    let mut round = Round::new(RoundId::new(1), build_round(&alphabet, &mut GameRng::new(5)));
    assert_eq!(round.pairs(), 8);
    round.end_preview();

    let mut wins = 0;
    for symbol in alphabet.symbols() {
        let positions: Vec<usize> = round
            .cards()
            .iter()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.position)
            .collect();

        round.select(positions[0]);
        if let SelectOutcome::Won { score, .. } = round.select(positions[1]) {
            assert_eq!(score, 8);
            wins += 1;
        }
    }

    assert_eq!(wins, 1);
    assert_eq!(round.matches(), 8);
    assert_eq!(round.phase(), RoundPhase::Won);
}
