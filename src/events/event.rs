//! Semantic game events.
//!
//! The session never draws anything. Every observable change is published
//! as a `GameEvent`, and a thin adapter in the host turns events into
//! presentation calls (flip a tile, update a counter, open a modal).

use serde::{Deserialize, Serialize};

use crate::cards::{CardPosition, Symbol};
use crate::round::RoundId;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every pair found. `score` is the number of pairs.
    Won { score: usize },
    /// Clock ran out. `score` is the pairs found before it did.
    Lost { score: usize },
}

impl Outcome {
    #[must_use]
    pub fn score(self) -> usize {
        match self {
            Outcome::Won { score } | Outcome::Lost { score } => score,
        }
    }

    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

/// Which screen regions should be visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Difficulty picker and start button; grid and stats hidden.
    Setup,
    /// Grid and stats visible, no modal.
    Board,
    /// Grid frozen behind the win or game-over summary.
    Summary(Outcome),
}

/// A change the presentation layer should reflect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ViewChanged { view: View },

    /// New grid, all cards face-up for the preview.
    ///
    /// `layout[i]` is the symbol at position `i`; `glyphs[s]` is how symbol
    /// `s` is drawn.
    RoundStarted {
        round: RoundId,
        layout: Vec<Symbol>,
        glyphs: Vec<String>,
    },

    /// Preview over; every card is face-down and input is live.
    PreviewEnded,

    CardRevealed { position: CardPosition },

    CardsMatched { first: CardPosition, second: CardPosition },

    /// Pair differs; both stay face-up until `CardsHidden`.
    CardsMismatched { first: CardPosition, second: CardPosition },

    CardsHidden { first: CardPosition, second: CardPosition },

    ScoreChanged { score: usize },

    TimerChanged { remaining: u32 },

    RoundWon { score: usize },

    RoundLost { score: usize },

    StreakChanged { streak: u32 },
}
