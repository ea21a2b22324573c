//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing a `GameConfig`:
//! - the base glyph set the deck is built from
//! - preview, mismatch and tick durations
//! - the difficulty presets offered to the player
//!
//! Configuration can be built in code with the `with_*` builders or loaded
//! from JSON. Missing JSON fields fall back to the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Alphabet;

/// Glyphs used when no alphabet is configured.
pub const DEFAULT_GLYPHS: [&str; 8] = ["🍊", "🍌", "🍇", "🍉", "🍒", "🍎", "🍍", "🥝"];

/// Errors that prevent a session or round from being created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("glyph {0:?} appears more than once in the base set")]
    DuplicateGlyph(String),
    #[error("glyph {glyph:?} appears {count} times, expected exactly 2")]
    UnpairedGlyph { glyph: String, count: usize },
    #[error("alphabet has {0} symbols, at most {max} supported", max = u16::MAX)]
    TooManySymbols(usize),
    #[error("time budget must be at least one second")]
    ZeroBudget,
    #[error("{0} duration must be non-zero")]
    ZeroDuration(&'static str),
    #[error("at least one difficulty preset is required")]
    NoDifficulties,
    #[error("difficulty {0:?} is defined more than once")]
    DuplicateDifficulty(String),
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A named time budget offered to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Name shown in the difficulty picker.
    pub name: String,

    /// Seconds on the clock once the preview ends.
    pub budget_secs: u32,
}

impl Difficulty {
    /// Create a new difficulty preset.
    pub fn new(name: impl Into<String>, budget_secs: u32) -> Self {
        Self {
            name: name.into(),
            budget_secs,
        }
    }
}

/// Complete game configuration.
///
/// Round size is fixed by `glyphs` (two cards per glyph) and does not
/// change with the selected difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct base glyphs; each becomes one pair of cards.
    pub glyphs: Vec<String>,

    /// How long every card is shown before the round becomes active.
    pub preview_ms: u64,

    /// How long a mismatched pair stays face-up before flipping back.
    pub mismatch_ms: u64,

    /// Countdown tick period.
    pub tick_ms: u64,

    /// Difficulty presets, in display order.
    pub difficulties: Vec<Difficulty>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.iter().map(|g| (*g).to_string()).collect(),
            preview_ms: 2000,
            mismatch_ms: 1000,
            tick_ms: 1000,
            difficulties: vec![
                Difficulty::new("easy", 60),
                Difficulty::new("medium", 40),
                Difficulty::new("hard", 20),
            ],
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base glyph set.
    #[must_use]
    pub fn with_glyphs<I, S>(mut self, glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.glyphs = glyphs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the preview duration.
    #[must_use]
    pub fn with_preview(mut self, preview: Duration) -> Self {
        self.preview_ms = duration_ms(preview);
        self
    }

    /// Set the mismatch display duration.
    #[must_use]
    pub fn with_mismatch(mut self, mismatch: Duration) -> Self {
        self.mismatch_ms = duration_ms(mismatch);
        self
    }

    /// Set the countdown tick period.
    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick_ms = duration_ms(tick);
        self
    }

    /// Replace the difficulty presets.
    #[must_use]
    pub fn with_difficulties(mut self, difficulties: Vec<Difficulty>) -> Self {
        self.difficulties = difficulties;
        self
    }

    #[must_use]
    pub fn preview(&self) -> Duration {
        Duration::from_millis(self.preview_ms)
    }

    #[must_use]
    pub fn mismatch(&self) -> Duration {
        Duration::from_millis(self.mismatch_ms)
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Look up a difficulty preset by name.
    #[must_use]
    pub fn difficulty(&self, name: &str) -> Option<&Difficulty> {
        self.difficulties.iter().find(|d| d.name == name)
    }

    /// Build the alphabet described by `glyphs`.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        Alphabet::from_base(self.glyphs.iter().cloned())
    }

    /// Check every invariant the session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alphabet()?;

        for (label, ms) in [
            ("preview", self.preview_ms),
            ("mismatch", self.mismatch_ms),
            ("tick", self.tick_ms),
        ] {
            if ms == 0 {
                return Err(ConfigError::ZeroDuration(label));
            }
        }

        if self.difficulties.is_empty() {
            return Err(ConfigError::NoDifficulties);
        }
        for (i, difficulty) in self.difficulties.iter().enumerate() {
            if difficulty.budget_secs == 0 {
                return Err(ConfigError::ZeroBudget);
            }
            if self.difficulties[..i].iter().any(|d| d.name == difficulty.name) {
                return Err(ConfigError::DuplicateDifficulty(difficulty.name.clone()));
            }
        }

        Ok(())
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
