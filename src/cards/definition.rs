//! Symbols and the alphabet they come from.
//!
//! A `Symbol` is the opaque face value printed on a card. The engine only
//! compares symbols for equality; the `Alphabet` maps each one back to the
//! glyph the presentation layer draws.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Opaque face value of a card.
///
/// Indexes into the round's `Alphabet`. Exactly two cards share each symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position of this symbol in its alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// The fixed set of distinct symbols used by a round.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Alphabet, Symbol};
///
/// let base = Alphabet::from_base(["🍊", "🍌"]).unwrap();
/// let paired = Alphabet::from_pairs(["🍊", "🍌", "🍊", "🍌"]).unwrap();
///
/// assert_eq!(base, paired);
/// assert_eq!(base.glyph(Symbol::new(1)), Some("🍌"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    glyphs: Vec<String>,
}

impl Alphabet {
    /// Build from a set of distinct glyphs. Each glyph becomes one pair.
    pub fn from_base<I, S>(glyphs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        if glyphs.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if glyphs.len() > usize::from(u16::MAX) {
            return Err(ConfigError::TooManySymbols(glyphs.len()));
        }
        for (i, glyph) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(glyph) {
                return Err(ConfigError::DuplicateGlyph(glyph.clone()));
            }
        }
        Ok(Self { glyphs })
    }

    /// Build from a flat sequence in which every glyph appears exactly twice.
    ///
    /// Symbols are numbered in order of first appearance.
    pub fn from_pairs<I, S>(sequence: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order: Vec<String> = Vec::new();
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();

        for glyph in sequence {
            let glyph = glyph.into();
            let count = counts.entry(glyph.clone()).or_insert(0);
            if *count == 0 {
                order.push(glyph);
            }
            *count += 1;
        }

        if order.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        for glyph in &order {
            let count = counts[glyph];
            if count != 2 {
                return Err(ConfigError::UnpairedGlyph {
                    glyph: glyph.clone(),
                    count,
                });
            }
        }

        Self::from_base(order)
    }

    /// Number of distinct symbols (pairs in a round).
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a constructed alphabet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of cards a round built from this alphabet holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.glyphs.len() * 2
    }

    /// Glyph drawn for a symbol.
    #[must_use]
    pub fn glyph(&self, symbol: Symbol) -> Option<&str> {
        self.glyphs.get(symbol.index()).map(String::as_str)
    }

    /// Iterate over every symbol in order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.glyphs.len()).map(|i| Symbol(i as u16))
    }

    /// All glyphs in symbol order.
    #[must_use]
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }
}
