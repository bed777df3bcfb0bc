//! Colors and the palette they are drawn from
//!
//! A `Color` is a position in its palette. The palette owns the only mapping
//! between colors and their one-character textual form, and defines the
//! successor relation used to enumerate guesses.

use super::{Error, Guess};
use crate::config::ConfigError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Most symbols a custom palette may carry (`0-9`, `A-Z`, `a-z`)
pub const MAX_SYMBOLS: usize = 62;

/// Most colors a lettered palette may carry (`A`..`Z`)
pub const MAX_LETTERED: usize = 26;

/// One peg color
///
/// Colors compare by identity only; the ordering exists so the palette can be
/// walked deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Position of this color in its palette
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An ordered, finite set of colors with a bidirectional textual encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    symbols: Vec<char>,
    lookup: FxHashMap<char, Color>,
}

impl Palette {
    /// Build a palette from its symbols, in enumeration order
    ///
    /// # Errors
    /// Returns `ConfigError` if the palette is empty, has more than
    /// [`MAX_SYMBOLS`] entries, repeats a symbol or uses whitespace.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Palette;
    ///
    /// let palette = Palette::new("RGBY".chars()).unwrap();
    /// assert_eq!(palette.len(), 4);
    /// assert_eq!(palette.encode(palette.first_color()), 'R');
    /// ```
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(ConfigError::TooManyColors {
                requested: symbols.len(),
                max: MAX_SYMBOLS,
            });
        }

        let mut lookup = FxHashMap::default();
        for (i, &symbol) in symbols.iter().enumerate() {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::InvalidSymbol(symbol));
            }
            if lookup.insert(symbol, Color(i as u8)).is_some() {
                return Err(ConfigError::DuplicateColor(symbol));
            }
        }

        Ok(Self { symbols, lookup })
    }

    /// The first `nr_colors` capital letters, `A` upward
    ///
    /// # Errors
    /// Returns `ConfigError` if `nr_colors` is zero or above [`MAX_LETTERED`].
    pub fn lettered(nr_colors: usize) -> Result<Self, ConfigError> {
        if nr_colors > MAX_LETTERED {
            return Err(ConfigError::TooManyColors {
                requested: nr_colors,
                max: MAX_LETTERED,
            });
        }
        Self::new(('A'..='Z').take(nr_colors))
    }

    /// Number of colors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects empty palettes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn first_color(&self) -> Color {
        Color(0)
    }

    #[inline]
    #[must_use]
    pub fn has_next(&self, color: Color) -> bool {
        color.index() + 1 < self.len()
    }

    /// Successor of `color`, or `None` for the last color
    #[inline]
    #[must_use]
    pub fn next_color(&self, color: Color) -> Option<Color> {
        self.has_next(color).then(|| Color(color.0 + 1))
    }

    /// Whether `color` belongs to this palette
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        color.index() < self.len()
    }

    /// All colors in enumeration order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.len()).map(|i| Color(i as u8))
    }

    /// Textual symbol of `color`
    ///
    /// # Panics
    /// Panics if `color` comes from a larger palette.
    #[must_use]
    pub fn encode(&self, color: Color) -> char {
        self.symbols[color.index()]
    }

    /// Parse one symbol
    ///
    /// # Errors
    /// Returns `Error::InvalidColor` unless `text` is exactly one known symbol.
    pub fn decode(&self, text: &str) -> Result<Color, Error> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => self.decode_char(symbol),
            _ => Err(Error::InvalidColor(text.to_string())),
        }
    }

    /// Parse one symbol character
    ///
    /// # Errors
    /// Returns `Error::InvalidColor` for symbols outside the palette.
    pub fn decode_char(&self, symbol: char) -> Result<Color, Error> {
        self.lookup
            .get(&symbol)
            .copied()
            .ok_or_else(|| Error::InvalidColor(symbol.to_string()))
    }

    /// Parse a whole guess written as consecutive symbols, e.g. `"ABCD"`
    ///
    /// # Errors
    /// Returns `Error::InvalidColor` on the first unknown symbol.
    pub fn decode_guess(&self, text: &str) -> Result<Guess, Error> {
        text.trim()
            .chars()
            .map(|symbol| self.decode_char(symbol))
            .collect::<Result<Vec<_>, _>>()
            .map(Guess::new)
    }

    /// Write a guess as consecutive symbols
    #[must_use]
    pub fn encode_guess(&self, guess: &Guess) -> String {
        guess.colors().iter().map(|&c| self.encode(c)).collect()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
