//! Guess representation
//!
//! A Guess is a fixed sequence of colors: either a proposed code or the secret.

use super::Color;

/// An immutable code of colors, one per column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    colors: Box<[Color]>,
}

impl Guess {
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors: colors.into_boxed_slice(),
        }
    }

    /// The guess with no columns
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color at `column`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn color(&self, column: usize) -> Option<Color> {
        self.colors.get(column).copied()
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl From<Vec<Color>> for Guess {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}
