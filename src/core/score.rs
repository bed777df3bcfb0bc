//! Mastermind feedback and the scoring rule
//!
//! A score counts exact-position matches (`full`) and right-color,
//! wrong-position matches (`partial`). Partial matches follow the multiset
//! rule: each secret peg can be credited at most once.

use super::color::MAX_SYMBOLS;
use super::{Error, Guess};
use std::fmt;
use std::str::FromStr;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub full: usize,
    pub partial: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(full: usize, partial: usize) -> Self {
        Self { full, partial }
    }

    /// The winning score for a code of `columns` pegs
    #[inline]
    #[must_use]
    pub const fn perfect(columns: usize) -> Self {
        Self::new(columns, 0)
    }

    /// Total pegs awarded
    #[inline]
    #[must_use]
    pub const fn pegs(self) -> usize {
        self.full + self.partial
    }

    /// Whether this score means the secret was found
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, columns: usize) -> bool {
        self.full == columns
    }

    /// Score `candidate` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; every other peg goes into a
    ///    per-color tally for its side
    /// 2. Second pass: for each color, credit the smaller of the two tallies
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the two guesses differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Palette, Score};
    ///
    /// let palette = Palette::lettered(6).unwrap();
    /// let secret = palette.decode_guess("ABCD").unwrap();
    /// let guess = palette.decode_guess("DDAA").unwrap();
    ///
    /// // One D and one A are credited; the repeats are not.
    /// assert_eq!(Score::calculate(&guess, &secret).unwrap(), Score::new(0, 2));
    /// ```
    pub fn calculate(candidate: &Guess, secret: &Guess) -> Result<Self, Error> {
        if candidate.len() != secret.len() {
            return Err(Error::InvalidInput(format!(
                "cannot score a {}-column guess against a {}-column secret",
                candidate.len(),
                secret.len()
            )));
        }
        Ok(Self::between(candidate, secret))
    }

    /// Score two guesses already known to have equal length
    ///
    /// Symmetric in its arguments.
    #[must_use]
    pub(crate) fn between(a: &Guess, b: &Guess) -> Self {
        debug_assert_eq!(a.len(), b.len());

        let mut full = 0;
        let mut unmatched_a = [0u8; MAX_SYMBOLS];
        let mut unmatched_b = [0u8; MAX_SYMBOLS];

        for (&x, &y) in a.colors().iter().zip(b.colors()) {
            if x == y {
                full += 1;
            } else {
                unmatched_a[x.index()] += 1;
                unmatched_b[y.index()] += 1;
            }
        }

        let partial = unmatched_a
            .iter()
            .zip(&unmatched_b)
            .map(|(&x, &y)| usize::from(x.min(y)))
            .sum();

        Self { full, partial }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} full, {} partial", self.full, self.partial)
    }
}

impl FromStr for Score {
    type Err = Error;

    /// Parse `"<full> <partial>"`; a comma or slash also separates the numbers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::InvalidInput(format!("malformed score {s:?}, expected e.g. \"1 2\""));

        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|p| !p.is_empty());

        let (Some(full), Some(partial), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let full = full.parse().map_err(|_| malformed())?;
        let partial = partial.parse().map_err(|_| malformed())?;
        Ok(Self::new(full, partial))
    }
}
