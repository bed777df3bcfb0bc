//! Main Mastermind solver interface

use super::search::{Search, SearchBudget};
use super::strategy::Guesser;
use crate::core::{Error, Guess, Palette, Table};

/// Main Mastermind solver
///
/// Coordinates the solving process using a given guesser.
#[derive(Debug, Clone)]
pub struct Solver<G: Guesser> {
    guesser: G,
    search: Search,
}

impl<G: Guesser> Solver<G> {
    /// Create a new solver with the given guesser, palette and budget
    #[must_use]
    pub const fn new(guesser: G, palette: Palette, budget: SearchBudget) -> Self {
        Self {
            guesser,
            search: Search::new(palette, budget),
        }
    }

    #[inline]
    #[must_use]
    pub const fn guesser(&self) -> &G {
        &self.guesser
    }

    #[inline]
    #[must_use]
    pub const fn search(&self) -> &Search {
        &self.search
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        self.search.palette()
    }

    /// Get the next guess given the table so far
    ///
    /// Returns `None` when no guess is needed or possible: the code has no
    /// columns, a row already found the secret, or no candidate reproduces
    /// the recorded scores. An empty table gets the guesser's fixed opening.
    ///
    /// # Errors
    /// Returns `Error::SearchAborted` when the search budget runs out.
    pub fn next_guess(&self, table: &Table) -> Result<Option<Guess>, Error> {
        let nr_columns = table.nr_of_columns();

        if nr_columns == 0 || table.is_solved() {
            return Ok(None);
        }

        if table.is_empty() {
            return Ok(self.guesser.opening(&self.search, nr_columns));
        }

        self.guesser.propose(&self.search, table)
    }

    /// Count how many candidates are still consistent with the table
    ///
    /// # Errors
    /// Returns `Error::SearchAborted` when the search budget runs out.
    pub fn count_candidates(&self, table: &Table) -> Result<usize, Error> {
        self.search.all_consistent(table).map(|c| c.len())
    }

    /// Get the current candidates (public accessor)
    ///
    /// # Errors
    /// Returns `Error::SearchAborted` when the search budget runs out.
    pub fn candidates(&self, table: &Table) -> Result<Vec<Guess>, Error> {
        self.search.all_consistent(table)
    }
}
