//! Guess proposal strategies
//!
//! Defines the Guesser trait and concrete implementations.

use super::minimax::{DeadlinePassed, select_best_guess};
use super::search::Search;
use crate::core::{Error, Guess, Table};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A strategy for proposing the next guess from a game's history
pub trait Guesser {
    /// Propose a guess consistent with every row of a non-empty `table`
    ///
    /// Returns `None` when no candidate reproduces the recorded scores.
    ///
    /// # Errors
    /// Returns `Error::SearchAborted` when the search budget runs out.
    fn propose(&self, search: &Search, table: &Table) -> Result<Option<Guess>, Error>;

    /// Fixed opening guess for an empty table
    fn opening(&self, search: &Search, nr_columns: usize) -> Option<Guess> {
        search.candidates(nr_columns).next()
    }
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum GuesserType {
    /// First consistent candidate (default)
    Unique(UniqueGuesser),
    /// Random consistent candidate
    Random(RandomGuesser),
    /// Worst-case minimization
    Minimax(MinimaxGuesser),
}

impl Guesser for GuesserType {
    fn propose(&self, search: &Search, table: &Table) -> Result<Option<Guess>, Error> {
        match self {
            Self::Unique(g) => g.propose(search, table),
            Self::Random(g) => g.propose(search, table),
            Self::Minimax(g) => g.propose(search, table),
        }
    }

    fn opening(&self, search: &Search, nr_columns: usize) -> Option<Guess> {
        match self {
            Self::Unique(g) => g.opening(search, nr_columns),
            Self::Random(g) => g.opening(search, nr_columns),
            Self::Minimax(g) => g.opening(search, nr_columns),
        }
    }
}

impl Default for GuesserType {
    fn default() -> Self {
        Self::Unique(UniqueGuesser)
    }
}

impl GuesserType {
    /// Names accepted by [`GuesserType::from_name`]
    pub const NAMES: [&'static str; 3] = ["unique", "random", "minimax"];

    /// Create guesser from name string
    ///
    /// Supported names: "unique", "first", "random", "minimax", "knuth".
    /// Defaults to unique if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser::new()),
            "minimax" | "knuth" => Self::Minimax(MinimaxGuesser),
            "unique" | "first" => Self::Unique(UniqueGuesser),
            other => {
                log::warn!("unknown guesser {other:?}, using unique");
                Self::Unique(UniqueGuesser)
            }
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unique(_) => "unique",
            Self::Random(_) => "random",
            Self::Minimax(_) => "minimax",
        }
    }
}

/// First consistent candidate in enumeration order
///
/// Despite the name, the candidate need not be the only consistent one; it is
/// the first. Repeated calls on the same table return the same guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueGuesser;

impl Guesser for UniqueGuesser {
    fn propose(&self, search: &Search, table: &Table) -> Result<Option<Guess>, Error> {
        search.first_consistent(table)
    }
}

/// Uniformly random consistent candidate
///
/// The seed is fixed per guesser, so repeated calls on the same table draw
/// the same candidate. Separate guessers built with [`RandomGuesser::new`]
/// draw differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGuesser {
    pub seed: u64,
}

impl RandomGuesser {
    /// A guesser with a freshly drawn seed
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for RandomGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl Guesser for RandomGuesser {
    fn propose(&self, search: &Search, table: &Table) -> Result<Option<Guess>, Error> {
        let candidates = search.all_consistent(table)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(candidates.choose(&mut rng).cloned())
    }
}

/// Minimise the largest group of candidates that could remain
///
/// Only consistent candidates are considered as guesses, so the pick always
/// agrees with the table. Ties go to enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxGuesser;

impl Guesser for MinimaxGuesser {
    fn propose(&self, search: &Search, table: &Table) -> Result<Option<Guess>, Error> {
        let mut meter = search.meter();
        let candidates = search.collect_consistent(table, &mut meter)?;

        // With two or fewer left, guessing one of them is never worse.
        if candidates.len() <= 2 {
            return Ok(candidates.into_iter().next());
        }

        let size = candidates.len() as u64;
        meter.charge(size.saturating_mul(size))?;

        let best = select_best_guess(&candidates, &candidates, meter.deadline())
            .map_err(|DeadlinePassed| meter.timed_out())?;

        Ok(best.map(|(guess, worst)| {
            log::debug!(
                "minimax pick leaves at most {worst} of {} candidates",
                candidates.len()
            );
            guess.clone()
        }))
    }

    /// Knuth's opening: two colors split evenly, e.g. `AABB`
    fn opening(&self, search: &Search, nr_columns: usize) -> Option<Guess> {
        let palette = search.palette();
        let first = palette.first_color();
        let second = palette.next_color(first).unwrap_or(first);
        let half = nr_columns / 2;

        Some(Guess::new(
            (0..nr_columns)
                .map(|column| if column < half { first } else { second })
                .collect(),
        ))
    }
}
