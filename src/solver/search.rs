//! Candidate enumeration and consistency filtering
//!
//! The candidate space is every code of `nr_columns` colors, walked like an
//! odometer over the palette's successor relation: column 0 turns fastest.
//! A candidate is consistent when, taken as the secret, it reproduces every
//! recorded score in the table.

use crate::config::DEFAULT_MAX_STEPS;
use crate::core::{Color, Error, Guess, Palette, Score, Table};
use std::time::{Duration, Instant};

/// How often, in steps, the meter reads the clock
const CLOCK_INTERVAL: u64 = 4096;

/// Limits for a single search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Most consistency checks (or score evaluations) one call may spend
    pub max_steps: u64,
    /// Wall-clock limit for one call
    pub timeout: Option<Duration>,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            timeout: None,
        }
    }
}

/// Step and time accounting for one search call
#[derive(Debug)]
pub(crate) struct Meter {
    budget: SearchBudget,
    steps: u64,
    next_clock_check: u64,
    started: Instant,
}

impl Meter {
    pub(crate) fn new(budget: SearchBudget) -> Self {
        Self {
            budget,
            steps: 0,
            next_clock_check: CLOCK_INTERVAL,
            started: Instant::now(),
        }
    }

    /// Spend `steps`, failing once either limit is exceeded
    pub(crate) fn charge(&mut self, steps: u64) -> Result<(), Error> {
        self.steps = self.steps.saturating_add(steps);

        if self.steps > self.budget.max_steps {
            return Err(self.abort(format!(
                "step budget of {} exceeded",
                self.budget.max_steps
            )));
        }

        if self.steps >= self.next_clock_check {
            self.next_clock_check = self.steps.saturating_add(CLOCK_INTERVAL);
            self.check_clock()?;
        }
        Ok(())
    }

    /// Fail if the time limit has passed
    pub(crate) fn check_clock(&self) -> Result<(), Error> {
        match self.budget.timeout {
            Some(timeout) if self.started.elapsed() > timeout => Err(self.timed_out()),
            _ => Ok(()),
        }
    }

    /// Instant the time limit runs out, if there is one
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.budget
            .timeout
            .and_then(|timeout| self.started.checked_add(timeout))
    }

    /// The error for a call that ran out of time
    pub(crate) fn timed_out(&self) -> Error {
        let timeout = self.budget.timeout.unwrap_or_default();
        self.abort(format!("time budget of {timeout:?} exceeded"))
    }

    pub(crate) const fn steps(&self) -> u64 {
        self.steps
    }

    fn abort(&self, reason: String) -> Error {
        log::warn!("search aborted after {} steps: {reason}", self.steps);
        Error::SearchAborted {
            steps: self.steps,
            reason,
        }
    }
}

/// Every code of a given width, in odometer order
#[derive(Debug, Clone)]
pub struct Candidates<'p> {
    palette: &'p Palette,
    next: Option<Vec<Color>>,
}

impl<'p> Candidates<'p> {
    #[must_use]
    pub fn new(palette: &'p Palette, nr_columns: usize) -> Self {
        Self {
            palette,
            next: Some(vec![palette.first_color(); nr_columns]),
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = Guess;

    fn next(&mut self) -> Option<Guess> {
        let current = self.next.take()?;
        let guess = Guess::new(current.clone());
        self.next = advance(self.palette, current);
        Some(guess)
    }
}

/// Step to the successor code, or `None` after the last one
fn advance(palette: &Palette, mut colors: Vec<Color>) -> Option<Vec<Color>> {
    for slot in &mut colors {
        if let Some(next) = palette.next_color(*slot) {
            *slot = next;
            return Some(colors);
        }
        *slot = palette.first_color();
    }
    None
}

/// Whether `candidate` would have produced every score recorded in `table`
#[must_use]
pub fn is_consistent(candidate: &Guess, table: &Table) -> bool {
    table
        .rows()
        .iter()
        .all(|row| Score::between(candidate, row.guess()) == row.score())
}

/// The candidate space for one palette, with its budget
#[derive(Debug, Clone)]
pub struct Search {
    palette: Palette,
    budget: SearchBudget,
}

impl Search {
    #[must_use]
    pub const fn new(palette: Palette, budget: SearchBudget) -> Self {
        Self { palette, budget }
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn budget(&self) -> SearchBudget {
        self.budget
    }

    /// Fresh step meter for one call
    pub(crate) fn meter(&self) -> Meter {
        Meter::new(self.budget)
    }

    /// All codes of `nr_columns` colors, in enumeration order
    #[must_use]
    pub fn candidates(&self, nr_columns: usize) -> Candidates<'_> {
        Candidates::new(&self.palette, nr_columns)
    }

    /// `N^nr_columns`, or `None` if it overflows
    #[must_use]
    pub fn space_size(&self, nr_columns: usize) -> Option<u64> {
        let exponent = u32::try_from(nr_columns).ok()?;
        (self.palette.len() as u64).checked_pow(exponent)
    }

    /// First consistent candidate in enumeration order
    ///
    /// # Errors
    /// Returns `Error::SearchAborted` if the budget runs out first.
    pub fn first_consistent(&self, table: &Table) -> Result<Option<Guess>, Error> {
        let mut meter = self.meter();
        let cost = table.nr_of_rows().max(1) as u64;

        for candidate in self.candidates(table.nr_of_columns()) {
            meter.charge(cost)?;
            if is_consistent(&candidate, table) {
                log::debug!("first consistent candidate after {} steps", meter.steps());
                return Ok(Some(candidate));
            }
        }

        log::warn!(
            "no candidate satisfies {} rows ({} steps)",
            table.nr_of_rows(),
            meter.steps()
        );
        Ok(None)
    }

    /// Every consistent candidate, in enumeration order
    ///
    /// # Errors
    /// Returns `Error::SearchAborted` if the budget runs out first.
    pub fn all_consistent(&self, table: &Table) -> Result<Vec<Guess>, Error> {
        let mut meter = self.meter();
        self.collect_consistent(table, &mut meter)
    }

    pub(crate) fn collect_consistent(
        &self,
        table: &Table,
        meter: &mut Meter,
    ) -> Result<Vec<Guess>, Error> {
        let cost = table.nr_of_rows().max(1) as u64;
        let mut consistent = Vec::new();

        for candidate in self.candidates(table.nr_of_columns()) {
            meter.charge(cost)?;
            if is_consistent(&candidate, table) {
                consistent.push(candidate);
            }
        }

        log::debug!(
            "{} consistent candidates after {} steps",
            consistent.len(),
            meter.steps()
        );
        Ok(consistent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoredRow;

    fn search(nr_colors: usize) -> Search {
        Search::new(
            Palette::lettered(nr_colors).unwrap(),
            SearchBudget::default(),
        )
    }

    fn codes(search: &Search, nr_columns: usize) -> Vec<String> {
        search
            .candidates(nr_columns)
            .map(|g| search.palette().encode_guess(&g))
            .collect()
    }

    #[test]
    fn enumerates_column_zero_fastest() {
        let search = search(2);
        assert_eq!(codes(&search, 2), ["AA", "BA", "AB", "BB"]);
    }

    #[test]
    fn space_size_matches_enumeration() {
        let search = search(3);
        for columns in 0..4 {
            assert_eq!(
                search.candidates(columns).count() as u64,
                search.space_size(columns).unwrap()
            );
        }
    }

    #[test]
    fn zero_columns_yield_the_empty_guess() {
        let search = search(6);
        let all: Vec<Guess> = search.candidates(0).collect();
        assert_eq!(all, [Guess::empty()]);
    }

    #[test]
    fn single_color_palette_has_one_candidate() {
        let search = search(1);
        assert_eq!(codes(&search, 4), ["AAAA"]);
    }

    #[test]
    fn empty_table_accepts_the_first_candidate() {
        let search = search(6);
        let first = search.first_consistent(&Table::new(4)).unwrap().unwrap();
        assert_eq!(search.palette().encode_guess(&first), "AAAA");
    }

    #[test]
    fn consistent_candidates_reproduce_every_score() {
        let search = search(6);
        let palette = search.palette();
        let secret = palette.decode_guess("ABCD").unwrap();

        let mut table = Table::new(4);
        for code in ["AABB", "CCDD", "ACEF"] {
            let guess = palette.decode_guess(code).unwrap();
            let score = Score::calculate(&guess, &secret).unwrap();
            table.add_row(ScoredRow::new(guess, score)).unwrap();
        }

        let consistent = search.all_consistent(&table).unwrap();
        assert!(consistent.contains(&secret));
        for candidate in &consistent {
            assert!(is_consistent(candidate, &table));
        }
        assert_eq!(
            search.first_consistent(&table).unwrap().as_ref(),
            consistent.first()
        );
    }

    #[test]
    fn contradictory_history_exhausts_to_none() {
        let search = search(6);
        let palette = search.palette();
        let mut table = Table::new(4);
        let guess = palette.decode_guess("AAAA").unwrap();
        // Four As cannot yield partial pegs.
        table
            .add_row(ScoredRow::new(guess, Score::new(0, 3)))
            .unwrap();

        assert_eq!(search.first_consistent(&table), Ok(None));
        assert_eq!(search.all_consistent(&table), Ok(Vec::new()));
    }

    #[test]
    fn step_budget_aborts_the_search() {
        let palette = Palette::lettered(6).unwrap();
        let budget = SearchBudget {
            max_steps: 10,
            timeout: None,
        };
        let search = Search::new(palette, budget);
        let mut table = Table::new(4);
        let guess = search.palette().decode_guess("FFFF").unwrap();
        table
            .add_row(ScoredRow::new(guess, Score::new(4, 0)))
            .unwrap();

        assert!(matches!(
            search.first_consistent(&table),
            Err(Error::SearchAborted { steps: 11, .. })
        ));
    }

    #[test]
    fn deadline_follows_the_timeout() {
        let untimed = Meter::new(SearchBudget::default());
        assert_eq!(untimed.deadline(), None);

        let timed = Meter::new(SearchBudget {
            max_steps: 1,
            timeout: Some(Duration::from_secs(5)),
        });
        let deadline = timed.deadline().unwrap();
        assert!(deadline > Instant::now());
        assert!(matches!(
            timed.timed_out(),
            Error::SearchAborted { steps: 0, .. }
        ));
    }

    #[test]
    fn meter_checks_the_clock() {
        let meter = Meter::new(SearchBudget {
            max_steps: u64::MAX,
            timeout: Some(Duration::ZERO),
        });
        std::thread::sleep(Duration::from_millis(2));
        assert!(matches!(
            meter.check_clock(),
            Err(Error::SearchAborted { .. })
        ));
    }
}
