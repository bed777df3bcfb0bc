//! Minimax-based guess selection strategy
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Guess;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// The sweep was cut short by its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlinePassed;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Ties go to guesses that are themselves candidates (they might win
/// outright), then to the earliest guess in the pool. Every guess checks
/// `deadline` before it is scored, so the sweep stops soon after it passes.
///
/// Returns the chosen guess and its worst case, or `None` if the guess pool
/// is empty.
///
/// # Errors
/// Returns `DeadlinePassed` once `deadline` has been reached.
pub fn select_best_guess<'a>(
    guess_pool: &'a [Guess],
    candidates: &[Guess],
    deadline: Option<Instant>,
) -> Result<Option<(&'a Guess, usize)>, DeadlinePassed> {
    let candidate_set: FxHashSet<&Guess> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return Err(DeadlinePassed);
            }
            let max_remaining = calculate_max_remaining(guess, candidates);
            let not_candidate = !candidate_set.contains(guess);
            Ok((max_remaining, not_candidate, index, guess))
        })
        .try_reduce_with(|a, b| Ok(if (b.0, b.1, b.2) < (a.0, a.1, a.2) { b } else { a }))
        .transpose()
        .map(|best| best.map(|(max_remaining, _, _, guess)| (guess, max_remaining)))
}
