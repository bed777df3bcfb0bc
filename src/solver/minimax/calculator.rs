//! Worst-case partition size of a guess
//!
//! A guess splits the candidates into groups that would return the same
//! score. Knuth's rule only cares about the largest group.

use crate::core::{Guess, Score};

/// Slot of `score` in a dense `(columns + 1)^2` counter table
const fn slot(score: Score, nr_columns: usize) -> usize {
    score.full * (nr_columns + 1) + score.partial
}

/// Largest number of candidates that could survive `guess`
///
/// Zero when there are no candidates.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Palette;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let palette = Palette::lettered(6).unwrap();
/// let guess = palette.decode_guess("AABB").unwrap();
/// let candidates = vec![
///     palette.decode_guess("ABCD").unwrap(),
///     palette.decode_guess("CDEF").unwrap(),
/// ];
///
/// // (1, 1) and (0, 0): each score keeps one candidate
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Guess, candidates: &[Guess]) -> usize {
    score_histogram(guess, candidates)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Candidate count per score, indexed by [`slot`]
fn score_histogram(guess: &Guess, candidates: &[Guess]) -> Vec<usize> {
    let nr_columns = guess.len();
    let mut histogram = vec![0; (nr_columns + 1) * (nr_columns + 1)];

    for candidate in candidates {
        histogram[slot(Score::between(guess, candidate), nr_columns)] += 1;
    }
    histogram
}
