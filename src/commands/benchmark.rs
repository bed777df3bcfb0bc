//! Benchmark command
//!
//! Plays every secret of the code space (or the first `limit` of them) and
//! collects guess-count statistics.

use crate::core::{Error, Guess};
use crate::game::Game;
use crate::solver::{Guesser, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Most secrets one run will collect and play
pub const MAX_BENCHMARK_SECRETS: u64 = 1_000_000;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub nr_columns: usize,
    pub limit: Option<usize>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// How one secret went
enum Outcome {
    Solved(usize),
    Failed,
}

/// Run the solver against every secret in enumeration order
///
/// Secrets are played in parallel. A secret counts as failed when the solver
/// gives up, runs out of budget or needs more than `max_guesses` rows.
///
/// # Errors
/// Returns `Error::InvalidInput` when more than [`MAX_BENCHMARK_SECRETS`]
/// secrets would be played; nothing is collected in that case.
pub fn run_benchmark<G: Guesser + Sync>(
    solver: &Solver<G>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, Error> {
    let nr_secrets = planned_secrets(solver, config)?;
    let secrets: Vec<Guess> = solver
        .search()
        .candidates(config.nr_columns)
        .take(nr_secrets)
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} columns", config.nr_columns));

    let start = Instant::now();

    let outcomes: Vec<Outcome> = secrets
        .par_iter()
        .map(|secret| {
            let outcome = play_out(solver, secret, config.max_guesses);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failed = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for outcome in &outcomes {
        match *outcome {
            Outcome::Solved(guesses) => {
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Outcome::Failed => failed += 1,
        }
    }

    let total_secrets = outcomes.len();
    let solved = total_secrets - failed;

    Ok(BenchmarkResult {
        total_secrets,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Number of secrets the run will play, refusing runs over the cap
fn planned_secrets<G: Guesser>(
    solver: &Solver<G>,
    config: &BenchmarkConfig,
) -> Result<usize, Error> {
    let space = solver.search().space_size(config.nr_columns);
    let wanted = match (space, config.limit) {
        (Some(space), Some(limit)) => Some(space.min(limit as u64)),
        (Some(space), None) => Some(space),
        (None, Some(limit)) => Some(limit as u64),
        (None, None) => None,
    };

    match wanted {
        Some(n) if n <= MAX_BENCHMARK_SECRETS => usize::try_from(n)
            .map_err(|_| Error::InvalidInput(format!("{n} secrets do not fit in memory"))),
        _ => Err(Error::InvalidInput(format!(
            "benchmark would play {} secrets, at most {MAX_BENCHMARK_SECRETS} allowed; pass a limit",
            wanted.map_or_else(|| "more than u64::MAX".to_string(), |n| n.to_string())
        ))),
    }
}

fn play_out<G: Guesser>(solver: &Solver<G>, secret: &Guess, max_guesses: usize) -> Outcome {
    let Ok(mut game) = Game::with_secret(solver.palette().clone(), secret.clone()) else {
        return Outcome::Failed;
    };

    let mut guesses = 0;
    while !game.is_finished() {
        if guesses >= max_guesses {
            log::warn!(
                "{} not found within {max_guesses} guesses",
                solver.palette().encode_guess(secret)
            );
            return Outcome::Failed;
        }

        let guess = match game.next_suggestion(solver) {
            Ok(Some(guess)) => guess,
            Ok(None) => return Outcome::Failed,
            Err(e) => {
                log::warn!("{}: {e}", solver.palette().encode_guess(secret));
                return Outcome::Failed;
            }
        };

        if game.submit_guess(guess).is_err() {
            return Outcome::Failed;
        }
        guesses += 1;
    }

    Outcome::Solved(guesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::solver::{MinimaxGuesser, SearchBudget, UniqueGuesser};

    fn config(nr_columns: usize, limit: Option<usize>) -> BenchmarkConfig {
        BenchmarkConfig {
            nr_columns,
            limit,
            max_guesses: 20,
            show_progress: false,
        }
    }

    fn solver(nr_colors: usize) -> Solver<UniqueGuesser> {
        Solver::new(
            UniqueGuesser,
            Palette::lettered(nr_colors).unwrap(),
            SearchBudget::default(),
        )
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&solver(3), &config(3, None)).unwrap();

        assert_eq!(result.total_secrets, 27);
        assert_eq!(result.failed, 0);
        assert_eq!(result.solved, 27);
        assert!(result.average_guesses >= 1.0);
        assert_eq!(result.min_guesses, 1);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&solver(4), &config(3, None)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        let weighted: usize = result.distribution.iter().map(|(g, n)| g * n).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_respects_limit() {
        let result = run_benchmark(&solver(6), &config(4, Some(10))).unwrap();
        assert_eq!(result.total_secrets, 10);
    }

    #[test]
    fn benchmark_refuses_oversized_spaces() {
        let solver = solver(26);

        // 26^10 codes are never collected
        assert!(matches!(
            run_benchmark(&solver, &config(10, None)),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            run_benchmark(&solver, &config(10, Some(usize::MAX))),
            Err(Error::InvalidInput(_))
        ));

        // A limit keeps a huge space playable
        let result = run_benchmark(&solver, &config(10, Some(3))).unwrap();
        assert_eq!(result.total_secrets, 3);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn benchmark_counts_failures() {
        let mut config = config(3, None);
        config.max_guesses = 1;

        let result = run_benchmark(&solver(3), &config).unwrap();

        // Only the first code is found on the opening guess
        assert_eq!(result.solved, 1);
        assert_eq!(result.failed, 26);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let minimax = Solver::new(
            MinimaxGuesser,
            Palette::lettered(4).unwrap(),
            SearchBudget::default(),
        );
        let result = run_benchmark(&minimax, &config(3, None)).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for &guess_count in result.distribution.keys() {
            assert!((1..=20).contains(&guess_count));
        }
    }
}
