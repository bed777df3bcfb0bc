//! Secret solving command
//!
//! Plays a known secret against the solver and records the solution path.

use crate::core::{Error, Score};
use crate::game::Game;
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Guesser, Solver};

/// Guess limit used when none is given
pub const DEFAULT_MAX_GUESSES: usize = 20;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: String,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest candidate group this guess could have left
    pub worst_case: Option<usize>,
}

/// Solve `config.secret` with the given solver
///
/// Play stops when the secret is found, the solver has no consistent guess
/// left, or `max_guesses` rows have been played.
///
/// # Errors
///
/// Returns an error if:
/// - The secret uses symbols outside the solver's palette
/// - A search runs out of budget
pub fn solve_secret<G: Guesser>(config: SolveConfig, solver: &Solver<G>) -> Result<SolveResult, Error> {
    let palette = solver.palette();
    let secret = palette.decode_guess(&config.secret)?;
    let mut game = Game::with_secret(palette.clone(), secret)?;

    let mut guesses: Vec<GuessStep> = Vec::new();

    while guesses.len() < config.max_guesses && !game.is_finished() {
        let candidates = solver.candidates(game.table())?;
        let candidates_before = candidates.len();

        let Some(guess) = game.next_suggestion(solver)? else {
            log::warn!("no consistent guess left for {}", config.secret);
            break;
        };

        let worst_case =
            (candidates_before > 1).then(|| calculate_max_remaining(&guess, &candidates));
        let code = palette.encode_guess(&guess);
        let score = game.submit_guess(guess)?.score();

        let candidates_after = solver.count_candidates(game.table())?;

        guesses.push(GuessStep {
            code,
            score,
            candidates_before,
            candidates_after,
            worst_case,
        });
    }

    Ok(SolveResult {
        success: game.is_finished(),
        guesses,
        secret: config.secret,
    })
}
