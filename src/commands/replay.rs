//! Replay command
//!
//! Rebuilds a game from its key/value history, asks the solver for the next
//! guess and produces the query string that continues the game.

use crate::core::{Error, Guess};
use crate::game::Game;
use crate::params::{decode_history, encode_history, guess_key, parse_query, to_query};
use crate::solver::{Guesser, Solver};

/// Result of replaying a history
pub struct ReplayResult {
    pub game: Game,
    pub suggestion: Option<Guess>,
    /// History plus the suggestion as the next row's cells; the caller
    /// appends that row's `full`/`partial` to continue
    pub next_query: String,
}

/// Rebuild a player-refereed game from `query` and suggest the next guess
///
/// # Errors
///
/// Returns an error if:
/// - The query is malformed or a row is incomplete
/// - A row uses an unknown symbol or claims too many pegs
/// - The search runs out of budget
pub fn replay_query<G: Guesser>(
    query: &str,
    solver: &Solver<G>,
    nr_columns: usize,
) -> Result<ReplayResult, Error> {
    let palette = solver.palette();
    let mut game = Game::new(palette.clone(), nr_columns);

    let rows = decode_history(parse_query(query)?, &mut game)?;
    log::info!("replayed {rows} rows");

    let suggestion = game.next_suggestion(solver)?;

    let mut pairs = encode_history(game.table(), palette);
    if let Some(guess) = &suggestion {
        let row = game.table().nr_of_rows();
        for (column, &color) in guess.colors().iter().enumerate() {
            pairs.push((guess_key(row, column), palette.encode(color).to_string()));
        }
    }

    Ok(ReplayResult {
        next_query: to_query(&pairs),
        game,
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::solver::{SearchBudget, UniqueGuesser};

    fn solver() -> Solver<UniqueGuesser> {
        Solver::new(
            UniqueGuesser,
            Palette::lettered(6).unwrap(),
            SearchBudget::default(),
        )
    }

    #[test]
    fn empty_query_suggests_the_opening() {
        let result = replay_query("", &solver(), 4).unwrap();

        assert!(result.game.table().is_empty());
        assert_eq!(result.next_query, "guess00=A&guess01=A&guess02=A&guess03=A");
    }

    #[test]
    fn continuation_extends_the_history() {
        let solver = solver();
        let query = "guess00=A&guess01=A&guess02=A&guess03=A&full0=1&partial0=0";

        let result = replay_query(query, &solver, 4).unwrap();
        let suggestion = result.suggestion.unwrap();
        assert_eq!(solver.palette().encode_guess(&suggestion), "BBBA");
        assert_eq!(
            result.next_query,
            format!("{query}&guess10=B&guess11=B&guess12=B&guess13=A")
        );

        // Scoring the suggested row continues the game
        let next = format!("{}&full1=4&partial1=0", result.next_query);
        let finished = replay_query(&next, &solver, 4).unwrap();
        assert!(finished.game.is_finished());
        assert_eq!(finished.suggestion, None);
    }

    #[test]
    fn unscored_row_is_rejected() {
        let result = replay_query("guess00=A&guess01=A&guess02=A&guess03=A", &solver(), 4);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn contradictory_history_has_no_suggestion() {
        let query = "guess00=A&guess01=A&guess02=A&guess03=A&full0=0&partial0=2";
        let result = replay_query(query, &solver(), 4).unwrap();

        assert_eq!(result.suggestion, None);
        assert!(!result.game.is_finished());
        assert_eq!(result.next_query, query);
    }
}
