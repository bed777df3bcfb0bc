//! One game session
//!
//! A `Game` owns its table and, when the program is the code-maker, the
//! secret. Rows are scored in one of two explicit ways:
//!
//! - [`Scoring::Live`]: the game scores the guess against its secret
//! - [`Scoring::Recorded`]: the caller supplies a score from history, e.g. when
//!   a previously played game is replayed or the player holds the secret
//!
//! A game that knows its secret refuses recorded scores that disagree with it.

use crate::config::{ConfigError, GameConfig};
use crate::core::{Error, Guess, Palette, Score, ScoredRow, Table};
use crate::solver::{Guesser, Solver};
use rand::Rng;

/// Who knows the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Referee {
    /// The game holds the secret and scores guesses itself
    Secret(Guess),
    /// The player holds the secret and reports every score
    Player,
}

/// How a guess being added gets its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// Compute the score against the game's secret
    Live,
    /// Use a score recorded elsewhere
    Recorded(Score),
}

/// A Mastermind game: the secret (if known) and the table of play
#[derive(Debug, Clone)]
pub struct Game {
    palette: Palette,
    referee: Referee,
    table: Table,
}

impl Game {
    /// A game whose secret is held by the player
    ///
    /// Only [`Scoring::Recorded`] rows can be added.
    #[must_use]
    pub const fn new(palette: Palette, nr_columns: usize) -> Self {
        Self {
            palette,
            referee: Referee::Player,
            table: Table::new(nr_columns),
        }
    }

    /// A game that scores guesses against `secret`
    ///
    /// # Errors
    /// Returns `Error::InvalidColor` if the secret uses a color outside the
    /// palette.
    pub fn with_secret(palette: Palette, secret: Guess) -> Result<Self, Error> {
        check_colors(&palette, &secret)?;
        Ok(Self {
            table: Table::new(secret.len()),
            referee: Referee::Secret(secret),
            palette,
        })
    }

    /// A game with a secret drawn uniformly from the palette
    #[must_use]
    pub fn with_random_secret<R: Rng + ?Sized>(
        palette: Palette,
        nr_columns: usize,
        rng: &mut R,
    ) -> Self {
        let colors: Vec<_> = palette.colors().collect();
        let secret = Guess::new(
            (0..nr_columns)
                .map(|_| colors[rng.random_range(0..colors.len())])
                .collect(),
        );
        Self {
            table: Table::new(nr_columns),
            referee: Referee::Secret(secret),
            palette,
        }
    }

    /// A player-refereed game built from a validated configuration
    ///
    /// # Errors
    /// Returns the configuration's `ConfigError`, before any play starts.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.palette()?, config.nr_columns))
    }

    /// Add a guess scored the way `scoring` says
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the game is finished, the guess has the wrong
    ///   width, a live score is requested without a secret, or a recorded
    ///   score contradicts the secret
    /// - `Error::InvalidColor` if the guess uses a color outside the palette
    /// - `Error::InvariantViolation` if a recorded score has too many pegs
    pub fn add_guess(&mut self, guess: Guess, scoring: Scoring) -> Result<&ScoredRow, Error> {
        if self.is_finished() {
            return Err(Error::InvalidInput("the game is already finished".into()));
        }
        if guess.len() != self.nr_of_columns() {
            return Err(Error::InvalidInput(format!(
                "guess has {} colors, the game has {} columns",
                guess.len(),
                self.nr_of_columns()
            )));
        }
        check_colors(&self.palette, &guess)?;

        let score = match (&self.referee, scoring) {
            (Referee::Secret(secret), Scoring::Live) => Score::between(&guess, secret),
            (Referee::Player, Scoring::Live) => {
                return Err(Error::InvalidInput(
                    "no secret to score against; supply the recorded score".into(),
                ));
            }
            (Referee::Secret(secret), Scoring::Recorded(recorded)) => {
                let actual = Score::between(&guess, secret);
                if actual != recorded {
                    return Err(Error::InvalidInput(format!(
                        "recorded score ({recorded}) disagrees with the secret"
                    )));
                }
                recorded
            }
            (Referee::Player, Scoring::Recorded(recorded)) => recorded,
        };

        self.table.add_row(ScoredRow::new(guess, score))?;
        if self.is_finished() {
            log::info!("secret found after {} rows", self.table.nr_of_rows());
        }

        let last = self.table.nr_of_rows() - 1;
        self.table.row(last)
    }

    /// Live play: score `colors` against the secret
    ///
    /// # Errors
    /// See [`Game::add_guess`].
    pub fn submit_guess(&mut self, colors: impl Into<Guess>) -> Result<&ScoredRow, Error> {
        self.add_guess(colors.into(), Scoring::Live)
    }

    /// History reconstruction: append a row with a known score
    ///
    /// # Errors
    /// See [`Game::add_guess`].
    pub fn replay_guess(
        &mut self,
        colors: impl Into<Guess>,
        full: usize,
        partial: usize,
    ) -> Result<&ScoredRow, Error> {
        self.add_guess(colors.into(), Scoring::Recorded(Score::new(full, partial)))
    }

    /// Whether the secret has been found
    ///
    /// A game with no columns is finished from the start.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.nr_of_columns() == 0 || self.table.is_solved()
    }

    /// Ask `solver` for the next guess consistent with this game's table
    ///
    /// # Errors
    /// Returns `Error::SearchAborted` when the search budget runs out.
    pub fn next_suggestion<G: Guesser>(&self, solver: &Solver<G>) -> Result<Option<Guess>, Error> {
        solver.next_guess(&self.table)
    }

    #[inline]
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn nr_of_columns(&self) -> usize {
        self.table.nr_of_columns()
    }

    /// Whether the game scores guesses itself
    #[inline]
    #[must_use]
    pub const fn has_secret(&self) -> bool {
        matches!(self.referee, Referee::Secret(_))
    }
}

fn check_colors(palette: &Palette, guess: &Guess) -> Result<(), Error> {
    match guess.colors().iter().find(|&&c| !palette.contains(c)) {
        Some(color) => Err(Error::InvalidColor(format!("color #{}", color.index()))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SearchBudget, UniqueGuesser};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn palette() -> Palette {
        Palette::lettered(6).unwrap()
    }

    fn game_with_secret(secret: &str) -> Game {
        let palette = palette();
        let secret = palette.decode_guess(secret).unwrap();
        Game::with_secret(palette, secret).unwrap()
    }

    #[test]
    fn live_play_scores_against_the_secret() {
        let mut game = game_with_secret("ABCD");
        let guess = game.palette().decode_guess("AABB").unwrap();

        let row = game.submit_guess(guess).unwrap();
        assert_eq!(row.score(), Score::new(1, 1));
        assert!(!game.is_finished());

        let secret = game.palette().decode_guess("ABCD").unwrap();
        let row = game.submit_guess(secret).unwrap();
        assert_eq!(row.score(), Score::perfect(4));
        assert!(game.is_finished());
        assert_eq!(game.table().nr_of_rows(), 2);
    }

    #[test]
    fn finished_games_stay_finished_and_reject_more_guesses() {
        let mut game = game_with_secret("FACE");
        let secret = game.palette().decode_guess("FACE").unwrap();
        game.submit_guess(secret.clone()).unwrap();

        assert!(game.is_finished());
        assert!(matches!(
            game.submit_guess(secret),
            Err(Error::InvalidInput(_))
        ));
        assert!(game.is_finished());
        assert_eq!(game.table().nr_of_rows(), 1);
    }

    #[test]
    fn player_games_need_recorded_scores() {
        let palette = palette();
        let guess = palette.decode_guess("ABCD").unwrap();
        let mut game = Game::new(palette, 4);

        assert!(!game.has_secret());
        assert!(matches!(
            game.submit_guess(guess.clone()),
            Err(Error::InvalidInput(_))
        ));

        let row = game.replay_guess(guess, 2, 1).unwrap();
        assert_eq!((row.full(), row.partial()), (2, 1));
    }

    #[test]
    fn recorded_scores_must_match_a_known_secret() {
        let mut game = game_with_secret("ABCD");
        let guess = game.palette().decode_guess("ABCD").unwrap();

        assert!(matches!(
            game.replay_guess(guess.clone(), 3, 0),
            Err(Error::InvalidInput(_))
        ));
        assert!(game.replay_guess(guess, 4, 0).is_ok());
        assert!(game.is_finished());
    }

    #[test]
    fn recorded_scores_respect_the_peg_invariant() {
        let palette = palette();
        let guess = palette.decode_guess("ABCD").unwrap();
        let mut game = Game::new(palette, 4);

        assert_eq!(
            game.replay_guess(guess, 2, 3).map(|_| ()),
            Err(Error::InvariantViolation {
                full: 2,
                partial: 3,
                columns: 4
            })
        );
    }

    #[test]
    fn wrong_width_is_rejected() {
        let mut game = game_with_secret("ABCD");
        let guess = game.palette().decode_guess("ABC").unwrap();
        assert!(matches!(
            game.submit_guess(guess),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn foreign_colors_are_rejected() {
        let big = Palette::lettered(8).unwrap();
        let secret = big.decode_guess("ABCH").unwrap();
        assert!(matches!(
            Game::with_secret(palette(), secret),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn random_secret_is_playable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::with_random_secret(palette(), 4, &mut rng);
        let solver = Solver::new(UniqueGuesser, palette(), SearchBudget::default());

        let mut turns = 0;
        while let Some(guess) = game.next_suggestion(&solver).unwrap() {
            game.submit_guess(guess).unwrap();
            turns += 1;
            assert!(turns < 1296);
        }
        assert!(game.is_finished());
    }

    #[test]
    fn zero_columns_is_finished_immediately() {
        let game = Game::new(palette(), 0);
        assert!(game.is_finished());
    }

    #[test]
    fn from_config_fails_fast() {
        assert!(Game::from_config(&GameConfig::new(4, 0)).is_err());
        let game = Game::from_config(&GameConfig::default()).unwrap();
        assert_eq!(game.nr_of_columns(), 4);
        assert_eq!(game.palette().len(), 6);
    }
}
