//! Interactive play
//!
//! The player thinks of a secret; the program proposes guesses and reads the
//! score for each one. Input and output are generic so the loop can be driven
//! from stdin or from a test buffer.

use crate::core::{Palette, Score};
use crate::game::{Game, Scoring};
use crate::output::formatters::score_pegs;
use crate::solver::{Guesser, Solver};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for at a prompt
enum Command {
    Quit,
    NewGame,
    Answer(String),
}

/// Run the interactive loop until the player quits or input ends
///
/// Returns the number of games that ended with the secret found.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Solver and
/// input problems are reported to the player and play continues.
pub fn run_play<G, R, W>(
    solver: &Solver<G>,
    nr_columns: usize,
    mut input: R,
    mut output: W,
) -> io::Result<usize>
where
    G: Guesser,
    R: BufRead,
    W: Write,
{
    print_intro(&mut output, solver.palette(), nr_columns)?;

    let mut game = Game::new(solver.palette().clone(), nr_columns);
    let mut solved = 0;

    loop {
        let guess = match game.next_suggestion(solver) {
            Ok(Some(guess)) => guess,
            Ok(None) if game.is_finished() => {
                writeln!(output, "Nothing left to guess.")?;
                return Ok(solved);
            }
            Ok(None) => {
                writeln!(
                    output,
                    "\n{}",
                    "No code satisfies your answers. One of them must be wrong.".red()
                )?;
                match stuck_prompt(&mut input, &mut output)? {
                    Command::NewGame => {
                        game = new_game(&mut output, solver.palette(), nr_columns)?;
                        continue;
                    }
                    _ => return farewell(&mut output, solved),
                }
            }
            Err(e) => {
                writeln!(output, "\n{} {e}", "Search gave up:".red())?;
                match stuck_prompt(&mut input, &mut output)? {
                    Command::NewGame => {
                        game = new_game(&mut output, solver.palette(), nr_columns)?;
                        continue;
                    }
                    _ => return farewell(&mut output, solved),
                }
            }
        };

        let turn = game.table().nr_of_rows() + 1;
        writeln!(output, "{}", "─".repeat(60).cyan())?;
        writeln!(
            output,
            "Turn {turn}: {}",
            solver.palette().encode_guess(&guess).bright_yellow().bold()
        )?;

        // Keep asking until the answer is accepted or the player leaves
        loop {
            let answer = match read_command(&mut input, &mut output, "Score (full partial)")? {
                Command::Quit => return farewell(&mut output, solved),
                Command::NewGame => {
                    game = new_game(&mut output, solver.palette(), nr_columns)?;
                    break;
                }
                Command::Answer(text) => text,
            };

            let score = if matches!(answer.as_str(), "win" | "solved") {
                Ok(Score::perfect(nr_columns))
            } else {
                answer.parse::<Score>()
            };

            let recorded = score.and_then(|s| {
                game.add_guess(guess.clone(), Scoring::Recorded(s))
                    .map(|row| row.score())
            });
            match recorded {
                Ok(score) => {
                    writeln!(output, "  {}", score_pegs(score, nr_columns))?;
                    break;
                }
                Err(e) => writeln!(output, "{} {e}", "Invalid answer:".red())?,
            }
        }

        if game.table().nr_of_rows() > 0 && game.is_finished() {
            solved += 1;
            let rows = game.table().nr_of_rows();
            writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                output,
                "{}",
                format!(
                    "Solved in {rows} {}!",
                    if rows == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
            writeln!(output, "{}", "═".repeat(60).bright_cyan())?;

            match read_command(&mut input, &mut output, "Play again? (yes/no)")? {
                Command::NewGame => {}
                Command::Answer(text) if matches!(text.as_str(), "yes" | "y") => {}
                _ => return farewell(&mut output, solved),
            }
            game = new_game(&mut output, solver.palette(), nr_columns)?;
        }
    }
}

fn print_intro<W: Write>(output: &mut W, palette: &Palette, nr_columns: usize) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(output, " {}", "Mastermind Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(
        output,
        "\nThink of a code of {nr_columns} colors from {palette}."
    )?;
    writeln!(output, "After each guess, enter the score as two numbers:")?;
    writeln!(output, "  full    - right color in the right column")?;
    writeln!(output, "  partial - right color in the wrong column")?;
    writeln!(output, "e.g. '1 2', or 'win' if the guess is your code.")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for a new game\n")
}

fn new_game<W: Write>(output: &mut W, palette: &Palette, nr_columns: usize) -> io::Result<Game> {
    writeln!(output, "\nNew game started!\n")?;
    Ok(Game::new(palette.clone(), nr_columns))
}

fn farewell<W: Write>(output: &mut W, solved: usize) -> io::Result<usize> {
    writeln!(output, "\nThanks for playing!")?;
    Ok(solved)
}

fn stuck_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Command> {
    loop {
        match read_command(input, output, "Type 'new' or 'quit'")? {
            Command::Answer(_) => {}
            command => return Ok(command),
        }
    }
}

/// Prompt and read one trimmed, lowercased line; end of input quits
fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Command> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Command::Quit);
    }

    let line = line.trim().to_lowercase();
    Ok(match line.as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        _ => Command::Answer(line),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SearchBudget, UniqueGuesser};

    fn run(script: &str) -> (usize, String) {
        let solver = Solver::new(
            UniqueGuesser,
            Palette::lettered(6).unwrap(),
            SearchBudget::default(),
        );
        let mut output = Vec::new();
        let solved = run_play(&solver, 4, script.as_bytes(), &mut output).unwrap();
        (solved, String::from_utf8(output).unwrap())
    }

    #[test]
    fn opening_guess_is_shown() {
        let (solved, output) = run("quit\n");
        assert_eq!(solved, 0);
        assert!(output.contains("AAAA"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn win_on_first_guess() {
        let (solved, output) = run("4 0\nno\n");
        assert_eq!(solved, 1);
        assert!(output.contains("Solved in 1 guess!"));
    }

    #[test]
    fn follows_the_player_answers() {
        // Secret BBBA: AAAA scores one full peg, BBBA is then proposed
        let (solved, output) = run("1 0\nwin\nno\n");
        assert_eq!(solved, 1);
        assert!(output.contains("BBBA"));
        assert!(output.contains("Solved in 2 guesses!"));
    }

    #[test]
    fn bad_answers_are_asked_again() {
        let (solved, output) = run("banana\n3 3\n4 0\n");
        assert_eq!(solved, 1);
        assert!(output.contains("malformed score"));
        assert!(output.contains("exceeds 4 columns"));
    }

    #[test]
    fn contradictions_are_reported() {
        let (solved, output) = run("0 2\nquit\n");
        assert_eq!(solved, 0);
        assert!(output.contains("No code satisfies your answers"));
    }

    #[test]
    fn new_game_starts_over() {
        let (solved, output) = run("1 0\nnew\n4 0\nno\n");
        assert_eq!(solved, 1);
        assert!(output.contains("New game started!"));
        assert!(output.contains("Solved in 1 guess!"));
    }

    #[test]
    fn end_of_input_quits() {
        let (solved, _) = run("");
        assert_eq!(solved, 0);
    }
}
