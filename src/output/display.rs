//! Display functions for command results

use super::formatters::{create_progress_bar, score_pegs};
use crate::commands::{BenchmarkResult, ReplayResult, SolveResult};
use crate::core::{Palette, Table};
use colored::Colorize;

/// Print the rows of a table, one guess per line
pub fn print_table(table: &Table, palette: &Palette) {
    let nr_columns = table.nr_of_columns();

    for (i, row) in table.rows().iter().enumerate() {
        println!(
            "  {:>2}. {}  {}  ({})",
            (i + 1).to_string().bright_black(),
            palette.encode_guess(row.guess()).bright_white().bold(),
            score_pegs(row.score(), nr_columns),
            row.score()
        );
    }
}

/// Print the path the solver took to a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let nr_columns = result.secret.chars().count();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (turn, step) in (1..).zip(&result.guesses) {
        let mut line = format!(
            "  {:>2}. {}  {}",
            turn,
            step.code.bright_white().bold(),
            score_pegs(step.score, nr_columns)
        );
        if verbose {
            line.push_str(&format!(
                "   {} → {} candidates",
                step.candidates_before, step.candidates_after
            ));
            if let Some(worst) = step.worst_case {
                line.push_str(&format!(" (worst case {worst})"));
            }
        }
        println!("{line}");
    }

    let rows = result.guesses.len();
    let summary = if result.success {
        format!("✅ Found after {rows} {}", plural(rows, "guess", "guesses")).green()
    } else {
        format!("❌ Not found after {rows} {}", plural(rows, "guess", "guesses")).red()
    };
    println!("\n{}", summary.bold());
}

const fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (&guess_count, &count) in counts {
        let pct = (count as f64 / result.total_secrets as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print a replayed game and how to continue it
pub fn print_replay_result(result: &ReplayResult) {
    let palette = result.game.palette();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replayed {} rows ({} columns, colors {})",
        result.game.table().nr_of_rows(),
        result.game.nr_of_columns(),
        palette
    );
    println!("{}", "─".repeat(60).cyan());
    print_table(result.game.table(), palette);

    println!();
    match &result.suggestion {
        Some(guess) => println!(
            "Next guess: {}",
            palette.encode_guess(guess).bright_yellow().bold()
        ),
        None if result.game.is_finished() => {
            println!("{}", "✅ The secret has been found.".green().bold());
        }
        None => println!(
            "{}",
            "❌ No code satisfies the recorded scores.".red().bold()
        ),
    }

    println!("\nContinue with:\n  {}", result.next_query);
}
