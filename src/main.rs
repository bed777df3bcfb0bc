//! Mastermind Solver - CLI
//!
//! Interactive solver, secret solving, full-space benchmarks and history replay.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use mastermind_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, replay_query, run_benchmark, run_play, solve_secret,
    },
    config::GameConfig,
    output::{print_benchmark_result, print_replay_result, print_solve_result},
    solver::{GuesserType, RandomGuesser, Solver},
};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver that always guesses a code consistent with every score so far",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesser: unique (default), random, minimax
    #[arg(short, long, global = true, default_value = "unique")]
    strategy: String,

    /// Number of columns in a code
    #[arg(short, long, global = true, default_value = "4")]
    columns: usize,

    /// Number of colors, lettered from A
    #[arg(short = 'k', long, global = true, default_value = "6")]
    colors: usize,

    /// Custom color symbols in order, e.g. "RGBYOP" (overrides --colors)
    #[arg(long, global = true)]
    symbols: Option<String>,

    /// Seed for the random guesser
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Search step budget per guess
    #[arg(long, global = true, default_value_t = mastermind_solver::config::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// Search time budget per guess, in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG also applies
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you hold the secret and score the guesses (default)
    Play,

    /// Solve a specific secret code
    Solve {
        /// The secret to solve, e.g. ABCD
        secret: String,

        /// Stop after this many guesses
        #[arg(short, long, default_value_t = mastermind_solver::commands::solve::DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Show candidate counts for every step
        #[arg(short, long)]
        detail: bool,
    },

    /// Solve every secret in the code space
    Benchmark {
        /// Only test the first N secrets
        #[arg(short, long)]
        limit: Option<usize>,

        /// Count a secret as failed after this many guesses
        #[arg(short, long, default_value_t = mastermind_solver::commands::solve::DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Rebuild a game from a key/value history and suggest the next guess
    Replay {
        /// History such as "guess00=A&guess01=A&guess02=B&guess03=B&full0=1&partial0=1"
        query: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig {
        nr_columns: cli.columns,
        nr_colors: cli.colors,
        symbols: cli.symbols.clone(),
        max_steps: cli.max_steps,
        timeout: cli.timeout_ms.map(Duration::from_millis),
    };
    config.validate().context("invalid game configuration")?;

    let solver = Solver::new(
        guesser(&cli.strategy, cli.seed),
        config.palette()?,
        config.budget(),
    );
    log::info!(
        "{} columns, colors {}, guesser {}",
        config.nr_columns,
        solver.palette(),
        solver.guesser().name()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let solved = run_play(&solver, config.nr_columns, io::stdin().lock(), io::stdout())?;
            log::info!("{solved} games solved");
            Ok(())
        }
        Commands::Solve {
            secret,
            max_guesses,
            detail,
        } => run_solve_command(&solver, secret, max_guesses, detail),
        Commands::Benchmark { limit, max_guesses } => {
            run_benchmark_command(&solver, config.nr_columns, limit, max_guesses)
        }
        Commands::Replay { query } => {
            let result = replay_query(&query, &solver, config.nr_columns)?;
            print_replay_result(&result);
            Ok(())
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn guesser(name: &str, seed: Option<u64>) -> GuesserType {
    match (GuesserType::from_name(name), seed) {
        (GuesserType::Random(_), Some(seed)) => GuesserType::Random(RandomGuesser::seeded(seed)),
        (guesser, _) => guesser,
    }
}

fn run_solve_command(
    solver: &Solver<GuesserType>,
    secret: String,
    max_guesses: usize,
    detail: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(secret);
    config.max_guesses = max_guesses;

    let result = solve_secret(config, solver)?;
    print_solve_result(&result, detail);
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver<GuesserType>,
    nr_columns: usize,
    limit: Option<usize>,
    max_guesses: usize,
) -> Result<()> {
    let total = solver
        .search()
        .space_size(nr_columns)
        .map_or_else(|| "too many".to_string(), |n| n.to_string());
    match limit {
        Some(limit) => println!("Running benchmark on the first {limit} of {total} secrets..."),
        None => println!("Running benchmark on all {total} secrets..."),
    }

    let config = BenchmarkConfig {
        nr_columns,
        limit,
        max_guesses,
        show_progress: true,
    };
    let result = run_benchmark(solver, &config)?;
    print_benchmark_result(&result);
    Ok(())
}
