//! Command implementations

pub mod benchmark;
pub mod play;
pub mod replay;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, MAX_BENCHMARK_SECRETS, run_benchmark};
pub use play::run_play;
pub use replay::{ReplayResult, replay_query};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_secret};
