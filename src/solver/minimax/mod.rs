//! Minimax guess selection
//!
//! Implements Knuth-style worst-case minimization for Mastermind.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::{DeadlinePassed, select_best_guess};
