//! Mastermind solving algorithms
//!
//! This module contains the candidate search and the guess proposal strategies.

mod engine;
pub mod minimax;
pub mod search;
pub mod strategy;

pub use engine::Solver;
pub use search::{Search, SearchBudget};
pub use strategy::{Guesser, GuesserType, MinimaxGuesser, RandomGuesser, UniqueGuesser};
