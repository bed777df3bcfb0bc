//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: colors, guesses, scores
//! and the game table. Everything here is pure and deterministic.

pub mod color;
mod error;
mod guess;
mod score;
mod table;

pub use color::{Color, Palette};
pub use error::Error;
pub use guess::Guess;
pub use score::Score;
pub use table::{ScoredRow, Table};
