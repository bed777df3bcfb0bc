//! Mastermind Solver
//!
//! A Mastermind game engine with a consistent-guess solver: score guesses,
//! record them in a table, and ask for a guess that agrees with every score
//! so far.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Palette, Score};
//! use mastermind_solver::game::Game;
//! use mastermind_solver::solver::{SearchBudget, Solver, UniqueGuesser};
//!
//! let palette = Palette::lettered(6).unwrap();
//! let secret = palette.decode_guess("ABCD").unwrap();
//! let mut game = Game::with_secret(palette.clone(), secret).unwrap();
//! let solver = Solver::new(UniqueGuesser, palette, SearchBudget::default());
//!
//! while let Some(guess) = game.next_suggestion(&solver).unwrap() {
//!     game.submit_guess(guess).unwrap();
//! }
//! assert!(game.is_finished());
//! assert_eq!(game.table().rows().last().unwrap().score(), Score::perfect(4));
//! ```

// Core domain types
pub mod core;

// Game limits and configuration
pub mod config;

// Game sessions
pub mod game;

// Key/value history codec
pub mod params;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
