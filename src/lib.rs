//! Wordle Solver
//!
//! A Wordle clone paired with a solver that narrows a candidate pool from
//! feedback and ranks the next guess by letter frequency or by minimax
//! partitioning.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::core::{Feedback, Word};
//! use wordle_solver::solver::{CandidatePool, StrategyType, suggest};
//! use wordle_solver::wordlists::loader::embedded_dictionary;
//!
//! let mut pool = CandidatePool::new(embedded_dictionary());
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//! pool.eliminate(&guess, Feedback::compute(&guess, &answer));
//!
//! let next = suggest(&pool, &StrategyType::Minimax).unwrap();
//! println!("Try {next} next, {} words left", pool.remaining());
//! ```

// Core domain types
pub mod core;

// Candidate pool and guess ranking
pub mod solver;

// Game rules and target selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
