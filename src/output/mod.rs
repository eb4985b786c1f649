//! Terminal output formatting
//!
//! Rendering for feedback rows, game summaries, and command results. Nothing
//! here feeds back into the game or solver.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_feedback, print_game_result, print_solve_result,
};
