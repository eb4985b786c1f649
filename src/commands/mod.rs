//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayMode, PlayOutcome, run_play};
pub use solve::{GuessStep, SolveResult, solve_word};
