//! Minimax partition ranking
//!
//! Implements worst-case minimization: a probe is only as good as the largest
//! group of candidates it fails to tell apart.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, partition_sizes};
pub use selector::select_best_guess;
