//! Wordle solving algorithms
//!
//! The candidate pool narrows the dictionary from feedback; strategies rank
//! the next guess from the pool's current state.

pub mod frequency;
pub mod minimax;
mod pool;
pub mod strategy;

pub use pool::CandidatePool;
pub use strategy::{
    FrequencyStrategy, MinimaxStrategy, Strategy, StrategyParseError, StrategyType, suggest,
};
