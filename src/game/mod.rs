//! The Wordle game itself
//!
//! Validates guesses, scores them against the hidden target, and tracks
//! win/loss.

mod picker;
mod state;

pub use picker::{FixedPicker, RandomPicker, TargetPicker};
pub use state::{GameState, GameStatus, GuessError, MAX_TURNS};
