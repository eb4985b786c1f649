//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackParseError, Mark};
pub use word::{WORD_LENGTH, Word, WordError};
