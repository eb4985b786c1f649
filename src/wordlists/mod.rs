//! Word lists for Wordle
//!
//! Provides the shared [`Dictionary`] type, file loading, and the embedded
//! default list.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
