//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::Dictionary;
use super::EMBEDDED_WORDS;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Lines are trimmed and lowercased; anything that is not
/// five ASCII letters afterwards is skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load a dictionary, degrading to an empty one if the file is unavailable
///
/// A missing word list is not fatal: the caller gets an empty dictionary and
/// every downstream operation reports that no word is available.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Dictionary {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(words) => {
            let dictionary = Dictionary::new(words);
            info!(
                "loaded {} words from {}",
                dictionary.len(),
                path.display()
            );
            dictionary
        }
        Err(e) => {
            warn!("cannot read word list {}: {e}", path.display());
            Dictionary::default()
        }
    }
}

/// The dictionary compiled into the binary
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::new(words_from_slice(EMBEDDED_WORDS))
}

/// Parse newline-separated text into words, skipping invalid lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_solver::wordlists::loader::words_from_slice;
/// use wordle_solver::wordlists::EMBEDDED_WORDS;
///
/// let words = words_from_slice(EMBEDDED_WORDS);
/// assert_eq!(words.len(), EMBEDDED_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
