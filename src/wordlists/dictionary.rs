//! Immutable, shareable word list

use crate::core::Word;
use std::sync::Arc;

/// A sorted, de-duplicated set of valid words
///
/// The word list is read-only once built and cloning only bumps a reference
/// count, so independent game sessions can share one dictionary.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Arc<[Word]>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    /// use wordle_solver::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::new(["slate", "crane", "slate"].map(|w| Word::new(w).unwrap()));
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict.words()[0].text(), "crane");
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self {
            words: words.into(),
        }
    }

    /// All words in lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Look a word up by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.words
            .binary_search(&word)
            .ok()
            .map(|index| &self.words[index])
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn sorted_and_deduplicated() {
        let d = dict(&["slate", "crane", "irate", "crane"]);
        let texts: Vec<&str> = d.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "irate", "slate"]);
    }

    #[test]
    fn contains_and_find() {
        let d = dict(&["slate", "crane"]);
        assert!(d.contains(&Word::new("crane").unwrap()));
        assert!(!d.contains(&Word::new("irate").unwrap()));
        assert_eq!(d.find("SLATE").map(Word::text), Some("slate"));
        assert!(d.find("nope").is_none());
        assert!(d.find("irate").is_none());
    }

    #[test]
    fn empty_dictionary() {
        let d = Dictionary::default();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert!(d.find("crane").is_none());
    }

    #[test]
    fn clones_share_storage() {
        let d = dict(&["crane"]);
        let shared = d.clone();
        assert!(std::ptr::eq(d.words(), shared.words()));
    }
}
