//! Candidate pool
//!
//! Tracks which dictionary words are still consistent with every piece of
//! feedback seen so far.

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;
use log::debug;
use rustc_hash::FxHashSet;

/// The solver's view of a session
///
/// `possible_words` only ever shrinks and is kept in dictionary order.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    all_words: Dictionary,
    possible_words: Vec<Word>,
    used_words: FxHashSet<Word>,
}

impl CandidatePool {
    /// Create a pool where every dictionary word is still possible
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        let possible_words = dictionary.words().to_vec();
        Self {
            all_words: dictionary,
            possible_words,
            used_words: FxHashSet::default(),
        }
    }

    /// Remove every word that would not have produced `feedback` for `guess`
    ///
    /// Applying the same guess and feedback twice leaves the pool unchanged
    /// after the first call.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Feedback, Word};
    /// use wordle_solver::solver::CandidatePool;
    /// use wordle_solver::wordlists::Dictionary;
    ///
    /// let dict: Dictionary = ["crane", "slate", "irate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut pool = CandidatePool::new(dict);
    ///
    /// let guess = Word::new("crane").unwrap();
    /// pool.eliminate(&guess, "bbgbg".parse().unwrap());
    /// assert_eq!(pool.possible_words()[0].text(), "slate");
    /// assert_eq!(pool.remaining(), 1);
    /// ```
    pub fn eliminate(&mut self, guess: &Word, feedback: Feedback) {
        let before = self.possible_words.len();
        self.possible_words
            .retain(|candidate| Feedback::compute(guess, candidate) == feedback);
        self.used_words.insert(guess.clone());

        debug!(
            "{guess} {feedback}: {before} -> {} candidates",
            self.possible_words.len()
        );
    }

    /// Every word in the dictionary
    #[inline]
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        self.all_words.words()
    }

    /// Words still consistent with all feedback, in dictionary order
    #[inline]
    #[must_use]
    pub fn possible_words(&self) -> &[Word] {
        &self.possible_words
    }

    /// Number of words still possible
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.possible_words.len()
    }

    /// True when no word fits the feedback seen so far
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.possible_words.is_empty()
    }

    /// Whether `word` has already been guessed this session
    #[inline]
    #[must_use]
    pub fn is_used(&self, word: &Word) -> bool {
        self.used_words.contains(word)
    }

    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used_words.len()
    }
}
