//! Target word selection
//!
//! Games draw their secret word through [`TargetPicker`] so tests and the
//! `solve` command can fix the answer.

use crate::core::Word;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the secret word for a new game
pub trait TargetPicker {
    /// Pick an index into `words`, or `None` if nothing can be picked
    fn pick(&mut self, words: &[Word]) -> Option<usize>;
}

/// Uniformly random target
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<ThreadRng> {
    /// Picker backed by the thread-local generator
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetPicker for RandomPicker<R> {
    fn pick(&mut self, words: &[Word]) -> Option<usize> {
        if words.is_empty() {
            None
        } else {
            Some(self.rng.random_range(0..words.len()))
        }
    }
}

/// Always picks the same word
pub struct FixedPicker {
    target: String,
}

impl FixedPicker {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into().to_lowercase(),
        }
    }
}

impl TargetPicker for FixedPicker {
    fn pick(&mut self, words: &[Word]) -> Option<usize> {
        words.iter().position(|word| word.text() == self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn fixed_picker_finds_word() {
        let list = words(&["crane", "slate", "irate"]);
        assert_eq!(FixedPicker::new("SLATE").pick(&list), Some(1));
        assert_eq!(FixedPicker::new("grate").pick(&list), None);
    }

    #[test]
    fn random_picker_stays_in_range() {
        let list = words(&["crane", "slate", "irate"]);
        let mut picker = RandomPicker::from_entropy();
        for _ in 0..50 {
            assert!(picker.pick(&list).unwrap() < list.len());
        }
    }

    #[test]
    fn seeded_picker_is_reproducible() {
        let list = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let first: Vec<_> = {
            let mut picker = RandomPicker::seeded(7);
            (0..10).map(|_| picker.pick(&list)).collect()
        };
        let second: Vec<_> = {
            let mut picker = RandomPicker::seeded(7);
            (0..10).map(|_| picker.pick(&list)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn pickers_handle_empty_lists() {
        assert!(RandomPicker::seeded(1).pick(&[]).is_none());
        assert!(FixedPicker::new("crane").pick(&[]).is_none());
    }
}
