//! Wordle feedback calculation and representation
//!
//! Feedback is a positional vector of five marks:
//! - `b` = Absent (letter not in word, or all copies already accounted for)
//! - `y` = Present (letter in word, wrong position)
//! - `g` = Correct (letter in correct position)
//!
//! The b/y/g letters are the only external encoding; everything inside the
//! crate works on the tagged [`Mark`] values.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Parse from the boundary alphabet (b/y/g, case-insensitive)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(Self::Absent),
            'y' => Some(Self::Present),
            'g' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Encode to the boundary alphabet
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Absent => 'b',
            Self::Present => 'y',
            Self::Correct => 'g',
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }
}

/// Error returned when a b/y/g feedback string cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("Feedback must be exactly 5 characters, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback character '{0}' (use b, y or g)")]
    InvalidCharacter(char),
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Number of distinct feedback vectors (3^5)
    pub const COUNT: usize = 243;

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and remove them from
    ///    the target's letter pool
    /// 2. Second pass: mark remaining positions Present while the pool still
    ///    holds that letter, Absent otherwise
    ///
    /// A letter is therefore never credited more often than it occurs in the
    /// target.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Feedback, Word};
    ///
    /// let guess = Word::new("siege").unwrap();
    /// let target = Word::new("eerie").unwrap();
    ///
    /// assert_eq!(Feedback::compute(&guess, &target).to_string(), "byybg");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target_chars = target.chars();
        let mut available = target.letter_counts();
        let mut marks = [Mark::Absent; WORD_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess[i] == target_chars[i] {
                *mark = Mark::Correct;
                available[usize::from(guess[i] - b'a')] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let count = &mut available[usize::from(guess[i] - b'a')];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Compact base-3 index in `0..Feedback::COUNT`
    #[must_use]
    pub fn code(self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, mark| acc * 3 + mark.digit())
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬛',
            })
            .collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Decode a b/y/g string such as "bygbb"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(len));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(s.chars()) {
            *mark = Mark::from_char(ch).ok_or(FeedbackParseError::InvalidCharacter(ch))?;
        }

        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}
