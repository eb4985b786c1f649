//! Game state machine
//!
//! A game starts `InProgress` and ends `Won` on a correct guess or `Lost` once
//! six guesses are used up.

use super::picker::TargetPicker;
use crate::core::{Feedback, Word, WordError};
use crate::wordlists::Dictionary;
use log::info;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Number of guesses allowed per game
pub const MAX_TURNS: usize = 6;

/// Why a guess was not accepted
///
/// A rejected guess does not use up a turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly 5 letters")]
    InvalidLength,
    #[error("Guess must contain only letters")]
    NotAlphabetic,
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(String),
    #[error("The game is already over")]
    GameOver,
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(_) => Self::InvalidLength,
            WordError::NonAscii | WordError::InvalidCharacters => Self::NotAlphabetic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One game of Wordle against a hidden target
#[derive(Debug, Clone)]
pub struct GameState {
    dictionary: Dictionary,
    target: Word,
    turn: usize,
    won: bool,
    used_words: FxHashSet<Word>,
}

impl GameState {
    /// Start a game with a target drawn by `picker`
    ///
    /// Returns `None` if the dictionary is empty or the picker declines.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    /// use wordle_solver::game::{FixedPicker, GameState};
    /// use wordle_solver::wordlists::Dictionary;
    ///
    /// let dict: Dictionary = ["crane", "slate"].iter().map(|w| Word::new(*w).unwrap()).collect();
    /// let mut game = GameState::new(dict, &mut FixedPicker::new("slate")).unwrap();
    ///
    /// let feedback = game.make_guess("crane").unwrap();
    /// assert_eq!(feedback.to_string(), "bbgbg");
    /// assert!(!game.is_over());
    ///
    /// assert!(game.make_guess("slate").unwrap().is_perfect());
    /// assert!(game.has_won());
    /// ```
    pub fn new(dictionary: Dictionary, picker: &mut dyn TargetPicker) -> Option<Self> {
        let index = picker.pick(dictionary.words())?;
        let target = dictionary.words().get(index)?.clone();
        info!("new game over {} words", dictionary.len());

        Some(Self {
            dictionary,
            target,
            turn: 0,
            won: false,
            used_words: FxHashSet::default(),
        })
    }

    /// Play a guess
    ///
    /// Input is trimmed and lowercased. On acceptance the turn counter
    /// advances and the feedback against the target is returned.
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` without consuming a turn if the guess is not a
    /// five-letter alphabetic dictionary word, was already played, or the game
    /// is over.
    pub fn make_guess(&mut self, guess: &str) -> Result<Feedback, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let word = Word::new(guess.trim())?;
        if !self.dictionary.contains(&word) {
            return Err(GuessError::UnknownWord(word.text().to_string()));
        }
        if self.used_words.contains(&word) {
            return Err(GuessError::AlreadyGuessed(word.text().to_string()));
        }

        self.turn += 1;
        if word == self.target {
            self.won = true;
        }

        let feedback = Feedback::compute(&word, &self.target);
        self.used_words.insert(word);
        Ok(feedback)
    }

    /// True once the target is found or every turn is used
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn >= MAX_TURNS || self.won
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.turn >= MAX_TURNS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn is_used(&self, word: &Word) -> bool {
        self.used_words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedPicker, RandomPicker};

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "stare", "roast", "toast", "beast",
    ];

    fn dict() -> Dictionary {
        WORDS.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn game_with_target(target: &str) -> GameState {
        GameState::new(dict(), &mut FixedPicker::new(target)).unwrap()
    }

    #[test]
    fn new_game_starts_in_progress() {
        let game = game_with_target("beast");
        assert_eq!(game.turn(), 0);
        assert!(!game.has_won());
        assert!(!game.is_over());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.target().text(), "beast");
    }

    #[test]
    fn random_target_comes_from_dictionary() {
        let game = GameState::new(dict(), &mut RandomPicker::seeded(42)).unwrap();
        assert!(WORDS.contains(&game.target().text()));
    }

    #[test]
    fn empty_dictionary_has_no_game() {
        assert!(GameState::new(Dictionary::default(), &mut RandomPicker::seeded(1)).is_none());
    }

    #[test]
    fn target_outside_dictionary_has_no_game() {
        assert!(GameState::new(dict(), &mut FixedPicker::new("zebra")).is_none());
    }

    #[test]
    fn accepted_guess_returns_feedback() {
        let mut game = game_with_target("slate");
        let feedback = game.make_guess("crane").unwrap();

        assert_eq!(feedback.to_string(), "bbgbg");
        assert_eq!(game.turn(), 1);
        assert!(game.is_used(&Word::new("crane").unwrap()));
    }

    #[test]
    fn guess_is_normalized() {
        let mut game = game_with_target("slate");
        assert!(game.make_guess("  CRANE ").is_ok());
    }

    #[test]
    fn invalid_guesses_are_rejected_without_a_turn() {
        let mut game = game_with_target("slate");

        assert_eq!(game.make_guess("cran"), Err(GuessError::InvalidLength));
        assert_eq!(game.make_guess("cranes"), Err(GuessError::InvalidLength));
        assert_eq!(game.make_guess("cr4ne"), Err(GuessError::NotAlphabetic));
        assert_eq!(
            game.make_guess("zebra"),
            Err(GuessError::UnknownWord("zebra".to_string()))
        );

        game.make_guess("crane").unwrap();
        assert_eq!(
            game.make_guess("crane"),
            Err(GuessError::AlreadyGuessed("crane".to_string()))
        );

        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn six_misses_lose() {
        let mut game = game_with_target("beast");

        for guess in ["crane", "slate", "irate", "crate", "grate", "trace"] {
            assert!(!game.is_over());
            // A rejected guess between turns changes nothing
            assert!(game.make_guess("qqqqq").is_err());
            game.make_guess(guess).unwrap();
        }

        assert_eq!(game.turn(), MAX_TURNS);
        assert!(game.is_over());
        assert!(!game.has_won());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.make_guess("roast"), Err(GuessError::GameOver));
    }

    #[test]
    fn win_ends_game_immediately() {
        let mut game = game_with_target("roast");

        game.make_guess("crane").unwrap();
        assert!(game.make_guess("roast").unwrap().is_perfect());

        assert_eq!(game.turn(), 2);
        assert!(game.is_over());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.make_guess("toast"), Err(GuessError::GameOver));
    }

    #[test]
    fn win_on_last_turn() {
        let mut game = game_with_target("beast");
        for guess in ["crane", "slate", "irate", "crate", "grate", "beast"] {
            game.make_guess(guess).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.turn(), MAX_TURNS);
    }
}
