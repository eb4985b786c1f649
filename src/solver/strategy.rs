//! Guess selection strategies
//!
//! Defines the Strategy trait and the two concrete rankers.

use super::CandidatePool;
use crate::core::Word;
use log::debug;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A strategy for recommending the next guess from a candidate pool
pub trait Strategy {
    /// Recommend the next guess
    ///
    /// Returns `None` when no word is consistent with the feedback seen so far.
    fn suggest<'p>(&self, pool: &'p CandidatePool) -> Option<&'p Word>;
}

/// Recommend the next guess for `pool` under `strategy`
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::{CandidatePool, StrategyType, suggest};
/// use wordle_solver::wordlists::Dictionary;
///
/// let dict: Dictionary = ["abcde", "fghij", "klmno", "pqrst", "uvwxy"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pool = CandidatePool::new(dict);
///
/// let guess = suggest(&pool, &StrategyType::Frequency).unwrap();
/// assert_eq!(guess.text(), "abcde");
/// ```
pub fn suggest<'p, S: Strategy + ?Sized>(
    pool: &'p CandidatePool,
    strategy: &S,
) -> Option<&'p Word> {
    let suggestion = strategy.suggest(pool);
    match suggestion {
        Some(word) => debug!("suggesting {word} with {} candidates left", pool.remaining()),
        None => debug!("no suggestion: candidate pool exhausted"),
    }
    suggestion
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Letter-frequency heuristic (default)
    #[default]
    Frequency,
    /// Minimax partition
    Minimax,
}

impl Strategy for StrategyType {
    fn suggest<'p>(&self, pool: &'p CandidatePool) -> Option<&'p Word> {
        match self {
            Self::Frequency => FrequencyStrategy.suggest(pool),
            Self::Minimax => MinimaxStrategy.suggest(pool),
        }
    }
}

/// Error for an unrecognized strategy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected 'frequency' or 'minimax')")]
pub struct StrategyParseError(String);

impl FromStr for StrategyType {
    type Err = StrategyParseError;

    /// Supported names: "frequency", "heuristic", "minimax"
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "frequency" | "heuristic" => Ok(Self::Frequency),
            "minimax" => Ok(Self::Minimax),
            _ => Err(StrategyParseError(name.to_string())),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Frequency => "frequency",
            Self::Minimax => "minimax",
        })
    }
}

/// Letter-frequency heuristic
///
/// Picks the possible word whose letters are most common among the possible
/// words, with a one-point penalty for repeated letters.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn suggest<'p>(&self, pool: &'p CandidatePool) -> Option<&'p Word> {
        super::frequency::select_best_guess(pool.possible_words()).map(|(best, _)| best)
    }
}

/// Pure minimax strategy
///
/// Probes with any unused dictionary word, choosing the one whose largest
/// feedback partition of the possible words is smallest.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn suggest<'p>(&self, pool: &'p CandidatePool) -> Option<&'p Word> {
        let candidates = pool.possible_words();

        // Guessing a candidate directly is as good as any split
        if candidates.len() <= 2 {
            return candidates.first();
        }

        let probes: Vec<&Word> = pool
            .all_words()
            .iter()
            .filter(|word| !pool.is_used(word))
            .collect();

        super::minimax::select_best_guess(&probes, candidates)
            .map(|(best, _)| best)
            .or_else(|| candidates.first())
    }
}
