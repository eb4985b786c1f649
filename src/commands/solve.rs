//! Word solving command
//!
//! Lets the solver play a whole game against a known target.

use crate::core::{Feedback, Word};
use crate::game::{FixedPicker, GameState};
use crate::solver::{CandidatePool, Strategy, suggest};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` with `strategy`, playing a real game against it
///
/// The game and the candidate pool are updated side by side from each
/// suggestion and the feedback it earns.
///
/// # Errors
///
/// Returns an error if `target` is not in the dictionary, or if the game
/// rejects a suggested guess.
///
/// # Examples
/// ```
/// use wordle_solver::commands::solve_word;
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::StrategyType;
/// use wordle_solver::wordlists::Dictionary;
///
/// let dict: Dictionary = ["crane", "slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let result = solve_word(&dict, "grate", &StrategyType::Minimax).unwrap();
/// assert!(result.success);
/// ```
pub fn solve_word<S: Strategy + ?Sized>(
    dictionary: &Dictionary,
    target: &str,
    strategy: &S,
) -> Result<SolveResult> {
    let mut game = GameState::new(dictionary.clone(), &mut FixedPicker::new(target))
        .with_context(|| format!("'{target}' is not in the word list"))?;
    let mut pool = CandidatePool::new(dictionary.clone());
    let mut steps = Vec::new();

    while !game.is_over() {
        let Some(guess) = suggest(&pool, strategy).cloned() else {
            break;
        };

        let candidates_before = pool.remaining();
        let feedback = game
            .make_guess(guess.text())
            .with_context(|| format!("suggested guess '{guess}' was rejected"))?;
        pool.eliminate(&guess, feedback);

        steps.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: pool.remaining(),
        });
    }

    Ok(SolveResult {
        success: game.has_won(),
        steps,
        target: game.target().clone(),
    })
}
