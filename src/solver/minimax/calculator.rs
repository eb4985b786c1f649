//! Minimax worst-case calculation for Wordle feedback
//!
//! Given a probe and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Feedback, Word};

/// Calculate the maximum remaining candidates for a probe
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each feedback vector that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates);
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[Word]) -> usize {
    partition_sizes(guess, candidates)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Count candidates per feedback vector, indexed by [`Feedback::code`]
#[must_use]
pub fn partition_sizes(guess: &Word, candidates: &[Word]) -> [usize; Feedback::COUNT] {
    let mut counts = [0usize; Feedback::COUNT];

    for candidate in candidates {
        let feedback = Feedback::compute(guess, candidate);
        counts[usize::from(feedback.code())] += 1;
    }

    counts
}
