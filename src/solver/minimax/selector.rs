//! Minimax-based guess selection strategy
//!
//! Selects the probe that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// Select best probe by minimizing worst-case remaining candidates
///
/// Returns the probe with the lowest maximum remaining candidates and that
/// value, or `None` if the probe pool is empty. Among equal probes the first
/// one in `probes` order wins, however rayon schedules the work.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::minimax::select_best_guess;
///
/// let probes = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let probe_refs: Vec<&Word> = probes.iter().collect();
///
/// let (best, max_remaining) = select_best_guess(&probe_refs, &candidates).unwrap();
/// assert_eq!(best.text(), "crane");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    probes: &[&'a Word],
    candidates: &[Word],
) -> Option<(&'a Word, usize)> {
    probes
        .par_iter()
        .map(|&probe| (probe, calculate_max_remaining(probe, candidates)))
        .min_by_key(|(_, max)| *max)
}
