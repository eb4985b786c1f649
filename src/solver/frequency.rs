//! Letter-frequency heuristic
//!
//! Scores each possible word by how common its letters are among the words
//! that are still possible.

use crate::core::Word;

/// Occurrences of each letter across `words`, indexed by `letter - b'a'`
///
/// Positions are collapsed: a word with two E's contributes two.
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> [usize; 26] {
    let mut freq = [0usize; 26];
    for word in words {
        for &ch in word.chars() {
            freq[usize::from(ch - b'a')] += 1;
        }
    }
    freq
}

/// Sum of the word's letter frequencies, minus one if any letter repeats
#[must_use]
pub fn score_word(word: &Word, freq: &[usize; 26]) -> i64 {
    let total: usize = word
        .chars()
        .iter()
        .map(|&ch| freq[usize::from(ch - b'a')])
        .sum();
    let penalty = i64::from(word.has_repeated_letter());
    total as i64 - penalty
}

/// Select the highest-scoring candidate
///
/// Ties go to the lexicographically smallest word. Returns `None` if there
/// are no candidates.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::frequency::select_best_guess;
///
/// let candidates: Vec<Word> = ["crane", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let (best, score) = select_best_guess(&candidates).unwrap();
/// assert_eq!(best.text(), "crate");
/// assert_eq!(score, 13);
/// ```
#[must_use]
pub fn select_best_guess(candidates: &[Word]) -> Option<(&Word, i64)> {
    let freq = letter_frequencies(candidates);

    candidates
        .iter()
        .map(|word| (word, score_word(word, &freq)))
        .max_by(|(a, score_a), (b, score_b)| score_a.cmp(score_b).then_with(|| b.cmp(a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn frequencies_count_every_occurrence() {
        let freq = letter_frequencies(&words(&["geese", "crane"]));
        assert_eq!(freq[usize::from(b'e' - b'a')], 4);
        assert_eq!(freq[usize::from(b'g' - b'a')], 1);
        assert_eq!(freq[usize::from(b'z' - b'a')], 0);
        assert_eq!(freq.iter().sum::<usize>(), 10);
    }

    #[test]
    fn repeated_letters_cost_one_point() {
        let freq = letter_frequencies(&words(&["geese", "crane"]));
        // g1 + e4 + e4 + s1 + e4, less the penalty
        assert_eq!(score_word(&Word::new("geese").unwrap(), &freq), 13);
        // c1 + r1 + a1 + n1 + e4
        assert_eq!(score_word(&Word::new("crane").unwrap(), &freq), 8);
    }

    #[test]
    fn disjoint_letters_tie_on_lexicographic_order() {
        let candidates = words(&["uvwxy", "klmno", "abcde", "pqrst", "fghij"]);
        let freq = letter_frequencies(&candidates);

        for word in &candidates {
            assert_eq!(score_word(word, &freq), 5);
        }

        let (best, score) = select_best_guess(&candidates).unwrap();
        assert_eq!(best.text(), "abcde");
        assert_eq!(score, 5);
    }

    #[test]
    fn penalty_applies_once_per_word() {
        let uniform = [1usize; 26];
        assert_eq!(score_word(&Word::new("abcde").unwrap(), &uniform), 5);
        assert_eq!(score_word(&Word::new("aabcd").unwrap(), &uniform), 4);
        assert_eq!(score_word(&Word::new("aaaaa").unwrap(), &uniform), 4);
    }

    #[test]
    fn common_letters_win() {
        let candidates = words(&["slate", "crate", "grate", "zymic"]);
        let (best, _) = select_best_guess(&candidates).unwrap();
        assert_ne!(best.text(), "zymic");
    }

    #[test]
    fn deterministic_across_calls() {
        let candidates = words(&["crane", "slate", "irate", "trace", "stare"]);
        let first = select_best_guess(&candidates).map(|(w, s)| (w.clone(), s));
        let second = select_best_guess(&candidates).map(|(w, s)| (w.clone(), s));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_candidates() {
        assert!(select_best_guess(&[]).is_none());
    }
}
