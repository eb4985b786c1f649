//! Benchmark command
//!
//! Plays one independent game per target word and aggregates the results.
//! Sessions share only the read-only dictionary, so they run in parallel.

use super::solve::solve_word;
use crate::core::Word;
use crate::solver::StrategyType;
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub strategy: StrategyType,
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub average_guesses: f64,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

/// Run the solver against each of `targets`
///
/// The average counts solved games only; failures are listed separately.
///
/// # Errors
///
/// Returns an error if a target is not in the dictionary or a game rejects a
/// suggested guess.
pub fn run_benchmark(
    dictionary: &Dictionary,
    targets: &[Word],
    strategy: StrategyType,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░"),
    );

    let results = targets
        .par_iter()
        .map(|target| {
            let result = solve_word(dictionary, target.text(), &strategy);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed = Vec::new();
    let mut total_guesses = 0;

    for result in &results {
        if result.success {
            total_guesses += result.steps.len();
            *distribution.entry(result.steps.len()).or_insert(0) += 1;
        } else {
            failed.push(result.target.clone());
        }
    }

    let solved = results.len() - failed.len();
    let duration = start.elapsed();
    info!(
        "benchmarked {} words with {strategy} in {:.2}s",
        results.len(),
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        strategy,
        total_words: results.len(),
        solved,
        failed,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        distribution,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn benchmark_covers_every_target() {
        let dictionary = dict(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "stare", "roast", "toast",
            "beast",
        ]);

        let result =
            run_benchmark(&dictionary, dictionary.words(), StrategyType::Minimax, false).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failed.is_empty());
        assert_eq!(result.distribution.values().sum::<usize>(), 10);
        assert!(result.average_guesses >= 1.0 && result.average_guesses <= 6.0);
    }

    #[test]
    fn benchmark_is_deterministic() {
        let dictionary = dict(&["abcde", "fghij", "klmno", "pqrst", "uvwxy"]);

        let first =
            run_benchmark(&dictionary, dictionary.words(), StrategyType::Frequency, false)
                .unwrap();
        let second =
            run_benchmark(&dictionary, dictionary.words(), StrategyType::Frequency, false)
                .unwrap();

        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.solved, 5);
    }

    #[test]
    fn empty_target_list() {
        let dictionary = dict(&["crane"]);
        let result = run_benchmark(&dictionary, &[], StrategyType::Frequency, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
