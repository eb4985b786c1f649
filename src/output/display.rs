//! Display functions for game and command results

use super::formatters::{create_progress_bar, feedback_row, result_message};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Feedback, Word};
use crate::game::MAX_TURNS;
use colored::Colorize;

/// Print a scored guess as a row of tiles
pub fn print_feedback(guess: &Word, feedback: Feedback) {
    println!("{}", feedback_row(guess, feedback));
}

/// Print the end-of-game summary
///
/// The answer is only shown on a loss, and only when it is known.
pub fn print_game_result(won: bool, turns: usize, answer: Option<&Word>) {
    let message = result_message(won, turns);
    if won {
        println!("{}", message.green().bold());
    } else {
        println!("{}", message.red().bold());
        if let Some(answer) = answer {
            println!("Answer: {}", answer.text().to_uppercase().bright_yellow());
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Failed:           {}",
        format!("{}", result.failed.len()).red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_TURNS {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.total_words == 0 {
            0.0
        } else {
            (count as f64 / result.total_words as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Unsolved:".bright_red().bold());
        for word in &result.failed {
            println!("   {}", word.text().to_uppercase());
        }
    }
}
