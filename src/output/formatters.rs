//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).bold().white();
    match mark {
        Mark::Correct => tile.on_green(),
        Mark::Present => tile.on_yellow(),
        Mark::Absent => tile.on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles separated by spaces
#[must_use]
pub fn feedback_row(guess: &Word, feedback: Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| letter_tile(letter, mark).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Headline for a finished game
#[must_use]
pub const fn result_message(won: bool, turns: usize) -> &'static str {
    match (won, turns) {
        (true, 0..=3) => "Wow!",
        (true, 6) => "Phew!",
        (true, _) => "Good Job!",
        (false, _) => "Better Luck Next Time!",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_messages() {
        assert_eq!(result_message(true, 1), "Wow!");
        assert_eq!(result_message(true, 3), "Wow!");
        assert_eq!(result_message(true, 4), "Good Job!");
        assert_eq!(result_message(true, 5), "Good Job!");
        assert_eq!(result_message(true, 6), "Phew!");
        assert_eq!(result_message(false, 6), "Better Luck Next Time!");
    }

    #[test]
    fn feedback_row_plain() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let row = feedback_row(&guess, "bbgyg".parse().unwrap());
        assert_eq!(row, " C   R   A   N   E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
