//! Interactive play loop
//!
//! Five modes: classic play, play with solver tips, and manual solving where
//! the user reports the colors from another game.

use crate::core::{Feedback, Word};
use crate::game::{GameState, MAX_TURNS, TargetPicker};
use crate::output::{print_feedback, print_game_result};
use crate::solver::{CandidatePool, StrategyType, suggest};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// How a play session is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// No hints, just play (`c`)
    Classic,
    /// Play with suggestions from the given strategy (`th`, `tm`)
    Tips(StrategyType),
    /// The solver guesses, the user enters b/y/g colors (`mh`, `mm`)
    Manual(StrategyType),
}

impl PlayMode {
    #[must_use]
    pub const fn is_manual(self) -> bool {
        matches!(self, Self::Manual(_))
    }

    /// Strategy used for suggestions; classic mode still needs one to detect
    /// an exhausted pool
    #[must_use]
    pub fn strategy(self) -> StrategyType {
        match self {
            Self::Classic => StrategyType::default(),
            Self::Tips(strategy) | Self::Manual(strategy) => strategy,
        }
    }

    const fn shows_tips(self) -> bool {
        !matches!(self, Self::Classic)
    }
}

impl FromStr for PlayMode {
    type Err = String;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Self::Classic),
            "th" => Ok(Self::Tips(StrategyType::Frequency)),
            "tm" => Ok(Self::Tips(StrategyType::Minimax)),
            "mh" => Ok(Self::Manual(StrategyType::Frequency)),
            "mm" => Ok(Self::Manual(StrategyType::Minimax)),
            other => Err(format!(
                "unknown mode '{other}' (expected c, th, tm, mh or mm)"
            )),
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Classic => "c",
            Self::Tips(StrategyType::Frequency) => "th",
            Self::Tips(StrategyType::Minimax) => "tm",
            Self::Manual(StrategyType::Frequency) => "mh",
            Self::Manual(StrategyType::Minimax) => "mm",
        })
    }
}

/// How a play session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { turns: usize },
    Lost { turns: usize },
    /// Only one candidate was left, so the solver named the answer
    Deduced(Word),
    /// No word fits the feedback given so far
    NoSuggestion,
    /// Input ran out before the game finished
    Quit,
}

/// Run one session in `mode`, reading user input from `input`
///
/// # Errors
///
/// Returns an error if the dictionary is empty (no target can be chosen) or
/// if reading input or writing prompts fails.
pub fn run_play<R: BufRead>(
    dictionary: &Dictionary,
    mode: PlayMode,
    picker: &mut dyn TargetPicker,
    input: &mut R,
) -> Result<PlayOutcome> {
    let mut game = GameState::new(dictionary.clone(), picker)
        .context("the word list is empty, so no target word can be chosen")?;
    let mut pool = CandidatePool::new(dictionary.clone());
    let strategy = mode.strategy();

    // Manual mode plays someone else's game, so it keeps its own score
    let mut manual_turns = 0;
    let mut manual_won = false;

    loop {
        let over = if mode.is_manual() {
            manual_won || manual_turns >= MAX_TURNS
        } else {
            game.is_over()
        };
        if over {
            break;
        }

        let Some(suggestion) = suggest(&pool, &strategy).cloned() else {
            println!("Cannot provide suggestion.");
            return Ok(PlayOutcome::NoSuggestion);
        };

        if mode.shows_tips() {
            if pool.remaining() > 1 {
                println!("Suggested word : {suggestion}");
                println!("Possible words remaining : {}", pool.remaining());
            } else {
                println!("The word is : {suggestion}");
                return Ok(PlayOutcome::Deduced(suggestion));
            }
        }

        let accepted = if mode.is_manual() {
            let Some(line) = prompt(input, "Result (b/y/g)")? else {
                return Ok(PlayOutcome::Quit);
            };
            match line.parse::<Feedback>() {
                Ok(feedback) => {
                    manual_turns += 1;
                    manual_won = feedback.is_perfect();
                    Some((suggestion, feedback))
                }
                Err(e) => {
                    println!("{e}");
                    None
                }
            }
        } else {
            let label = format!("Enter guess here ({}/{MAX_TURNS})", game.turn() + 1);
            let Some(line) = prompt(input, &label)? else {
                return Ok(PlayOutcome::Quit);
            };
            match game.make_guess(&line) {
                Ok(feedback) => Some((Word::new(line.trim())?, feedback)),
                Err(e) => {
                    println!("{e}");
                    None
                }
            }
        };

        if let Some((guess, feedback)) = accepted {
            print_feedback(&guess, feedback);
            pool.eliminate(&guess, feedback);
        }
    }

    let (won, turns, answer) = if mode.is_manual() {
        (manual_won, manual_turns, None)
    } else {
        (game.has_won(), game.turn(), Some(game.target()))
    };
    print_game_result(won, turns, answer);

    Ok(if won {
        PlayOutcome::Won { turns }
    } else {
        PlayOutcome::Lost { turns }
    })
}

/// Print a prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label} : ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedPicker;
    use std::io::Cursor;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn small_dict() -> Dictionary {
        dict(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "stare", "roast", "toast",
            "beast",
        ])
    }

    fn play(mode: PlayMode, target: &str, input: &str) -> PlayOutcome {
        run_play(
            &small_dict(),
            mode,
            &mut FixedPicker::new(target),
            &mut Cursor::new(input.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn mode_codes() {
        for code in ["c", "th", "tm", "mh", "mm"] {
            let mode: PlayMode = code.parse().unwrap();
            assert_eq!(mode.to_string(), code);
        }
        assert_eq!("TM".parse(), Ok(PlayMode::Tips(StrategyType::Minimax)));
        assert!("x".parse::<PlayMode>().is_err());
        assert!(PlayMode::Manual(StrategyType::Frequency).is_manual());
        assert!(!PlayMode::Classic.is_manual());
    }

    #[test]
    fn classic_win() {
        let outcome = play(PlayMode::Classic, "slate", "crane\nSLATE\n");
        assert_eq!(outcome, PlayOutcome::Won { turns: 2 });
    }

    #[test]
    fn classic_rejects_invalid_input_without_using_a_turn() {
        let outcome = play(
            PlayMode::Classic,
            "slate",
            "cran\nzebra\ncrane\ncrane\nslate\n",
        );
        assert_eq!(outcome, PlayOutcome::Won { turns: 2 });
    }

    #[test]
    fn classic_loss_after_six_misses() {
        let outcome = play(
            PlayMode::Classic,
            "beast",
            "crane\nslate\nirate\ncrate\ngrate\ntrace\n",
        );
        assert_eq!(outcome, PlayOutcome::Lost { turns: 6 });
    }

    #[test]
    fn end_of_input_quits() {
        assert_eq!(play(PlayMode::Classic, "slate", "crane\n"), PlayOutcome::Quit);
    }

    #[test]
    fn manual_mode_takes_colors() {
        // An unreadable color string is re-prompted without using a turn
        let outcome = play(PlayMode::Manual(StrategyType::Frequency), "slate", "bad\nggggg\n");
        assert_eq!(outcome, PlayOutcome::Won { turns: 1 });
    }

    #[test]
    fn manual_inconsistent_colors_stop_suggestions() {
        // No word in the dictionary shares zero letters with the first probe
        let outcome = play(
            PlayMode::Manual(StrategyType::Minimax),
            "slate",
            "bbbbb\n",
        );
        assert_eq!(outcome, PlayOutcome::NoSuggestion);
    }

    #[test]
    fn tips_announce_last_candidate() {
        // crane -> bbgbb leaves only toast
        let outcome = play(PlayMode::Tips(StrategyType::Frequency), "toast", "crane\n");
        assert_eq!(outcome, PlayOutcome::Deduced(Word::new("toast").unwrap()));
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let result = run_play(
            &Dictionary::default(),
            PlayMode::Classic,
            &mut FixedPicker::new("crane"),
            &mut Cursor::new(String::new()),
        );
        assert!(result.is_err());
    }
}
