//! Wordle Solver - CLI
//!
//! Play Wordle with or without solver tips, let the solver read your colors,
//! or measure how the two ranking strategies perform.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_solver::{
    commands::{PlayMode, run_benchmark, run_play, solve_word},
    core::Word,
    game::{RandomPicker, TargetPicker},
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
    wordlists::{
        Dictionary,
        loader::{embedded_dictionary, load_dictionary},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Wordle with a frequency-heuristic and minimax solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default) or minimax
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: StrategyType,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for choosing the target word
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Mode: c, th, tm, mh or mm; asked interactively when omitted
        #[arg(short, long)]
        mode: Option<PlayMode>,
    },

    /// Let the solver play against a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play one game per word and report the guess distribution
    Benchmark {
        /// Number of words to test (default: the whole word list)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn load_wordlist(path: Option<&PathBuf>) -> Dictionary {
    path.map_or_else(embedded_dictionary, load_dictionary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_wordlist(cli.wordlist.as_ref());

    match cli.command.unwrap_or(Commands::Play { mode: None }) {
        Commands::Play { mode } => run_play_command(&dictionary, mode, cli.seed),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&dictionary, &word, &cli.strategy)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => run_benchmark_command(&dictionary, count, cli.strategy),
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    mode: Option<PlayMode>,
    seed: Option<u64>,
) -> Result<()> {
    print_banner();

    let mut input = io::stdin().lock();
    let mode = match mode {
        Some(mode) => mode,
        None => {
            print_mode_options();
            read_mode(&mut input)?
        }
    };

    let mut picker: Box<dyn TargetPicker> = match seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::from_entropy()),
    };

    run_play(dictionary, mode, picker.as_mut(), &mut input)?;
    Ok(())
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    count: Option<usize>,
    strategy: StrategyType,
) -> Result<()> {
    let targets: Vec<Word> = dictionary
        .words()
        .iter()
        .take(count.unwrap_or(dictionary.len()))
        .cloned()
        .collect();

    println!(
        "Running {strategy} benchmark on {} words...",
        targets.len()
    );
    let result = run_benchmark(dictionary, &targets, strategy, true)?;
    print_benchmark_result(&result);
    Ok(())
}

/// Keep asking until a valid mode code is entered
fn read_mode(input: &mut impl io::BufRead) -> Result<PlayMode> {
    use std::io::Write;

    loop {
        print!("\nWhich mode? : ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            bail!("no mode chosen");
        }
        if let Ok(mode) = line.parse() {
            return Ok(mode);
        }
    }
}

fn print_banner() {
    use colored::Colorize;

    println!("\n{}", "═".repeat(62).bright_blue());
    println!("{}", "                       W O R D L E".bright_green().bold());
    println!("{}", "═".repeat(62).bright_blue());
}

fn print_mode_options() {
    use colored::Colorize;

    println!("\n{}", "Wordle Game Modes".bold());
    for (code, name, description) in [
        ("c", "Classic", "No hints, just play"),
        ("th", "Tips Heuristic", "Uses frequency-based word scoring"),
        ("tm", "Tips Minimax", "Uses minimax scoring to reduce possibilities"),
        (
            "mh",
            "Manual Heuristic",
            "You enter the colors; program guesses using Heuristic",
        ),
        (
            "mm",
            "Manual Minimax",
            "You enter the colors; program guesses using Minimax",
        ),
    ] {
        println!(
            "  {:<3} {:<17} {}",
            code.cyan(),
            name.bold().magenta(),
            description.green()
        );
    }
}
