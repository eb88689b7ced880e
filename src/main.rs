//! Wordle Lookahead Solver - CLI
//!
//! Finds the guess that minimises expected guesses using depth-bounded,
//! beam-pruned lookahead.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use wordle_lookahead::{
    commands::{
        analyze_word, progress_bar, run_benchmark, run_interactive, sample_targets, solve_opening,
    },
    core::{FeedbackMatrix, Word},
    output::{
        Clock, print_analysis_result, print_benchmark_result, print_session_summary,
        print_solve_report,
    },
    solver::{SearchConfig, Solver},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_lookahead",
    about = "Wordle solver minimising expected guesses with depth-bounded beam search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// Guess word list file (default: same as the answer list)
    #[arg(short = 'g', long, global = true)]
    guesses: Option<String>,

    #[command(flatten)]
    search: SearchArgs,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// Levels of lookahead before falling back to the estimate
    #[arg(short, long, global = true, default_value = "3")]
    depth: u32,

    /// Maximum guesses expanded at each search node
    #[arg(short, long, global = true, default_value = "20")]
    beam: usize,

    /// Only guess words that can still be the answer
    #[arg(short = 'x', long, global = true)]
    exhaustive: bool,

    /// Play this word first instead of searching for an opening
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best opening guess (default)
    Solve {
        /// Show the shortlist and per-guess scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive mode: enter the feedback the game gives each round
    Play,

    /// Show how a single guess splits the answer list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play the solver against answers from the list
    Benchmark {
        /// Number of answers to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for choosing a random subset of answers
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl SearchArgs {
    fn to_config(&self) -> Result<SearchConfig> {
        let first_guess = self
            .first_word
            .as_deref()
            .map(Word::new)
            .transpose()
            .context("Invalid first word")?;

        let config = SearchConfig {
            depth: self.depth,
            exhaustive: self.exhaustive,
            beam_width: self.beam,
            first_guess,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Load word lists based on the -w and -g flags
///
/// Returns (`guess_words`, `answer_words`)
fn load_wordlists(words: Option<&str>, guesses: Option<&str>) -> Result<(Vec<Word>, Vec<Word>)> {
    let answer_words = match words {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(WORDS).context("Embedded word list is invalid")?,
    };
    let guess_words = match guesses {
        Some(path) => load_from_file(path)?,
        None => answer_words.clone(),
    };
    Ok((guess_words, answer_words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.search.to_config()?;
    let clock = Clock::start();

    let (guess_words, answer_words) = load_wordlists(cli.words.as_deref(), cli.guesses.as_deref())?;
    clock.log(&format!(
        "loaded {} guesses, {} answers",
        guess_words.len(),
        answer_words.len()
    ));

    let matrix = FeedbackMatrix::build(&guess_words, &answer_words);
    clock.log("feedback matrix built");

    let solver = Solver::new(&matrix, config)?;

    match cli.command.unwrap_or(Commands::Solve { verbose: false }) {
        Commands::Solve { verbose } => {
            let report = solve_opening(&solver);
            print_solve_report(&report, &matrix, verbose);
        }
        Commands::Play => {
            let stdin = io::stdin();
            let summary = run_interactive(&solver, stdin.lock(), io::stdout())?;
            print_session_summary(&summary);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&matrix, &word).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count, seed } => {
            let total = matrix.answer_len();
            let count = count.unwrap_or(total);
            let targets = match seed {
                Some(seed) => sample_targets(total, count, seed),
                None => (0..count.min(total)).collect(),
            };

            println!("Running benchmark on {} answers...", targets.len());
            let pb = progress_bar(targets.len());
            let result = run_benchmark(&solver, &targets, &pb);
            print_benchmark_result(&result);
        }
    }

    clock.log("done");
    Ok(())
}
