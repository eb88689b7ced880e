//! Benchmark command
//!
//! Plays the solver against a set of answers and collects statistics.

use crate::core::{Pattern, Word};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Progress bar styled for benchmark runs
///
/// # Panics
///
/// Panics if the progress template is malformed.
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("static template is valid")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Pick `count` answer indices out of `total` at random, reproducibly
///
/// The sample is returned in ascending order. Asking for more than `total`
/// returns every index.
#[must_use]
pub fn sample_targets(total: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = index::sample(&mut rng, total, count.min(total)).into_vec();
    picked.sort_unstable();
    picked
}

/// Play one game per target answer index
///
/// The opening guess is the configured first guess, or the solver's choice
/// for the full answer list, computed once and reused for every game.
pub fn run_benchmark(
    solver: &Solver,
    targets: &[usize],
    progress: &ProgressBar,
) -> BenchmarkResult {
    let matrix = solver.matrix();
    let start = Instant::now();
    let all = matrix.all_answers();

    let opening = solver
        .first_guess()
        .map(|q| matrix.query_word(q))
        .or_else(|| solver.solve(&all).guess);

    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for &target in targets {
        let answer = matrix.answer_word(target);
        progress.set_message(answer.text().to_string());

        match play_game(solver, answer, opening) {
            Some(guesses) => {
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            None => failures.push(answer.text().to_string()),
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Number of guesses needed to hit `answer`, or `None` if it took too many
fn play_game(solver: &Solver, answer: &Word, opening: Option<&Word>) -> Option<usize> {
    let matrix = solver.matrix();
    let mut candidates = matrix.all_answers();

    for turn in 1..=MAX_GUESSES {
        let guess = match (turn, opening) {
            (1, Some(first)) => first,
            _ => solver
                .solve_free(&candidates)
                .guess
                .or_else(|| candidates.first().map(|&a| matrix.answer_word(a)))?,
        };

        let pattern = Pattern::calculate(guess, answer);
        if pattern.is_perfect() {
            return Some(turn);
        }
        candidates = matrix.filter_word(guess, &candidates, pattern);
    }

    None
}
