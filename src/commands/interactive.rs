//! Interactive solving session
//!
//! Suggests a guess each round, reads the feedback the game gave for it and
//! narrows the candidate list accordingly.

use crate::core::{Pattern, Word};
use crate::output::formatters::word_preview;
use crate::output::timing::Clock;
use crate::solver::{SearchTrace, Solver};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Rounds played before the session stops
pub const MAX_ROUNDS: usize = 6;

/// Candidates listed after each round
const PREVIEW_LIMIT: usize = 20;

/// One guess and the feedback it received
#[derive(Debug, Clone)]
pub struct Round {
    pub guess: Word,
    /// Expected total guesses for the game, as estimated when suggested
    pub estimate: f64,
    pub feedback: Pattern,
    pub remaining: usize,
}

/// How a session ended
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub rounds: Vec<Round>,
    pub solved: bool,
    pub remaining: Vec<Word>,
}

/// What the player typed in answer to a suggestion
enum Reply {
    Feedback(Pattern),
    Quit,
}

/// Run a session, reading feedback lines from `input` and writing prompts
/// to `output`
///
/// Round 0 plays the configured first guess, if any. Feedback is five digits
/// (0 absent, 1 present, 2 exact); `quit` or end of input stops early.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &Solver,
    mut input: R,
    mut output: W,
) -> Result<SessionSummary> {
    let matrix = solver.matrix();
    let clock = Clock::start();
    let mut candidates = matrix.all_answers();
    let mut rounds = Vec::new();
    let mut solved = false;

    for round in 0..MAX_ROUNDS {
        writeln!(
            output,
            "{}",
            clock.stamp(&format!("round {round}; candidates: {}", candidates.len()))
        )?;

        if candidates.is_empty() {
            writeln!(output, "No candidates remain; the feedback was inconsistent.")?;
            break;
        }

        let (guess, score) = match (round, solver.first_guess()) {
            (0, Some(first)) => (matrix.query_word(first), 0.0),
            _ => {
                let trace = solver.trace_free(&candidates);
                write_trace(&mut output, solver, &trace)?;
                let fallback = matrix.answer_word(candidates[0]);
                (trace.result.guess.unwrap_or(fallback), trace.result.score)
            }
        };

        writeln!(output, "est. moves: {:.3}", score + round as f64)?;
        writeln!(
            output,
            "{} ? (absent: 0, present: 1, exact: 2)",
            guess.text().to_uppercase()
        )?;
        output.flush()?;

        let feedback = match read_reply(&mut input, &mut output)? {
            Some(Reply::Feedback(pattern)) => pattern,
            Some(Reply::Quit) | None => break,
        };

        candidates = matrix.filter_word(guess, &candidates, feedback);
        let remaining: Vec<&str> = candidates
            .iter()
            .map(|&a| matrix.answer_word(a).text())
            .collect();
        writeln!(output, "{}", word_preview(&remaining, PREVIEW_LIMIT))?;

        rounds.push(Round {
            guess: guess.clone(),
            estimate: score + round as f64,
            feedback,
            remaining: candidates.len(),
        });

        if feedback.is_perfect() {
            solved = true;
            writeln!(output, "Solved in {} guesses!", round + 1)?;
            break;
        }
    }

    Ok(SessionSummary {
        rounds,
        solved,
        remaining: candidates
            .iter()
            .map(|&a| matrix.answer_word(a).clone())
            .collect(),
    })
}

/// List the pruned shortlist with estimates, then each searched score
fn write_trace<W: Write>(output: &mut W, solver: &Solver, trace: &SearchTrace<'_>) -> Result<()> {
    let matrix = solver.matrix();
    for entry in &trace.shortlist {
        writeln!(output, "  {} ~{:.4}", matrix.query_word(entry.guess), entry.score)?;
    }
    for entry in &trace.evaluated {
        writeln!(output, "  {} {:.4}", matrix.query_word(entry.guess), entry.score)?;
    }
    Ok(())
}

/// Read lines until one is valid feedback or a quit command
///
/// Returns `None` at end of input.
fn read_reply<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Reply>> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if matches!(line, "quit" | "q" | "exit") {
            return Ok(Some(Reply::Quit));
        }

        match line.parse::<Pattern>() {
            Ok(pattern) => return Ok(Some(Reply::Feedback(pattern))),
            Err(e) => {
                writeln!(output, "{e}")?;
                output.flush()?;
            }
        }
    }
}
