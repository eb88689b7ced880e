//! Display functions for command results

use super::formatters::{create_progress_bar, pattern_label};
use crate::commands::{AnalysisResult, BenchmarkResult, SessionSummary, SolveReport};
use crate::core::FeedbackMatrix;
use crate::solver::ScoredGuess;
use colored::Colorize;

/// Print the best opening guess, and with `verbose` the shortlist behind it
pub fn print_solve_report(report: &SolveReport, matrix: &FeedbackMatrix, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} answers",
        "LOOKAHEAD SEARCH:".bright_cyan().bold(),
        report.total_candidates
    );
    println!("{}", "═".repeat(60).cyan());

    if verbose && !report.trace.shortlist.is_empty() {
        println!("\n🔎 {}", "Shortlist (heuristic):".bright_cyan().bold());
        print_scored(&report.trace.shortlist, matrix);

        println!("\n🧮 {}", "Searched:".bright_cyan().bold());
        print_scored(&report.trace.evaluated, matrix);
    }

    let result = &report.trace.result;
    match result.guess {
        Some(word) => println!(
            "\n🎯 Best guess:      {}",
            word.text().to_uppercase().bright_yellow().bold()
        ),
        None => println!("\n🎯 Best guess:      {}", "(none)".bright_black()),
    }
    println!(
        "   Expected moves:  {}",
        format!("{:.4}", result.score).bright_yellow()
    );
    println!("   Time taken:      {:.2}s", report.elapsed.as_secs_f64());
}

fn print_scored(entries: &[ScoredGuess], matrix: &FeedbackMatrix) {
    for entry in entries {
        println!(
            "   {}  {:.4}",
            matrix.query_word(entry.guess).text().to_uppercase(),
            entry.score
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Estimate:       {}",
        format!("{:.4} guesses", result.estimate).bright_yellow()
    );
    println!("   Feedback groups: {}", result.groups);
    println!("   Largest group:   {}", result.largest_group);
    println!(
        "   Possible answer: {}",
        if result.possible_answer {
            "yes".green()
        } else {
            "no".red()
        }
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not solved in six:".red().bold());
        println!("   {}", result.failures.join(" "));
    }
}

/// Print the guesses of a finished interactive session
pub fn print_session_summary(summary: &SessionSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    for (i, round) in summary.rounds.iter().enumerate() {
        println!(
            "   {}. {} {}",
            (i + 1).to_string().bright_black(),
            round.guess.text().to_uppercase().bright_white().bold(),
            pattern_label(round.feedback)
        );
    }

    if summary.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", summary.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("{} candidates remain", summary.remaining.len()).yellow()
        );
    }
}
