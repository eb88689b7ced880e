//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, progress_bar, run_benchmark, sample_targets};
pub use interactive::{MAX_ROUNDS, Round, SessionSummary, run_interactive};
pub use solve::{SolveReport, solve_opening};
