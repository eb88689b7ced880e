//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and timing messages.

pub mod display;
pub mod formatters;
pub mod timing;

pub use display::{
    print_analysis_result, print_benchmark_result, print_session_summary, print_solve_report,
};
pub use timing::Clock;
