//! Batch solve command
//!
//! Finds the best opening guess for the full answer list.

use crate::solver::{SearchTrace, Solver};
use std::time::{Duration, Instant};

/// Outcome of a batch solve
pub struct SolveReport<'m> {
    pub trace: SearchTrace<'m>,
    pub total_candidates: usize,
    pub elapsed: Duration,
}

/// Search for the best opening guess over every answer word
#[must_use]
pub fn solve_opening<'m>(solver: &Solver<'m>) -> SolveReport<'m> {
    let start = Instant::now();
    let candidates = solver.matrix().all_answers();
    let trace = solver.trace(&candidates);

    SolveReport {
        trace,
        total_candidates: candidates.len(),
        elapsed: start.elapsed(),
    }
}
