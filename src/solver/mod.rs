//! Guess selection by lookahead search
//!
//! Partitioning, the ranking heuristic, beam pruning and the recursive
//! expectation search built on them.

pub mod beam;
mod engine;
pub mod heuristic;
mod partition;

pub use engine::{ConfigError, SearchConfig, SearchResult, SearchTrace, Solver, SolverError};
pub use heuristic::ScoredGuess;
pub use partition::{partition, partition_words};
