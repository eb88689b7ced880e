//! Wordle Lookahead Solver
//!
//! Picks the guess that minimises the expected number of guesses, searching a
//! bounded number of moves ahead with beam pruning.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_lookahead::core::{FeedbackMatrix, Word};
//! use wordle_lookahead::solver::{SearchConfig, Solver};
//!
//! let words: Vec<Word> = ["crane", "crate", "slate", "plate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let matrix = FeedbackMatrix::build(&words, &words);
//! let solver = Solver::new(&matrix, SearchConfig::default()).unwrap();
//!
//! let result = solver.solve(&matrix.all_answers());
//! println!("{:?} in {:.3} guesses", result.guess, result.score);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
