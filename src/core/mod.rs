//! Core domain types for Wordle
//!
//! Words, feedback patterns and the precomputed feedback table. Everything
//! here is immutable once built and safe to share across threads.

mod matrix;
mod pattern;
mod word;

pub use matrix::{FeedbackMatrix, UnknownWordError};
pub use pattern::Pattern;
pub use word::{WORD_LENGTH, Word, WordError};
