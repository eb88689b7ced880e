//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Word, WordError};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load a newline-delimited word list from a file
///
/// Blank lines are skipped and repeated words are kept once, at their first
/// position.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_lookahead::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    parse_word_list(&content).with_context(|| format!("Invalid word list {}", path.display()))
}

/// Parse newline-delimited words
///
/// # Errors
///
/// Returns an error naming the first line that is not a valid word.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed)
            .with_context(|| format!("line {}: '{trimmed}'", number + 1))?;
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Errors
///
/// Returns the first `WordError` encountered.
///
/// # Examples
/// ```
/// use wordle_lookahead::wordlists::loader::words_from_slice;
/// use wordle_lookahead::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordError> {
    slice.iter().map(|&s| Word::new(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_rejects_invalid() {
        assert_eq!(
            words_from_slice(&["crane", "toolong", "slate"]),
            Err(WordError::InvalidLength(7))
        );
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).unwrap().is_empty());
    }

    #[test]
    fn parse_skips_blank_lines_and_duplicates() {
        let words = parse_word_list("crane\n\n  Slate \ncrane\nirate\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_reports_offending_line() {
        let err = parse_word_list("crane\nsl4te\n").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 2"), "{message}");
        assert!(message.contains("invalid characters"), "{message}");
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join("wordle_lookahead_loader_test.txt");
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);

        fs::remove_file(&path).unwrap();
    }
}
