//! Word analysis command
//!
//! Shows how a single guess splits the full answer list.

use crate::core::{FeedbackMatrix, Word};
use crate::solver::heuristic::estimate;
use crate::solver::partition;

/// Result of analyzing a word
#[derive(Debug)]
pub struct AnalysisResult {
    pub word: String,
    pub estimate: f64,
    pub groups: usize,
    pub largest_group: usize,
    pub total_candidates: usize,
    pub possible_answer: bool,
}

/// Analyze a guess against every answer word
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the guess vocabulary
pub fn analyze_word(matrix: &FeedbackMatrix, word: &str) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let guess = matrix.query_index(&word_obj).map_err(|e| e.to_string())?;

    let candidates = matrix.all_answers();
    let groups = partition(matrix, guess, &candidates);

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        estimate: estimate(matrix, &candidates, guess),
        groups: groups.len(),
        largest_group: groups.iter().map(Vec::len).max().unwrap_or(0),
        total_candidates: candidates.len(),
        possible_answer: matrix.answer_index(&word_obj).is_ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn matrix() -> FeedbackMatrix {
        let words = words_from_slice(&WORDS[..100]).unwrap();
        FeedbackMatrix::build(&words, &words)
    }

    #[test]
    fn analyze_valid_word() {
        let matrix = matrix();
        let result = analyze_word(&matrix, WORDS[0]).unwrap();

        assert_eq!(result.word, WORDS[0]);
        assert!(result.possible_answer);
        assert_eq!(result.total_candidates, 100);
        assert!(result.groups >= 1);
        assert!(result.largest_group <= 99);
        assert!(result.estimate >= 1.0);
    }

    #[test]
    fn analyze_normalizes_case() {
        let matrix = matrix();
        let upper = WORDS[3].to_uppercase();
        let result = analyze_word(&matrix, &upper).unwrap();
        assert_eq!(result.word, WORDS[3]);
    }

    #[test]
    fn analyze_invalid_word() {
        let matrix = matrix();
        assert!(analyze_word(&matrix, "toolong").is_err());
    }

    #[test]
    fn analyze_unknown_word() {
        let matrix = matrix();
        let err = analyze_word(&matrix, "qqqqq").unwrap_err();
        assert!(err.contains("qqqqq"));
    }

    #[test]
    fn estimate_is_bounded() {
        let matrix = matrix();
        let result = analyze_word(&matrix, WORDS[10]).unwrap();

        // Never worse than leaving the other 99 words in one group
        let no_information = 1.0 + 0.99 * (0.43 * 99f64.ln() + 1.0);
        assert!(result.estimate <= no_information + 1e-9);
    }
}
