//! Cheap estimate of expected guesses
//!
//! Scores a guess without recursing: each feedback group of size `n` is
//! assumed to need about `0.43 ln(n) + 1` more guesses. Only used to rank
//! guesses for the beam and as the fallback once the depth budget is spent.

use super::partition::partition;
use crate::core::FeedbackMatrix;

/// Weight of `ln(n)` in the per-group estimate
pub const BUCKET_LOG_WEIGHT: f64 = 0.43;

/// A guess paired with a score, lower is better
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    /// Query index of the guess
    pub guess: usize,
    pub score: f64,
}

/// Estimated guesses needed to finish `n` candidates
///
/// # Examples
/// ```
/// use wordle_lookahead::solver::heuristic::bucket_estimate;
///
/// assert_eq!(bucket_estimate(1), 1.0);
/// assert!((bucket_estimate(100) - 2.980_223).abs() < 1e-6);
/// ```
#[must_use]
pub fn bucket_estimate(n: usize) -> f64 {
    BUCKET_LOG_WEIGHT * (n as f64).ln() + 1.0
}

/// Estimated guesses to finish `candidates` after playing `guess`, counting
/// the guess itself
///
/// Returns 1.0 for an empty candidate set.
#[must_use]
pub fn estimate(matrix: &FeedbackMatrix, candidates: &[usize], guess: usize) -> f64 {
    if candidates.is_empty() {
        return 1.0;
    }

    let total = candidates.len() as f64;
    1.0 + partition(matrix, guess, candidates)
        .iter()
        .map(|group| group.len() as f64 / total * bucket_estimate(group.len()))
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn matrix(list: &[&str]) -> FeedbackMatrix {
        let words: Vec<Word> = list.iter().map(|&w| Word::new(w).unwrap()).collect();
        FeedbackMatrix::build(&words, &words)
    }

    #[test]
    fn bucket_estimate_values() {
        assert!((bucket_estimate(1) - 1.0).abs() < 1e-12);
        assert!((bucket_estimate(2) - (0.43 * 2f64.ln() + 1.0)).abs() < 1e-12);
        assert!(bucket_estimate(10) < bucket_estimate(11));
    }

    #[test]
    fn estimate_guess_that_separates_everything() {
        // Each remaining candidate lands in its own group
        let m = matrix(&["crane", "crate", "slate"]);
        let score = estimate(&m, &[0, 1, 2], 0);
        assert!((score - (1.0 + 2.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn estimate_guess_with_no_information() {
        // ZZZZZ shares no letters with any candidate
        let m = matrix(&["zzzzz", "crane", "slate", "plate", "grate"]);
        let candidates = [1, 2, 3, 4];
        let score = estimate(&m, &candidates, 0);
        assert!((score - (1.0 + bucket_estimate(4))).abs() < 1e-12);
    }

    #[test]
    fn estimate_ranks_informative_guess_lower() {
        let m = matrix(&["zzzzz", "crane", "slate", "plate", "grate"]);
        let candidates = [1, 2, 3, 4];
        assert!(estimate(&m, &candidates, 1) < estimate(&m, &candidates, 0));
    }

    #[test]
    fn estimate_empty_candidates() {
        let m = matrix(&["crane"]);
        assert!((estimate(&m, &[], 0) - 1.0).abs() < 1e-12);
    }
}
