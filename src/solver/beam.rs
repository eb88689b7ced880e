//! Beam pruning of candidate guesses
//!
//! Keeps the guesses with the lowest heuristic estimate so each search node
//! only recurses into a bounded number of them.

use super::heuristic::{ScoredGuess, estimate};
use crate::core::FeedbackMatrix;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Score every guess in `shortlist` against `candidates`
///
/// Scores are computed in parallel and returned in shortlist order.
#[must_use]
pub fn rank(
    matrix: &FeedbackMatrix,
    candidates: &[usize],
    shortlist: &[usize],
) -> Vec<ScoredGuess> {
    shortlist
        .par_iter()
        .map(|&guess| ScoredGuess {
            guess,
            score: estimate(matrix, candidates, guess),
        })
        .collect()
}

/// Keep the `width` lowest-scoring entries, best first
///
/// Equal scores are ordered by their position in `scored`. A list that already
/// fits is returned untouched. Uses partial selection so only the survivors
/// are sorted.
///
/// # Examples
/// ```
/// use wordle_lookahead::solver::beam::keep_best;
/// use wordle_lookahead::solver::heuristic::ScoredGuess;
///
/// let scored: Vec<ScoredGuess> = [3.0, 1.0, 2.0, 1.0]
///     .iter()
///     .enumerate()
///     .map(|(guess, &score)| ScoredGuess { guess, score })
///     .collect();
///
/// let kept: Vec<usize> = keep_best(scored, 3).iter().map(|s| s.guess).collect();
/// assert_eq!(kept, vec![1, 3, 2]);
/// ```
#[must_use]
pub fn keep_best(scored: Vec<ScoredGuess>, width: usize) -> Vec<ScoredGuess> {
    if scored.len() <= width {
        return scored;
    }
    if width == 0 {
        return Vec::new();
    }

    let mut indexed: Vec<(usize, ScoredGuess)> = scored.into_iter().enumerate().collect();
    indexed.select_nth_unstable_by(width - 1, by_score_then_position);
    indexed.truncate(width);
    indexed.sort_unstable_by(by_score_then_position);

    indexed.into_iter().map(|(_, entry)| entry).collect()
}

fn by_score_then_position(a: &(usize, ScoredGuess), b: &(usize, ScoredGuess)) -> Ordering {
    a.1.score.total_cmp(&b.1.score).then(a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn scored(scores: &[f64]) -> Vec<ScoredGuess> {
        scores
            .iter()
            .enumerate()
            .map(|(guess, &score)| ScoredGuess { guess, score })
            .collect()
    }

    fn guesses(entries: &[ScoredGuess]) -> Vec<usize> {
        entries.iter().map(|s| s.guess).collect()
    }

    #[test]
    fn keeps_everything_when_within_width() {
        let entries = scored(&[2.0, 1.0, 3.0]);
        assert_eq!(keep_best(entries.clone(), 3), entries);
        assert_eq!(keep_best(entries.clone(), 10), entries);
    }

    #[test]
    fn keeps_lowest_scores_best_first() {
        let entries = scored(&[5.0, 1.5, 4.0, 0.5, 3.0, 2.0]);
        assert_eq!(guesses(&keep_best(entries, 3)), vec![3, 1, 5]);
    }

    #[test]
    fn ties_prefer_earlier_entries() {
        let entries = scored(&[2.0, 1.0, 2.0, 2.0, 1.0]);
        assert_eq!(guesses(&keep_best(entries, 3)), vec![1, 4, 0]);
    }

    #[test]
    fn zero_width_keeps_nothing() {
        assert!(keep_best(scored(&[1.0, 2.0]), 0).is_empty());
    }

    #[test]
    fn rank_preserves_shortlist_order() {
        let words: Vec<Word> = ["zzzzz", "crane", "slate", "plate", "grate"]
            .iter()
            .map(|&w| Word::new(w).unwrap())
            .collect();
        let matrix = FeedbackMatrix::build(&words, &words);
        let candidates = [1, 2, 3, 4];

        let ranked = rank(&matrix, &candidates, &[4, 0, 1]);
        assert_eq!(guesses(&ranked), vec![4, 0, 1]);
        for entry in ranked {
            let expected = estimate(&matrix, &candidates, entry.guess);
            assert!((entry.score - expected).abs() < 1e-12);
        }
    }
}
