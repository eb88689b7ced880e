//! Splitting a candidate set by feedback
//!
//! Groups the candidates by the pattern a guess would produce against each of
//! them. The full-match group is left out: that outcome ends the game.

use crate::core::{FeedbackMatrix, Pattern, UnknownWordError, Word};
use rustc_hash::FxHashMap;

/// Group candidate answer indices by their pattern against `guess`
///
/// Groups appear in order of first occurrence and keep candidate order. No
/// group is empty, and candidates equal to the guess are dropped.
///
/// # Examples
/// ```
/// use wordle_lookahead::core::{FeedbackMatrix, Word};
/// use wordle_lookahead::solver::partition;
///
/// let words: Vec<Word> = ["crane", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let matrix = FeedbackMatrix::build(&words, &words);
///
/// // Guessing CRANE: CRATE and SLATE give different feedback, CRANE is solved
/// let groups = partition(&matrix, 0, &[0, 1, 2]);
/// assert_eq!(groups, vec![vec![1], vec![2]]);
/// ```
#[must_use]
pub fn partition(matrix: &FeedbackMatrix, guess: usize, candidates: &[usize]) -> Vec<Vec<usize>> {
    let mut slots: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for &candidate in candidates {
        let pattern = matrix.code(guess, candidate);
        if pattern.is_perfect() {
            continue;
        }

        let slot = *slots.entry(pattern).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(candidate);
    }

    groups
}

/// Word-level form of [`partition`]
///
/// # Errors
/// Returns `UnknownWordError` if the guess or any candidate is not in the
/// matrix.
pub fn partition_words<'m>(
    matrix: &'m FeedbackMatrix,
    guess: &Word,
    candidates: &[Word],
) -> Result<Vec<Vec<&'m Word>>, UnknownWordError> {
    let guess = matrix.query_index(guess)?;
    let candidates = matrix.answer_indices(candidates)?;

    Ok(partition(matrix, guess, &candidates)
        .into_iter()
        .map(|group| group.into_iter().map(|a| matrix.answer_word(a)).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    fn sample() -> FeedbackMatrix {
        let list = words(&[
            "crane", "crate", "grate", "irate", "slate", "plate", "robot", "floor", "speed",
            "abide",
        ]);
        FeedbackMatrix::build(&list, &list)
    }

    #[test]
    fn groups_cover_candidates_except_guess() {
        let matrix = sample();
        let all = matrix.all_answers();

        for guess in 0..matrix.query_len() {
            let groups = partition(&matrix, guess, &all);
            let total: usize = groups.iter().map(Vec::len).sum();
            assert_eq!(total, all.len() - 1, "guess {}", matrix.query_word(guess));
        }
    }

    #[test]
    fn groups_cover_all_candidates_when_guess_is_not_one() {
        let matrix = sample();
        let candidates = vec![1, 2, 3, 4];

        let groups = partition(&matrix, 0, &candidates);
        let mut seen: Vec<usize> = groups.into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, candidates);
    }

    #[test]
    fn groups_are_never_empty_and_share_one_pattern() {
        let matrix = sample();
        let all = matrix.all_answers();

        for guess in 0..matrix.query_len() {
            for group in partition(&matrix, guess, &all) {
                assert!(!group.is_empty());
                let pattern = matrix.code(guess, group[0]);
                assert!(!pattern.is_perfect());
                assert!(group.iter().all(|&a| matrix.code(guess, a) == pattern));
            }
        }
    }

    #[test]
    fn group_count_bounded_by_candidates() {
        let matrix = sample();
        let all = matrix.all_answers();

        let groups = partition(&matrix, 6, &all);
        assert!(groups.len() <= all.len());
        assert!(groups.len() <= Pattern::COUNT);
    }

    #[test]
    fn guess_alone_gives_no_groups() {
        let matrix = sample();
        assert!(partition(&matrix, 3, &[3]).is_empty());
        assert!(partition(&matrix, 3, &[]).is_empty());
    }

    #[test]
    fn groups_keep_candidate_order() {
        let matrix = sample();
        let candidates = vec![5, 4, 2, 1];

        for group in partition(&matrix, 6, &candidates) {
            let positions: Vec<usize> = group
                .iter()
                .map(|a| candidates.iter().position(|c| c == a).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn partition_words_resolves_words() {
        let matrix = sample();
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["crane", "crate", "slate"]);

        let groups = partition_words(&matrix, &guess, &candidates).unwrap();
        let texts: Vec<Vec<&str>> = groups
            .iter()
            .map(|g| g.iter().map(|w| w.text()).collect())
            .collect();
        assert_eq!(texts, vec![vec!["crate"], vec!["slate"]]);
    }

    #[test]
    fn partition_words_rejects_unknown_words() {
        let matrix = sample();
        let guess = Word::new("zebra").unwrap();
        assert!(partition_words(&matrix, &guess, &[]).is_err());

        let guess = Word::new("crane").unwrap();
        assert!(partition_words(&matrix, &guess, &words(&["zebra"])).is_err());
    }
}
