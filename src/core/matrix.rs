//! Precomputed feedback table
//!
//! Stores the pattern for every (query word, answer word) pair so the search
//! never recomputes feedback.

use super::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error for a word that was not part of the table when it was built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownWordError {
    Query(String),
    Answer(String),
}

impl fmt::Display for UnknownWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(word) => write!(f, "'{word}' is not in the guess vocabulary"),
            Self::Answer(word) => write!(f, "'{word}' is not in the answer vocabulary"),
        }
    }
}

impl std::error::Error for UnknownWordError {}

/// Dense feedback table for a query vocabulary against an answer vocabulary
///
/// Built once and read-only afterwards. Words are addressed by their index in
/// the deduplicated vocabularies.
#[derive(Debug, Clone)]
pub struct FeedbackMatrix {
    query_words: Vec<Word>,
    answer_words: Vec<Word>,
    query_index: FxHashMap<Word, usize>,
    answer_index: FxHashMap<Word, usize>,
    answer_as_query: Vec<Option<usize>>,
    codes: Vec<Pattern>,
}

impl FeedbackMatrix {
    /// Compute the pattern for every query/answer pair
    ///
    /// Repeated words keep their first position. Rows are filled in parallel.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{FeedbackMatrix, Pattern, Word};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let matrix = FeedbackMatrix::build(&words, &words);
    ///
    /// let pattern = matrix.lookup(&words[0], &words[1]).unwrap();
    /// assert_eq!(pattern, Pattern::calculate(&words[0], &words[1]));
    /// ```
    #[must_use]
    pub fn build(query_words: &[Word], answer_words: &[Word]) -> Self {
        let (query_words, query_index) = dedup(query_words);
        let (answer_words, answer_index) = dedup(answer_words);

        let answer_as_query = answer_words
            .iter()
            .map(|word| query_index.get(word).copied())
            .collect();

        let width = answer_words.len();
        let mut codes = vec![Pattern::default(); query_words.len() * width];
        if width > 0 {
            codes
                .par_chunks_mut(width)
                .zip(query_words.par_iter())
                .for_each(|(row, guess)| {
                    for (code, answer) in row.iter_mut().zip(&answer_words) {
                        *code = Pattern::calculate(guess, answer);
                    }
                });
        }

        Self {
            query_words,
            answer_words,
            query_index,
            answer_index,
            answer_as_query,
            codes,
        }
    }

    /// Pattern for a query word against an answer word
    ///
    /// # Errors
    /// Returns `UnknownWordError` if either word was not supplied to `build`.
    pub fn lookup(&self, query: &Word, answer: &Word) -> Result<Pattern, UnknownWordError> {
        let q = self.query_index(query)?;
        let a = self.answer_index(answer)?;
        Ok(self.code(q, a))
    }

    /// Pattern for a query index against an answer index
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn code(&self, query: usize, answer: usize) -> Pattern {
        self.codes[query * self.answer_words.len() + answer]
    }

    /// Index of a query word
    ///
    /// # Errors
    /// Returns `UnknownWordError::Query` if the word is not a query word.
    pub fn query_index(&self, word: &Word) -> Result<usize, UnknownWordError> {
        self.query_index
            .get(word)
            .copied()
            .ok_or_else(|| UnknownWordError::Query(word.text().to_string()))
    }

    /// Index of an answer word
    ///
    /// # Errors
    /// Returns `UnknownWordError::Answer` if the word is not an answer word.
    pub fn answer_index(&self, word: &Word) -> Result<usize, UnknownWordError> {
        self.answer_index
            .get(word)
            .copied()
            .ok_or_else(|| UnknownWordError::Answer(word.text().to_string()))
    }

    /// Indices of several answer words, in the given order
    ///
    /// # Errors
    /// Returns the first `UnknownWordError` encountered.
    pub fn answer_indices(&self, words: &[Word]) -> Result<Vec<usize>, UnknownWordError> {
        words.iter().map(|word| self.answer_index(word)).collect()
    }

    /// Every answer index, in vocabulary order
    #[must_use]
    pub fn all_answers(&self) -> Vec<usize> {
        (0..self.answer_words.len()).collect()
    }

    /// Query index of the word at an answer index, if it can be guessed
    #[inline]
    #[must_use]
    pub fn query_for_answer(&self, answer: usize) -> Option<usize> {
        self.answer_as_query[answer]
    }

    #[inline]
    #[must_use]
    pub fn query_word(&self, index: usize) -> &Word {
        &self.query_words[index]
    }

    #[inline]
    #[must_use]
    pub fn answer_word(&self, index: usize) -> &Word {
        &self.answer_words[index]
    }

    #[must_use]
    pub fn query_words(&self) -> &[Word] {
        &self.query_words
    }

    #[must_use]
    pub fn answer_words(&self) -> &[Word] {
        &self.answer_words
    }

    #[must_use]
    pub fn query_len(&self) -> usize {
        self.query_words.len()
    }

    #[must_use]
    pub fn answer_len(&self) -> usize {
        self.answer_words.len()
    }

    /// Keep the candidates that produce `pattern` against the guess
    ///
    /// Candidate order is preserved.
    #[must_use]
    pub fn filter(&self, guess: usize, candidates: &[usize], pattern: Pattern) -> Vec<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&answer| self.code(guess, answer) == pattern)
            .collect()
    }

    /// Like [`FeedbackMatrix::filter`] for a guess given as a word
    ///
    /// A guess outside the query vocabulary (an answer-only word) is compared
    /// directly instead of through the table.
    #[must_use]
    pub fn filter_word(&self, guess: &Word, candidates: &[usize], pattern: Pattern) -> Vec<usize> {
        if let Ok(query) = self.query_index(guess) {
            return self.filter(query, candidates, pattern);
        }

        candidates
            .iter()
            .copied()
            .filter(|&answer| Pattern::calculate(guess, &self.answer_words[answer]) == pattern)
            .collect()
    }
}

/// Drop repeated words, keeping the first occurrence
fn dedup(words: &[Word]) -> (Vec<Word>, FxHashMap<Word, usize>) {
    let mut unique = Vec::with_capacity(words.len());
    let mut index = FxHashMap::default();

    for word in words {
        index.entry(word.clone()).or_insert_with(|| {
            unique.push(word.clone());
            unique.len() - 1
        });
    }

    (unique, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn matrix_matches_direct_calculation() {
        let query = words(&["crane", "speed", "robot", "aaaaa"]);
        let answers = words(&["abide", "floor", "slate", "crane"]);
        let matrix = FeedbackMatrix::build(&query, &answers);

        for (q, guess) in query.iter().enumerate() {
            for (a, answer) in answers.iter().enumerate() {
                let expected = Pattern::calculate(guess, answer);
                assert_eq!(matrix.code(q, a), expected);
                assert_eq!(matrix.lookup(guess, answer), Ok(expected));
            }
        }
    }

    #[test]
    fn matrix_unknown_words_are_rejected() {
        let list = words(&["crane", "slate"]);
        let matrix = FeedbackMatrix::build(&list, &list);
        let stranger = Word::new("robot").unwrap();

        assert_eq!(
            matrix.lookup(&stranger, &list[0]),
            Err(UnknownWordError::Query("robot".to_string()))
        );
        assert_eq!(
            matrix.lookup(&list[0], &stranger),
            Err(UnknownWordError::Answer("robot".to_string()))
        );
        assert!(matrix.answer_indices(&[list[1].clone(), stranger]).is_err());
    }

    #[test]
    fn matrix_deduplicates_words() {
        let list = words(&["crane", "slate", "crane"]);
        let matrix = FeedbackMatrix::build(&list, &list);

        assert_eq!(matrix.query_len(), 2);
        assert_eq!(matrix.answer_len(), 2);
        assert_eq!(matrix.answer_index(&list[2]), Ok(0));
    }

    #[test]
    fn matrix_maps_answers_to_query_indices() {
        let query = words(&["slate", "crane"]);
        let answers = words(&["crane", "robot"]);
        let matrix = FeedbackMatrix::build(&query, &answers);

        assert_eq!(matrix.query_for_answer(0), Some(1));
        assert_eq!(matrix.query_for_answer(1), None);
    }

    #[test]
    fn matrix_filter_keeps_matching_candidates() {
        let list = words(&["crane", "crate", "grate", "slate"]);
        let matrix = FeedbackMatrix::build(&list, &list);
        let all = matrix.all_answers();

        let perfect = matrix.filter(1, &all, Pattern::PERFECT);
        assert_eq!(perfect, vec![1]);

        let pattern = matrix.code(0, 2);
        let kept = matrix.filter(0, &all, pattern);
        assert!(kept.contains(&2));
        assert!(kept.iter().all(|&a| matrix.code(0, a) == pattern));
    }

    #[test]
    fn matrix_filter_word_handles_answer_only_words() {
        let query = words(&["slate"]);
        let answers = words(&["crane", "crate", "slate"]);
        let matrix = FeedbackMatrix::build(&query, &answers);
        let all = matrix.all_answers();

        assert_eq!(matrix.filter_word(&answers[1], &all, Pattern::PERFECT), vec![1]);
        assert_eq!(matrix.filter_word(&query[0], &all, Pattern::PERFECT), vec![2]);
    }

    #[test]
    fn matrix_empty_answer_list() {
        let query = words(&["crane"]);
        let matrix = FeedbackMatrix::build(&query, &[]);
        assert_eq!(matrix.answer_len(), 0);
        assert!(matrix.all_answers().is_empty());
    }
}
