//! Depth-bounded expectation search
//!
//! Picks the guess that minimises the expected number of guesses needed to
//! finish, recursing into each feedback group up to a fixed depth and only
//! expanding the guesses that survive beam pruning.

use super::beam::{keep_best, rank};
use super::heuristic::{ScoredGuess, bucket_estimate};
use super::partition::partition;
use crate::core::{FeedbackMatrix, UnknownWordError, Word};
use rayon::prelude::*;
use std::fmt;

/// Search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Levels of lookahead before falling back to the heuristic estimate
    pub depth: u32,
    /// Only guess words that can still be the answer
    pub exhaustive: bool,
    /// Maximum number of guesses expanded at each node
    pub beam_width: usize,
    /// Guess to play first instead of searching for one
    pub first_guess: Option<Word>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            exhaustive: false,
            beam_width: 20,
            first_guess: None,
        }
    }
}

impl SearchConfig {
    /// Check the parameters can drive a search
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroBeamWidth` if the beam would discard every guess.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.beam_width == 0 {
            return Err(ConfigError::ZeroBeamWidth);
        }
        Ok(())
    }
}

/// Invalid search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBeamWidth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBeamWidth => write!(f, "Beam width must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error creating a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    Config(ConfigError),
    UnknownWord(UnknownWordError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid search configuration: {e}"),
            Self::UnknownWord(e) => write!(f, "Invalid first guess: {e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::UnknownWord(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SolverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<UnknownWordError> for SolverError {
    fn from(e: UnknownWordError) -> Self {
        Self::UnknownWord(e)
    }
}

/// Best guess for a candidate set and the expected number of guesses to
/// finish from there
///
/// `guess` is `None` when there is nothing to guess, or when the depth budget
/// ran out and only an estimate was made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<'m> {
    pub guess: Option<&'m Word>,
    pub score: f64,
}

/// Details of a top-level search, for reporting
#[derive(Debug, Clone)]
pub struct SearchTrace<'m> {
    /// Guesses that survived the beam, with their heuristic estimate
    pub shortlist: Vec<ScoredGuess>,
    /// The same guesses with their searched expected guess count
    pub evaluated: Vec<ScoredGuess>,
    pub result: SearchResult<'m>,
}

/// Lookahead solver over a precomputed feedback table
pub struct Solver<'m> {
    matrix: &'m FeedbackMatrix,
    config: SearchConfig,
    first_guess: Option<usize>,
}

impl<'m> Solver<'m> {
    /// Create a solver
    ///
    /// # Errors
    /// Returns `SolverError` if the configuration is invalid or the first
    /// guess is not in the guess vocabulary.
    pub fn new(matrix: &'m FeedbackMatrix, config: SearchConfig) -> Result<Self, SolverError> {
        config.validate()?;
        let first_guess = config
            .first_guess
            .as_ref()
            .map(|word| matrix.query_index(word))
            .transpose()?;

        Ok(Self {
            matrix,
            config,
            first_guess,
        })
    }

    #[must_use]
    pub const fn matrix(&self) -> &'m FeedbackMatrix {
        self.matrix
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Query index of the configured first guess
    #[must_use]
    pub const fn first_guess(&self) -> Option<usize> {
        self.first_guess
    }

    /// Best guess for `candidates` (answer indices)
    ///
    /// The configured first guess, if any, is the only guess considered at the
    /// top level. Deeper levels always search.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{FeedbackMatrix, Word};
    /// use wordle_lookahead::solver::{SearchConfig, Solver};
    ///
    /// let words = vec![Word::new("abcde").unwrap(), Word::new("fghij").unwrap()];
    /// let matrix = FeedbackMatrix::build(&words, &words);
    /// let solver = Solver::new(&matrix, SearchConfig::default()).unwrap();
    ///
    /// let result = solver.solve(&matrix.all_answers());
    /// assert_eq!(result.score, 1.5);
    /// assert!(result.guess.is_some());
    /// ```
    #[must_use]
    pub fn solve(&self, candidates: &[usize]) -> SearchResult<'m> {
        self.search(candidates, self.config.depth, self.first_guess)
    }

    /// Best guess for `candidates` without the configured first guess
    #[must_use]
    pub fn solve_free(&self, candidates: &[usize]) -> SearchResult<'m> {
        self.search(candidates, self.config.depth, None)
    }

    /// Like [`Solver::solve`], also reporting the shortlist and the score of
    /// every guess evaluated at the top level
    #[must_use]
    pub fn trace(&self, candidates: &[usize]) -> SearchTrace<'m> {
        self.trace_from(candidates, self.first_guess)
    }

    /// Like [`Solver::solve_free`], also reporting the top-level shortlist
    #[must_use]
    pub fn trace_free(&self, candidates: &[usize]) -> SearchTrace<'m> {
        self.trace_from(candidates, None)
    }

    fn trace_from(&self, candidates: &[usize], fixed: Option<usize>) -> SearchTrace<'m> {
        let depth = self.config.depth;
        if let Some(result) = self.terminal(candidates, depth) {
            return SearchTrace {
                shortlist: Vec::new(),
                evaluated: Vec::new(),
                result,
            };
        }

        let pool = self.guess_pool(candidates, fixed);
        let shortlist = keep_best(rank(self.matrix, candidates, &pool), self.config.beam_width);
        let guesses: Vec<usize> = shortlist.iter().map(|entry| entry.guess).collect();
        let evaluated = self.evaluate(candidates, depth, &guesses);
        let result = self.pick(&evaluated);

        SearchTrace {
            shortlist,
            evaluated,
            result,
        }
    }

    fn search(&self, candidates: &[usize], depth: u32, fixed: Option<usize>) -> SearchResult<'m> {
        if let Some(result) = self.terminal(candidates, depth) {
            return result;
        }

        let guesses = self.beam(candidates, fixed);
        let evaluated = self.evaluate(candidates, depth, &guesses);
        self.pick(&evaluated)
    }

    /// Results that need no search
    fn terminal(&self, candidates: &[usize], depth: u32) -> Option<SearchResult<'m>> {
        let result = match candidates {
            [] => SearchResult {
                guess: None,
                score: 0.0,
            },
            [only] => SearchResult {
                guess: Some(self.matrix.answer_word(*only)),
                score: 1.0,
            },
            // Either guess is right half the time, otherwise one more finishes
            [first, _] => SearchResult {
                guess: Some(self.matrix.answer_word(*first)),
                score: 1.5,
            },
            _ if depth == 0 => SearchResult {
                guess: None,
                score: bucket_estimate(candidates.len()),
            },
            _ => return None,
        };
        Some(result)
    }

    /// Every guess worth considering, before pruning
    fn guess_pool(&self, candidates: &[usize], fixed: Option<usize>) -> Vec<usize> {
        if let Some(guess) = fixed {
            vec![guess]
        } else if self.config.exhaustive {
            // Answers outside the guess vocabulary cannot be played
            candidates
                .iter()
                .filter_map(|&answer| self.matrix.query_for_answer(answer))
                .collect()
        } else {
            (0..self.matrix.query_len()).collect()
        }
    }

    fn beam(&self, candidates: &[usize], fixed: Option<usize>) -> Vec<usize> {
        let pool = self.guess_pool(candidates, fixed);
        if pool.len() <= self.config.beam_width {
            return pool;
        }

        keep_best(rank(self.matrix, candidates, &pool), self.config.beam_width)
            .into_iter()
            .map(|entry| entry.guess)
            .collect()
    }

    /// Expected guesses for each of `guesses`, in the same order
    fn evaluate(&self, candidates: &[usize], depth: u32, guesses: &[usize]) -> Vec<ScoredGuess> {
        guesses
            .par_iter()
            .map(|&guess| ScoredGuess {
                guess,
                score: self.expected_moves(candidates, depth, guess),
            })
            .collect()
    }

    fn expected_moves(&self, candidates: &[usize], depth: u32, guess: usize) -> f64 {
        let total = candidates.len() as f64;
        1.0 + partition(self.matrix, guess, candidates)
            .iter()
            .map(|group| {
                group.len() as f64 / total * self.search(group, depth - 1, None).score
            })
            .sum::<f64>()
    }

    /// Lowest score wins; on a tie the earlier entry wins, which after
    /// pruning is the one with the better estimate
    fn pick(&self, evaluated: &[ScoredGuess]) -> SearchResult<'m> {
        let mut best: Option<ScoredGuess> = None;
        for &entry in evaluated {
            if best.is_none_or(|b| entry.score < b.score) {
                best = Some(entry);
            }
        }

        best.map_or(
            SearchResult {
                guess: None,
                score: f64::INFINITY,
            },
            |b| SearchResult {
                guess: Some(self.matrix.query_word(b.guess)),
                score: b.score,
            },
        )
    }
}
