//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a guess as five base-3 digits:
//! - 0 = absent
//! - 1 = present elsewhere in the answer
//! - 2 = exact match
//!
//! The digit for position 0 is the most significant, so the pattern value is
//! `Σ digit[i] × 3^(4-i)` and fits in a single byte (0-242).

use super::word::{WORD_LENGTH, Word};

/// Feedback pattern for a guess against an answer
///
/// Value range: 0-242 (3^5 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact matches
    pub const PERFECT: Self = Self(242);

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is an exact match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is played and `answer` is the target
    ///
    /// A position scores 2 when the letters agree. Otherwise it scores 1 when
    /// the guessed letter occurs somewhere in the answer at a position that is
    /// not itself an exact match, and 0 when it does not.
    ///
    /// Repeated letters in the guess are not rationed against the number of
    /// occurrences in the answer: every copy sees the same unmatched
    /// occurrences. `speed` against `abide` marks both `e`s as present, where
    /// the published game would mark only one.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(0) R(0) A(2) N(0) E(2)
    /// assert_eq!(pattern.value(), 2 * 9 + 2);
    /// assert_eq!(pattern.to_digit_string(), "00202");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let g = guess.chars();
        let a = answer.chars();

        let mut value = 0u8;
        // Allow: index needed to compare guess[i] against answer[j] and guess[j]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let digit = if g[i] == a[i] {
                2
            } else if (0..WORD_LENGTH).any(|j| a[j] == g[i] && a[j] != g[j]) {
                1
            } else {
                0
            };
            value = value * 3 + digit;
        }

        Self(value)
    }

    /// Decode the pattern into its five digits, position 0 first
    #[must_use]
    pub const fn digits(self) -> [u8; WORD_LENGTH] {
        let mut digits = [0u8; WORD_LENGTH];
        let mut val = self.0;
        let mut i = WORD_LENGTH;
        while i > 0 {
            i -= 1;
            digits[i] = val % 3;
            val /= 3;
        }
        digits
    }

    /// Parse a feedback string of five digits such as `"21020"`
    ///
    /// Each character must be `0` (absent), `1` (present) or `2` (exact).
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::Pattern;
    ///
    /// assert_eq!(Pattern::from_digits("22222"), Some(Pattern::PERFECT));
    /// assert_eq!(Pattern::from_digits("00001").unwrap().value(), 1);
    /// assert!(Pattern::from_digits("2222").is_none());
    /// assert!(Pattern::from_digits("22232").is_none());
    /// ```
    #[must_use]
    pub fn from_digits(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return None;
        }

        let mut value = 0u8;
        for &b in bytes {
            let digit = match b {
                b'0'..=b'2' => b - b'0',
                _ => return None,
            };
            value = value * 3 + digit;
        }

        Some(Self(value))
    }

    /// Render the pattern as a five-digit feedback string
    #[must_use]
    pub fn to_digit_string(self) -> String {
        self.digits().iter().map(|&d| char::from(b'0' + d)).collect()
    }

    /// Convert pattern to emoji string, like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .iter()
            .map(|&d| match d {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s.trim())
            .ok_or_else(|| format!("Invalid feedback '{s}': expected five digits 0/1/2"))
    }
}
