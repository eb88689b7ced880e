//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern as emoji followed by its digits, e.g. `🟩🟨⬜⬜⬜ 21000`
#[must_use]
pub fn pattern_label(pattern: Pattern) -> String {
    format!("{} {}", pattern.to_emoji(), pattern.to_digit_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// List words in a single line, eliding the middle of long lists
#[must_use]
pub fn word_preview<S: AsRef<str>>(words: &[S], limit: usize) -> String {
    if words.len() <= limit {
        return words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
    }

    let shown: Vec<&str> = words[..limit].iter().map(AsRef::as_ref).collect();
    format!("{} … (+{} more)", shown.join(" "), words.len() - limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_label_shows_both_forms() {
        let pattern = Pattern::from_digits("21000").unwrap();
        assert_eq!(pattern_label(pattern), "🟩🟨⬜⬜⬜ 21000");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn preview_short_and_long_lists() {
        assert_eq!(word_preview(&["crane", "slate"], 5), "crane slate");
        assert_eq!(
            word_preview(&["a", "b", "c", "d"], 2),
            "a b … (+2 more)"
        );
    }
}
