//! Formatting utilities for terminal output

use crate::core::letter_count;

/// Badge showing a word's length, like a numbered circle
///
/// Lengths 1 through 20 use circled numerals; anything else falls back to
/// `(n)`.
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::length_badge;
///
/// assert_eq!(length_badge(6), "⑥");
/// assert_eq!(length_badge(21), "(21)");
/// ```
#[must_use]
pub fn length_badge(len: usize) -> String {
    u32::try_from(len)
        .ok()
        .filter(|n| (1..=20).contains(n))
        .and_then(|n| char::from_u32(0x2460 + n - 1))
        .map_or_else(|| format!("({len})"), String::from)
}

/// A history row: length badge followed by the word
#[must_use]
pub fn history_line(word: &str) -> String {
    format!("{} {word}", length_badge(letter_count(word)))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `whole`, clamped to 0..=100
#[must_use]
pub fn percent(part: usize, whole: usize) -> u16 {
    if whole == 0 {
        return 0;
    }
    ((part * 100 / whole).min(100)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_circled() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(3), "③");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn length_badge_fallback() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(25), "(25)");
    }

    #[test]
    fn history_line_format() {
        assert_eq!(history_line("silent"), "⑥ silent");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn percent_clamped() {
        assert_eq!(percent(1, 4), 25);
        assert_eq!(percent(9, 4), 100);
        assert_eq!(percent(1, 0), 0);
    }
}
