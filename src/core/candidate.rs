//! Candidate normalization and letter bookkeeping

use rustc_hash::FxHashMap;

/// Normalize raw input into a candidate word
///
/// Lower-cases the text and strips leading and trailing whitespace,
/// including newlines.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Listen \n"), "listen");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a word, counted as characters
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Check whether `word` can be spelled from the letters of `pool`
///
/// Each letter of `word` consumes one occurrence from a scratch copy of
/// `pool`, so repeated letters need repeated occurrences.
///
/// # Examples
/// ```
/// use word_scramble::core::can_spell;
///
/// assert!(can_spell("pp", "apple"));
/// assert!(!can_spell("pp", "ample"));
/// ```
#[must_use]
pub fn can_spell(word: &str, pool: &str) -> bool {
    let mut remaining: Vec<char> = pool.chars().collect();

    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Get the count of each letter in a word
///
/// Used to check many words against one pool without rescanning it.
#[must_use]
pub fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Multiset containment over precomputed counts
///
/// Equivalent to `can_spell(word, pool)` when `pool_counts` came from
/// `letter_counts(pool)`.
#[must_use]
pub fn fits_counts(word: &str, pool_counts: &FxHashMap<char, usize>) -> bool {
    letter_counts(word)
        .iter()
        .all(|(ch, &needed)| pool_counts.get(ch).is_some_and(|&have| have >= needed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Listen "), "listen");
        assert_eq!(normalize("\nWORM\r\n"), "worm");
        assert_eq!(normalize("silk worm"), "silk worm");
    }

    #[test]
    fn letter_count_uses_chars() {
        assert_eq!(letter_count("silent"), 6);
        assert_eq!(letter_count("café"), 4);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        assert!(can_spell("pp", "apple"));
        assert!(!can_spell("pp", "ample"));
        assert!(!can_spell("silkk", "silkworm"));
        assert!(can_spell("silent", "listen"));
    }

    #[test]
    fn can_spell_order_independent() {
        assert!(can_spell("worms", "silkworm"));
        assert!(can_spell("milk", "silkworm"));
        assert!(!can_spell("milky", "silkworm"));
    }

    #[test]
    fn can_spell_empty_word() {
        assert!(can_spell("", "silkworm"));
    }

    #[test]
    fn letter_counts_duplicates() {
        let counts = letter_counts("apple");
        assert_eq!(counts.get(&'p'), Some(&2));
        assert_eq!(counts.get(&'a'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn fits_counts_matches_can_spell() {
        let pool = "silkworm";
        let counts = letter_counts(pool);
        for word in ["silk", "worm", "silkk", "milk", "mow", "swirl", "words"] {
            assert_eq!(fits_counts(word, &counts), can_spell(word, pool), "{word}");
        }
    }

    #[test]
    fn letter_counts_past_u8_range() {
        let pool = "a".repeat(300);
        let counts = letter_counts(&pool);
        assert_eq!(counts.get(&'a'), Some(&300));

        assert!(fits_counts(&"a".repeat(256), &counts));
        assert!(fits_counts(&pool, &counts));
        assert!(!fits_counts(&"a".repeat(301), &counts));
    }
}
