//! Word validation pipeline
//!
//! Decides whether a normalized candidate is accepted for the current round.
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. Originality: not already used this round
//! 2. Composability: spellable from the root word's letters
//! 3. Realness: recognized by the dictionary oracle
//! 4. Minimum length: at least `MIN_WORD_LENGTH` letters
//!
//! The pipeline never mutates state; callers apply the verdict.

pub mod oracle;

pub use oracle::{DEFAULT_LANGUAGE, DictionaryOracle, WordListOracle};

use crate::core::{RootWord, can_spell, letter_count};
use std::fmt;

/// Shortest word that earns points
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    AlreadyUsed,
    NotComposable,
    NotReal,
    TooSimple,
}

impl RejectionReason {
    /// Short heading for the alert shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotComposable => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::TooSimple => "Word is too simple",
        }
    }

    /// Alert body; `NotComposable` names the root word
    #[must_use]
    pub fn message(self, root: &RootWord) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotComposable => format!("You can't spell that word from '{root}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
            Self::TooSimple => "Try something longer!".to_string(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of validating one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept { score_delta: usize },
    Reject(RejectionReason),
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accept { .. })
    }

    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<RejectionReason> {
        match self {
            Self::Accept { .. } => None,
            Self::Reject(reason) => Some(reason),
        }
    }
}

/// Candidate has not been accepted earlier in the round
#[inline]
#[must_use]
pub fn is_original(candidate: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|w| w == candidate)
}

/// Candidate's letters are a sub-multiset of the root's letters
#[inline]
#[must_use]
pub fn is_composable(candidate: &str, root: &RootWord) -> bool {
    can_spell(candidate, root.text())
}

/// Candidate is a dictionary word in `language`
#[inline]
#[must_use]
pub fn is_real<O: DictionaryOracle + ?Sized>(candidate: &str, oracle: &O, language: &str) -> bool {
    oracle.is_real(candidate, language)
}

/// Candidate is long enough to score
#[inline]
#[must_use]
pub fn is_long_enough(candidate: &str) -> bool {
    letter_count(candidate) >= MIN_WORD_LENGTH
}

/// Validate a normalized candidate against the round
///
/// Returns `None` for an empty candidate: nothing is validated and nothing
/// is reported.
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::validation::{RejectionReason, Verdict, WordListOracle, validate};
///
/// let oracle = WordListOracle::new("en", ["silent", "tin"]);
/// let root = RootWord::new("listen").unwrap();
///
/// assert_eq!(
///     validate("silent", &root, &[], &oracle, "en"),
///     Some(Verdict::Accept { score_delta: 6 })
/// );
/// assert_eq!(
///     validate("tinn", &root, &[], &oracle, "en"),
///     Some(Verdict::Reject(RejectionReason::NotComposable))
/// );
/// assert_eq!(validate("", &root, &[], &oracle, "en"), None);
/// ```
#[must_use]
pub fn validate<O: DictionaryOracle + ?Sized>(
    candidate: &str,
    root: &RootWord,
    used_words: &[String],
    oracle: &O,
    language: &str,
) -> Option<Verdict> {
    if candidate.is_empty() {
        return None;
    }

    let verdict = if !is_original(candidate, used_words) {
        Verdict::Reject(RejectionReason::AlreadyUsed)
    } else if !is_composable(candidate, root) {
        Verdict::Reject(RejectionReason::NotComposable)
    } else if !is_real(candidate, oracle, language) {
        Verdict::Reject(RejectionReason::NotReal)
    } else if !is_long_enough(candidate) {
        Verdict::Reject(RejectionReason::TooSimple)
    } else {
        Verdict::Accept {
            score_delta: letter_count(candidate),
        }
    };

    Some(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts every word; isolates the other rules
    struct AnyWord;

    impl DictionaryOracle for AnyWord {
        fn is_real(&self, _word: &str, _language: &str) -> bool {
            true
        }
    }

    /// Rejects every word
    struct NoWord;

    impl DictionaryOracle for NoWord {
        fn is_real(&self, _word: &str, _language: &str) -> bool {
            false
        }
    }

    fn root(text: &str) -> RootWord {
        RootWord::new(text).unwrap()
    }

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn empty_candidate_is_a_no_op() {
        assert_eq!(validate("", &root("silkworm"), &[], &AnyWord, "en"), None);
    }

    #[test]
    fn anagram_accepted_with_length_score() {
        let oracle = WordListOracle::new("en", ["silent"]);
        assert_eq!(
            validate("silent", &root("listen"), &[], &oracle, "en"),
            Some(Verdict::Accept { score_delta: 6 })
        );
    }

    #[test]
    fn used_word_wins_over_every_other_rule() {
        // "xy" fails composability, realness, and length too
        let history = used(&["xy", "silk"]);
        for word in ["xy", "silk"] {
            assert_eq!(
                validate(word, &root("silkworm"), &history, &NoWord, "en"),
                Some(Verdict::Reject(RejectionReason::AlreadyUsed))
            );
        }
    }

    #[test]
    fn missing_letter_multiplicity_not_composable() {
        assert_eq!(
            validate("silkk", &root("silkworm"), &[], &AnyWord, "en"),
            Some(Verdict::Reject(RejectionReason::NotComposable))
        );
    }

    #[test]
    fn composability_checked_before_realness() {
        assert_eq!(
            validate("zebra", &root("silkworm"), &[], &NoWord, "en"),
            Some(Verdict::Reject(RejectionReason::NotComposable))
        );
    }

    #[test]
    fn unknown_word_not_real() {
        assert_eq!(
            validate("wilk", &root("silkworm"), &[], &NoWord, "en"),
            Some(Verdict::Reject(RejectionReason::NotReal))
        );
    }

    #[test]
    fn realness_checked_before_length() {
        // "sk" is composable and short, but the oracle does not know it
        let oracle = WordListOracle::new("en", ["or"]);
        assert_eq!(
            validate("sk", &root("silkworm"), &[], &oracle, "en"),
            Some(Verdict::Reject(RejectionReason::NotReal))
        );
    }

    #[test]
    fn short_real_word_too_simple() {
        let oracle = WordListOracle::new("en", ["or"]);
        assert_eq!(
            validate("or", &root("silkworm"), &[], &oracle, "en"),
            Some(Verdict::Reject(RejectionReason::TooSimple))
        );
    }

    #[test]
    fn three_letters_is_enough() {
        let oracle = WordListOracle::new("en", ["owl"]);
        assert_eq!(
            validate("owl", &root("silkworm"), &[], &oracle, "en"),
            Some(Verdict::Accept { score_delta: 3 })
        );
    }

    #[test]
    fn oracle_language_respected() {
        let oracle = WordListOracle::new("en", ["silent"]);
        assert_eq!(
            validate("silent", &root("listen"), &[], &oracle, "fr"),
            Some(Verdict::Reject(RejectionReason::NotReal))
        );
    }

    #[test]
    fn whole_root_is_a_valid_candidate() {
        assert_eq!(
            validate("silkworm", &root("silkworm"), &[], &AnyWord, "en"),
            Some(Verdict::Accept { score_delta: 8 })
        );
    }

    #[test]
    fn rejection_messages() {
        let r = root("silkworm");
        assert_eq!(RejectionReason::AlreadyUsed.title(), "Word used already");
        assert_eq!(
            RejectionReason::NotComposable.message(&r),
            "You can't spell that word from 'silkworm'!"
        );
        assert_eq!(
            RejectionReason::NotReal.message(&r),
            "You can't just make them up, you know!"
        );
        assert_eq!(RejectionReason::TooSimple.to_string(), "Word is too simple");
    }

    #[test]
    fn verdict_helpers() {
        assert!(Verdict::Accept { score_delta: 3 }.is_accepted());
        assert_eq!(
            Verdict::Reject(RejectionReason::NotReal).rejection(),
            Some(RejectionReason::NotReal)
        );
        assert_eq!(Verdict::Accept { score_delta: 3 }.rejection(), None);
    }
}
