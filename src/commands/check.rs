//! Word checking command
//!
//! Runs a list of words through a fresh round and reports each verdict.

use crate::core::{RootWord, RootWordError, RoundState, normalize};
use crate::validation::{DictionaryOracle, Verdict};

/// Outcome for one submitted word
pub struct CheckEntry {
    /// The word after normalization
    pub word: String,
    /// `None` when the word was blank
    pub verdict: Option<Verdict>,
    /// Alert title and message for rejections
    pub alert: Option<(&'static str, String)>,
}

/// Result of checking words against a root
pub struct CheckResult {
    pub root: String,
    pub entries: Vec<CheckEntry>,
    pub score: usize,
}

impl CheckResult {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.verdict.is_some_and(Verdict::is_accepted))
            .count()
    }
}

/// Submit each word in order to a new round on `root`
///
/// Words accepted earlier in the list count as used for later ones.
///
/// # Errors
///
/// Returns an error if `root` is blank.
///
/// # Examples
/// ```
/// use word_scramble::commands::check_words;
/// use word_scramble::validation::WordListOracle;
///
/// let oracle = WordListOracle::new("en", ["silent", "tin"]);
/// let result = check_words("listen", ["silent", "Silent", "tin"], &oracle, "en").unwrap();
/// assert_eq!(result.accepted(), 2);
/// assert_eq!(result.score, 9);
/// ```
pub fn check_words<I, S, O>(
    root: &str,
    words: I,
    oracle: &O,
    language: &str,
) -> Result<CheckResult, RootWordError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    O: DictionaryOracle + ?Sized,
{
    let root = RootWord::new(root)?;
    let mut round = RoundState::new(root.clone());
    let mut entries = Vec::new();

    for raw in words {
        let (next, verdict) = round.submit(raw.as_ref(), oracle, language);
        round = next;

        let alert = verdict
            .and_then(Verdict::rejection)
            .map(|reason| (reason.title(), reason.message(&root)));

        entries.push(CheckEntry {
            word: normalize(raw.as_ref()),
            verdict,
            alert,
        });
    }

    Ok(CheckResult {
        root: root.text().to_string(),
        entries,
        score: round.score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{RejectionReason, WordListOracle};

    fn oracle() -> WordListOracle {
        WordListOracle::new("en", ["silk", "worm", "or", "milk"])
    }

    #[test]
    fn check_reports_each_rule() {
        let result = check_words(
            "silkworm",
            ["silk", "SILK", "silkk", "wilk", "or", "  ", "worm"],
            &oracle(),
            "en",
        )
        .unwrap();

        let verdicts: Vec<Option<Verdict>> = result.entries.iter().map(|e| e.verdict).collect();
        assert_eq!(
            verdicts,
            [
                Some(Verdict::Accept { score_delta: 4 }),
                Some(Verdict::Reject(RejectionReason::AlreadyUsed)),
                Some(Verdict::Reject(RejectionReason::NotComposable)),
                Some(Verdict::Reject(RejectionReason::NotReal)),
                Some(Verdict::Reject(RejectionReason::TooSimple)),
                None,
                Some(Verdict::Accept { score_delta: 4 }),
            ]
        );
        assert_eq!(result.score, 8);
        assert_eq!(result.accepted(), 2);
    }

    #[test]
    fn check_includes_alert_text() {
        let result = check_words("silkworm", ["silkk"], &oracle(), "en").unwrap();
        let (title, message) = result.entries[0].alert.clone().unwrap();
        assert_eq!(title, "Word not possible");
        assert_eq!(message, "You can't spell that word from 'silkworm'!");
    }

    #[test]
    fn check_normalizes_root_and_words() {
        let result = check_words(" SilkWorm ", [" Milk\n"], &oracle(), "en").unwrap();
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.entries[0].word, "milk");
        assert!(result.entries[0].alert.is_none());
    }

    #[test]
    fn check_blank_root_fails() {
        let words: [&str; 0] = [];
        assert!(check_words(" ", words, &oracle(), "en").is_err());
    }
}
