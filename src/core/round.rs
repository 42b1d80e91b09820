//! Round lifecycle
//!
//! `RoundState` holds the root word, the accepted words, and the score.
//! Transitions take the state by value and hand back the next one, so the
//! presentation layer owns the single live instance.

use super::candidate::normalize;
use super::root::RootWord;
use crate::validation::{DictionaryOracle, Verdict, validate};

/// What happens to the score when a new round starts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorePolicy {
    /// Score carries across rounds for the whole session
    #[default]
    Cumulative,
    /// Score resets to zero with each new root word
    PerRound,
}

/// State of the current round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    root: RootWord,
    used_words: Vec<String>,
    score: usize,
    rounds_started: usize,
}

impl RoundState {
    /// Begin the first round with the given root word
    #[must_use]
    pub const fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vec::new(),
            score: 0,
            rounds_started: 1,
        }
    }

    /// Start a new round: new root, empty history
    ///
    /// The score is kept or reset according to `policy`.
    #[must_use]
    pub fn start(self, root: RootWord, policy: ScorePolicy) -> Self {
        let score = match policy {
            ScorePolicy::Cumulative => self.score,
            ScorePolicy::PerRound => 0,
        };

        tracing::info!(root = %root, score, "round started");

        Self {
            root,
            used_words: Vec::new(),
            score,
            rounds_started: self.rounds_started + 1,
        }
    }

    /// Submit raw player input
    ///
    /// The input is normalized before validation. Accepted words go to the
    /// front of the history and add their length to the score; rejections
    /// and empty input leave the state untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, RoundState};
    /// use word_scramble::validation::{Verdict, WordListOracle};
    ///
    /// let oracle = WordListOracle::new("en", ["silent"]);
    /// let round = RoundState::new(RootWord::new("listen").unwrap());
    ///
    /// let (round, verdict) = round.submit("  Silent ", &oracle, "en");
    /// assert_eq!(verdict, Some(Verdict::Accept { score_delta: 6 }));
    /// assert_eq!(round.score(), 6);
    /// assert_eq!(round.used_words(), ["silent"]);
    /// ```
    #[must_use]
    pub fn submit<O: DictionaryOracle + ?Sized>(
        mut self,
        raw: &str,
        oracle: &O,
        language: &str,
    ) -> (Self, Option<Verdict>) {
        let candidate = normalize(raw);
        let verdict = validate(&candidate, &self.root, &self.used_words, oracle, language);

        match verdict {
            Some(Verdict::Accept { score_delta }) => {
                tracing::debug!(word = %candidate, score_delta, "word accepted");
                self.used_words.insert(0, candidate);
                self.score += score_delta;
            }
            Some(Verdict::Reject(reason)) => {
                tracing::debug!(word = %candidate, %reason, "word rejected");
            }
            None => {}
        }

        (self, verdict)
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Number of rounds played this session, including the current one
    #[inline]
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }
}
