//! Game session
//!
//! Owns the live `RoundState` together with the collaborators a round needs:
//! the word source, the dictionary oracle, and the random number generator.

use super::config::GameConfig;
use crate::core::{RootWord, RoundState, ScorePolicy};
use crate::validation::{DictionaryOracle, Verdict, WordListOracle};
use crate::wordlists::WordSource;
use anyhow::Result;
use rand::rngs::StdRng;

/// A running game session
pub struct Session<O = WordListOracle> {
    round: RoundState,
    source: WordSource,
    oracle: O,
    language: String,
    policy: ScorePolicy,
    rng: StdRng,
}

impl Session<WordListOracle> {
    /// Load word lists per `config` and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot be loaded, or if the root
    /// word list cannot be loaded and `config.strict` is set.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let oracle = config.load_oracle()?;
        let mut rng = config.rng();
        let (source, root) = config.startup(&mut rng)?;

        tracing::info!(
            roots = source.len(),
            dictionary = oracle.len(),
            language = %config.language,
            "session ready"
        );

        Ok(Self::new(
            RoundState::new(root),
            source,
            oracle,
            config.language.clone(),
            config.score_policy,
            rng,
        ))
    }
}

impl<O: DictionaryOracle> Session<O> {
    #[must_use]
    pub const fn new(
        round: RoundState,
        source: WordSource,
        oracle: O,
        language: String,
        policy: ScorePolicy,
        rng: StdRng,
    ) -> Self {
        Self {
            round,
            source,
            oracle,
            language,
            policy,
            rng,
        }
    }

    /// Draw a new root word and start a new round
    pub fn new_round(&mut self) -> &RootWord {
        let root = self.source.choose(&mut self.rng);
        let round = std::mem::take(&mut self.round);
        self.round = round.start(root, self.policy);
        self.round.root()
    }

    /// Submit raw input to the current round
    ///
    /// Returns `None` when the input is blank after normalization.
    pub fn submit(&mut self, raw: &str) -> Option<Verdict> {
        let round = std::mem::take(&mut self.round);
        let (round, verdict) = round.submit(raw, &self.oracle, &self.language);
        self.round = round;
        verdict
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> ScorePolicy {
        self.policy
    }
}
