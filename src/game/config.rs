//! Game configuration
//!
//! Resolved settings shared by every front end.

use crate::core::{RootWord, ScorePolicy};
use crate::validation::{DEFAULT_LANGUAGE, WordListOracle};
use crate::wordlists::{Startup, WordSource, WordSourceError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Root word list; `None` uses the embedded list
    pub start_words: Option<PathBuf>,
    /// Dictionary word list; `None` uses the embedded list
    pub dictionary: Option<PathBuf>,
    /// Language tag passed to the dictionary oracle
    pub language: String,
    pub score_policy: ScorePolicy,
    /// Abort instead of falling back when the root word list fails to load
    pub strict: bool,
    /// Seed for root word selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: None,
            dictionary: None,
            language: DEFAULT_LANGUAGE.to_string(),
            score_policy: ScorePolicy::default(),
            strict: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Random number generator for root word selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Load the root word source
    ///
    /// # Errors
    ///
    /// Returns an error if a configured word list cannot be loaded.
    pub fn load_source(&self) -> Result<WordSource, WordSourceError> {
        match &self.start_words {
            Some(path) => WordSource::load(path),
            None => Ok(WordSource::embedded()),
        }
    }

    /// Build the dictionary oracle for the configured language
    ///
    /// The embedded list only answers for `DEFAULT_LANGUAGE`; any other
    /// language needs `dictionary` set.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured dictionary cannot be loaded, or
    /// `WordSourceError::NoDictionary` if no dictionary is configured for a
    /// language the embedded list does not cover.
    pub fn load_oracle(&self) -> Result<WordListOracle, WordSourceError> {
        match &self.dictionary {
            Some(path) => WordListOracle::load(path, self.language.as_str()),
            None if self.language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) => {
                Ok(WordListOracle::embedded())
            }
            None => Err(WordSourceError::NoDictionary {
                language: self.language.clone(),
            }),
        }
    }

    /// Pick the first root word, applying the fallback policy
    ///
    /// # Errors
    ///
    /// Returns the load error when `strict` is set and the source failed.
    pub fn startup(&self, rng: &mut StdRng) -> Result<(WordSource, RootWord), WordSourceError> {
        let startup = Startup::resolve(self.load_source(), rng);
        if self.strict {
            startup.or_abort()
        } else {
            Ok(startup.or_fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DictionaryOracle;

    fn missing_words() -> GameConfig {
        GameConfig {
            start_words: Some(PathBuf::from("/nonexistent/word_scramble/start.txt")),
            ..GameConfig::default()
        }
    }

    #[test]
    fn default_config_uses_embedded_lists() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.score_policy, ScorePolicy::Cumulative);
        assert!(config.load_source().is_ok());
        assert!(!config.load_oracle().unwrap().is_empty());
    }

    #[test]
    fn embedded_dictionary_ignores_language_case() {
        let config = GameConfig {
            language: "EN".to_string(),
            ..GameConfig::default()
        };
        assert!(config.load_oracle().is_ok());
    }

    #[test]
    fn other_language_needs_a_dictionary_file() {
        let config = GameConfig {
            language: "fr".to_string(),
            ..GameConfig::default()
        };
        let err = config.load_oracle().unwrap_err();
        assert!(matches!(
            &err,
            WordSourceError::NoDictionary { language } if language == "fr"
        ));
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn other_language_with_dictionary_file() {
        let path = std::env::temp_dir().join("word_scramble_config_fr_dictionary.txt");
        std::fs::write(&path, "chien\nchat\n").unwrap();

        let config = GameConfig {
            dictionary: Some(path.clone()),
            language: "fr".to_string(),
            ..GameConfig::default()
        };
        let oracle = config.load_oracle().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(oracle.is_real("chien", "fr"));
        assert!(!oracle.is_real("chien", "en"));
    }

    #[test]
    fn seeded_rng_repeats_root_choice() {
        let config = GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        };
        let (_, first) = config.startup(&mut config.rng()).unwrap();
        let (_, second) = config.startup(&mut config.rng()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lenient_startup_falls_back() {
        let config = missing_words();
        let (_, root) = config.startup(&mut config.rng()).unwrap();
        assert_eq!(root.text(), "silkworm");
    }

    #[test]
    fn strict_startup_aborts() {
        let config = GameConfig {
            strict: true,
            ..missing_words()
        };
        assert!(config.startup(&mut config.rng()).is_err());
    }
}
