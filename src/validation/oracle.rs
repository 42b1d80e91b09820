//! Dictionary oracles
//!
//! Defines the `DictionaryOracle` trait and a word-list implementation.

use crate::core::normalize;
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{DICTIONARY, WordSourceError};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Language tag of the bundled dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a word is a real word in a given language
pub trait DictionaryOracle {
    /// Returns true if `word` is recognized in `language`
    fn is_real(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_real(&self, word: &str, language: &str) -> bool {
        (**self).is_real(word, language)
    }
}

/// Oracle backed by an in-memory word list for a single language
#[derive(Debug, Clone)]
pub struct WordListOracle {
    language: String,
    words: FxHashSet<String>,
}

impl WordListOracle {
    /// Build an oracle from any list of words
    ///
    /// Entries are normalized; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validation::{DictionaryOracle, WordListOracle};
    ///
    /// let oracle = WordListOracle::new("en", ["Silent", "listen"]);
    /// assert!(oracle.is_real("silent", "en"));
    /// assert!(!oracle.is_real("silent", "fr"));
    /// assert!(!oracle.is_real("lsten", "en"));
    /// ```
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Oracle over the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY.iter().copied())
    }

    /// Load an oracle from a newline-delimited word file
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Io` if the file cannot be read, or
    /// `WordSourceError::Empty` if it holds no words.
    pub fn load<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| WordSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if words.is_empty() {
            return Err(WordSourceError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(path = %path.display(), count = words.len(), "loaded dictionary");
        Ok(Self::new(language, words))
    }

    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of distinct words known to the oracle
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the known words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl DictionaryOracle for WordListOracle {
    fn is_real(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}
