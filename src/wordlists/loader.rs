//! Word list loading utilities
//!
//! Provides the root word source and the startup decision built on it.

use super::START_WORDS;
use crate::core::{RootWord, normalize};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a word list
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {path} contains no words")]
    Empty { path: PathBuf },

    #[error("no built-in dictionary for language '{language}'; pass a dictionary file")]
    NoDictionary { language: String },
}

/// Pool of root words to draw rounds from
///
/// Never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<RootWord>,
}

impl WordSource {
    /// Source over the root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let words: Vec<RootWord> = words_from_slice(START_WORDS);
        if words.is_empty() {
            return Self::fallback();
        }
        Self { words }
    }

    /// Source containing only the fallback root word
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: vec![RootWord::fallback()],
        }
    }

    /// Load words from a newline-delimited file
    ///
    /// Blank lines are skipped and entries are normalized.
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Io` if the file cannot be read, or
    /// `WordSourceError::Empty` if it holds no words.
    ///
    /// # Examples
    /// ```no_run
    /// use word_scramble::wordlists::WordSource;
    ///
    /// let source = WordSource::load("data/start.txt").unwrap();
    /// println!("Loaded {} root words", source.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
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

        tracing::info!(path = %path.display(), count = words.len(), "loaded root words");
        Ok(Self {
            words: words_from_lines(&words),
        })
    }

    /// Pick a root word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> RootWord {
        self.words
            .choose(rng)
            .cloned()
            .unwrap_or_else(RootWord::fallback)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[RootWord] {
        &self.words
    }

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
}

/// Outcome of preparing the first round
#[derive(Debug)]
pub enum Startup {
    /// A root word is ready
    Ready { source: WordSource, root: RootWord },
    /// No root word could be obtained
    Failed { reason: WordSourceError },
}

impl Startup {
    /// Draw the first root word from a loaded source, or record the failure
    pub fn resolve<R: Rng + ?Sized>(
        loaded: Result<WordSource, WordSourceError>,
        rng: &mut R,
    ) -> Self {
        match loaded {
            Ok(source) => {
                let root = source.choose(rng);
                Self::Ready { source, root }
            }
            Err(reason) => Self::Failed { reason },
        }
    }

    /// Continue with the fixed fallback root word if startup failed
    #[must_use]
    pub fn or_fallback(self) -> (WordSource, RootWord) {
        match self {
            Self::Ready { source, root } => (source, root),
            Self::Failed { reason } => {
                tracing::warn!(%reason, fallback = %RootWord::fallback(), "using fallback root word");
                (WordSource::fallback(), RootWord::fallback())
            }
        }
    }

    /// Propagate the failure instead of falling back
    ///
    /// # Errors
    ///
    /// Returns the load error if startup failed.
    pub fn or_abort(self) -> Result<(WordSource, RootWord), WordSourceError> {
        match self {
            Self::Ready { source, root } => Ok((source, root)),
            Self::Failed { reason } => Err(reason),
        }
    }
}

/// Load normalized, non-blank lines from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect();

    Ok(words)
}

/// Convert embedded string slice to root words, skipping blanks
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<RootWord> {
    slice.iter().filter_map(|&s| RootWord::new(s).ok()).collect()
}

fn words_from_lines(lines: &[String]) -> Vec<RootWord> {
    lines.iter().filter_map(|s| RootWord::new(s).ok()).collect()
}
