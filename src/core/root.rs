//! Root word representation
//!
//! The root word is the letter pool for a round. It is normalized once on
//! construction and never changes afterwards.

use super::candidate::normalize;
use std::fmt;
use thiserror::Error;

/// Root word used when no word source is available
pub const FALLBACK_ROOT: &str = "silkworm";

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootWordError {
    #[error("root word must contain at least one letter")]
    Empty,
}

/// A non-empty, lower-cased root word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

impl RootWord {
    /// Create a root word from raw text
    ///
    /// The text is lower-cased and trimmed the same way candidates are.
    ///
    /// # Errors
    /// Returns `RootWordError::Empty` if nothing remains after normalization.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("  SilkWorm\n").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, RootWordError> {
        let text = normalize(text.as_ref());
        if text.is_empty() {
            return Err(RootWordError::Empty);
        }
        Ok(Self(text))
    }

    /// The fixed root word used when the word source cannot be loaded
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_ROOT.to_string())
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Never true for a constructed root word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RootWord {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_word_normalized() {
        let root = RootWord::new("LISTEN").unwrap();
        assert_eq!(root.text(), "listen");
        assert_eq!(root.len(), 6);
    }

    #[test]
    fn root_word_rejects_blank() {
        assert_eq!(RootWord::new(""), Err(RootWordError::Empty));
        assert_eq!(RootWord::new(" \n\t"), Err(RootWordError::Empty));
    }

    #[test]
    fn fallback_is_silkworm() {
        let root = RootWord::fallback();
        assert_eq!(root.text(), "silkworm");
        assert!(!root.is_empty());
        assert_eq!(RootWord::default(), root);
    }

    #[test]
    fn root_word_display() {
        let root = RootWord::new("apple").unwrap();
        assert_eq!(format!("{root}"), "apple");
    }
}
