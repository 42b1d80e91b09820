//! Root word analysis command
//!
//! Finds every dictionary word a fresh round on a root would accept.

use crate::core::{RootWord, RootWordError, fits_counts, letter_count, letter_counts};
use crate::validation::{Verdict, WordListOracle, validate};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root: String,
    /// Accepted words, longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every word
    pub max_score: usize,
    /// Word count per length
    pub by_length: BTreeMap<usize, usize>,
}

/// All words a fresh round on `root` would accept, longest first
///
/// Dictionary words are prefiltered on letter counts, then each survivor
/// goes through the full validation pipeline with an empty history.
#[must_use]
pub fn find_solutions(root: &RootWord, oracle: &WordListOracle, language: &str) -> Vec<String> {
    let pool = letter_counts(root.text());
    let dictionary: Vec<&str> = oracle.words().collect();

    let mut words: Vec<String> = dictionary
        .par_iter()
        .filter(|&&word| fits_counts(word, &pool))
        .filter(|&&word| {
            matches!(
                validate(word, root, &[], oracle, language),
                Some(Verdict::Accept { .. })
            )
        })
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words
}

/// Analyze a root word against the dictionary
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn analyze_root(
    root: &str,
    oracle: &WordListOracle,
    language: &str,
) -> Result<AnalysisResult, RootWordError> {
    let root = RootWord::new(root)?;
    let words = find_solutions(&root, oracle, language);

    let mut by_length = BTreeMap::new();
    for word in &words {
        *by_length.entry(letter_count(word)).or_insert(0) += 1;
    }
    let max_score = words.iter().map(|w| letter_count(w)).sum();

    Ok(AnalysisResult {
        root: root.text().to_string(),
        words,
        max_score,
        by_length,
    })
}
