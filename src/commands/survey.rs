//! Survey command - root word evaluation
//!
//! Analyzes every root word (or a limited subset) and reports how many
//! words each one yields.

use super::analyze::find_solutions;
use crate::core::letter_count;
use crate::validation::WordListOracle;
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Findable words for a single root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootStats {
    pub root: String,
    pub solutions: usize,
    pub max_score: usize,
}

/// Statistics from surveying root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Per-root results, most solutions first
    pub roots: Vec<RootStats>,
    pub average_solutions: f64,
    /// Roots nothing in the dictionary can be built from
    pub barren: Vec<String>,
    pub total_time: Duration,
}

impl SurveyStatistics {
    #[must_use]
    pub fn richest(&self) -> Option<&RootStats> {
        self.roots.first()
    }

    #[must_use]
    pub fn poorest(&self) -> Option<&RootStats> {
        self.roots.last()
    }
}

/// Survey root words from `source`, up to `limit`
pub fn run_survey(
    source: &WordSource,
    oracle: &WordListOracle,
    language: &str,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots = &source.words()[..limit.unwrap_or(source.len()).min(source.len())];

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(roots.len());

    for (idx, root) in roots.iter().enumerate() {
        let words = find_solutions(root, oracle, language);
        results.push(RootStats {
            root: root.text().to_string(),
            solutions: words.len(),
            max_score: words.iter().map(|w| letter_count(w)).sum(),
        });

        if idx % 10 == 0 {
            pb.set_message(root.text().to_string());
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    tracing::info!(roots = results.len(), "survey finished");

    summarize(results, total_start.elapsed())
}

fn summarize(mut roots: Vec<RootStats>, total_time: Duration) -> SurveyStatistics {
    roots.sort_by(|a, b| {
        b.solutions
            .cmp(&a.solutions)
            .then_with(|| a.root.cmp(&b.root))
    });

    let total_roots = roots.len();
    let average_solutions = if total_roots == 0 {
        0.0
    } else {
        roots.iter().map(|r| r.solutions).sum::<usize>() as f64 / total_roots as f64
    };
    let barren = roots
        .iter()
        .filter(|r| r.solutions == 0)
        .map(|r| r.root.clone())
        .collect();

    SurveyStatistics {
        total_roots,
        roots,
        average_solutions,
        barren,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;

    fn source(words: &[&str]) -> WordSource {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_survey_{}.txt",
            std::process::id(),
            words.join("_")
        ));
        std::fs::write(&path, words.join("\n")).unwrap();
        let source = WordSource::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        source
    }

    fn oracle() -> WordListOracle {
        WordListOracle::new("en", ["silent", "listen", "tin", "silk", "worm"])
    }

    #[test]
    fn survey_ranks_roots() {
        let stats = run_survey(&source(&["silkworm", "listen", "qqq"]), &oracle(), "en", None);

        assert_eq!(stats.total_roots, 3);
        assert_eq!(
            stats.richest(),
            Some(&RootStats {
                root: "listen".to_string(),
                solutions: 3,
                max_score: 15,
            })
        );
        assert_eq!(stats.poorest().map(|r| r.root.as_str()), Some("qqq"));
        assert_eq!(stats.barren, ["qqq"]);
        assert!((stats.average_solutions - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn survey_respects_limit() {
        let stats = run_survey(&source(&["silkworm", "listen"]), &oracle(), "en", Some(1));
        assert_eq!(stats.total_roots, 1);
        assert_eq!(stats.roots[0].root, "silkworm");
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(Vec::new(), Duration::ZERO);
        assert_eq!(stats.total_roots, 0);
        assert!(stats.richest().is_none());
        assert!(stats.average_solutions.abs() < f64::EPSILON);
    }

    #[test]
    fn survey_fallback_source() {
        let stats = run_survey(&WordSource::fallback(), &oracle(), "en", Some(10));
        assert_eq!(stats.total_roots, 1);
        assert_eq!(stats.roots[0].root, RootWord::fallback().text());
        assert_eq!(stats.roots[0].solutions, 2);
    }
}
