//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//! Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, RoundState};
//! use word_scramble::validation::{RejectionReason, Verdict, WordListOracle};
//!
//! let oracle = WordListOracle::new("en", ["silk", "worm"]);
//! let round = RoundState::new(RootWord::new("silkworm").unwrap());
//!
//! let (round, verdict) = round.submit("silk", &oracle, "en");
//! assert_eq!(verdict, Some(Verdict::Accept { score_delta: 4 }));
//!
//! let (round, verdict) = round.submit("silk", &oracle, "en");
//! assert_eq!(verdict, Some(Verdict::Reject(RejectionReason::AlreadyUsed)));
//! assert_eq!(round.score(), 4);
//! ```

// Core domain types
pub mod core;

// Word validation pipeline
pub mod validation;

// Word lists
pub mod wordlists;

// Session wiring and configuration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
