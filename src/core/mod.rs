//! Core domain types for the word game
//!
//! Root words, candidate normalization, letter bookkeeping, and the round
//! state machine. Nothing here touches the terminal.

mod candidate;
mod root;
mod round;

pub use candidate::{can_spell, fits_counts, letter_count, letter_counts, normalize};
pub use root::{FALLBACK_ROOT, RootWord, RootWordError};
pub use round::{RoundState, ScorePolicy};
