//! Tracing setup
//!
//! `RUST_LOG` overrides the default level for every target.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// No subscriber; used by the TUI so output cannot corrupt the screen
    Off,
    /// Warnings and errors on stderr
    Stderr,
    /// Everything from `info` up, appended to a file
    File(PathBuf),
}

/// Install the global tracing subscriber
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => {
            // A subscriber installed earlier wins; the error only says so
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            Ok(())
        }
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            // Same as above: a second init is ignored
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            Ok(())
        }
    }
}

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_target_installs_nothing() {
        assert!(init(&LogTarget::Off).is_ok());
    }

    #[test]
    fn second_init_keeps_first_subscriber() {
        assert!(init(&LogTarget::Stderr).is_ok());
        assert!(init(&LogTarget::Stderr).is_ok());
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let target = LogTarget::File(PathBuf::from("/nonexistent/word_scramble/game.log"));
        assert!(init(&target).is_err());
    }
}
