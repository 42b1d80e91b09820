//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::Session;
use crate::output::formatters::history_line;
use crate::validation::{DictionaryOracle, Verdict};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<O: DictionaryOracle>(session: &mut Session<O>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, stdin.lock(), stdout.lock())
}

/// Play the line-based game over arbitrary input and output
///
/// Each line is a word to submit, or a command:
/// `:new` for a new root word, `:words` to list found words, `:quit` to stop.
/// The game also ends when input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<O, R, W>(session: &mut Session<O>, input: R, mut out: W) -> io::Result<()>
where
    O: DictionaryOracle,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(out, "Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit\n")?;

    print_round_header(session, &mut out)?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                session.new_round();
                writeln!(out, "\n🔄 New word!\n")?;
                print_round_header(session, &mut out)?;
            }
            ":words" | ":w" => print_words(session, &mut out)?,
            _ => match session.submit(&line) {
                Some(Verdict::Accept { score_delta }) => {
                    writeln!(
                        out,
                        "{} +{score_delta} (score: {})",
                        "✓".green().bold(),
                        session.round().score().to_string().bright_cyan().bold()
                    )?;
                }
                Some(Verdict::Reject(reason)) => {
                    writeln!(
                        out,
                        "{} {}",
                        format!("❌ {}:", reason.title()).red().bold(),
                        reason.message(session.round().root())
                    )?;
                }
                None => {}
            },
        }

        prompt(&mut out)?;
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Final score: {}\n",
        session.round().score().to_string().bright_yellow().bold()
    )?;
    out.flush()
}

fn print_round_header<O: DictionaryOracle, W: Write>(
    session: &Session<O>,
    out: &mut W,
) -> io::Result<()> {
    let round = session.round();
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Root word #{}: {}    Score: {}",
        round.rounds_started(),
        round.root().text().to_uppercase().bright_yellow().bold(),
        round.score()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn print_words<O: DictionaryOracle, W: Write>(
    session: &Session<O>,
    out: &mut W,
) -> io::Result<()> {
    let round = session.round();
    if round.used_words().is_empty() {
        return writeln!(out, "No words yet.");
    }

    writeln!(out, "Words this round ({}):", round.used_words().len())?;
    for word in round.used_words() {
        writeln!(out, "  {}", history_line(word))?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "word: ")?;
    out.flush()
}
