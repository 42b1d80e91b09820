//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{AnalysisResult, CheckResult, SurveyStatistics};
use crate::core::letter_count;
use crate::validation::Verdict;
use colored::Colorize;

/// Print the verdict for each checked word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking against: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &result.entries {
        match (entry.verdict, &entry.alert) {
            (Some(Verdict::Accept { score_delta }), _) => {
                println!(
                    "  {} {:<16} {}",
                    "✓".green().bold(),
                    entry.word,
                    format!("+{score_delta}").green()
                );
            }
            (Some(Verdict::Reject(_)), Some((title, message))) => {
                println!(
                    "  {} {:<16} {} {}",
                    "✗".red().bold(),
                    entry.word,
                    format!("{title}:").red(),
                    message
                );
            }
            _ => println!("  {} (blank, ignored)", "·".bright_black()),
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} of {} accepted, score {}",
            result.accepted(),
            result.entries.len(),
            result.score
        )
        .bold()
    );
}

/// Print every word findable from a root, grouped by length
pub fn print_analysis_result(result: &AnalysisResult, show_words: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} words can be made", result.words.len());
    println!(
        "   Max score:   {}",
        result.max_score.to_string().bright_yellow()
    );

    let most = result.by_length.values().copied().max().unwrap_or(0);
    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for (&len, &count) in result.by_length.iter().rev() {
        println!(
            "   {} {} {count:4}",
            length_badge(len),
            create_progress_bar(count, most, 30).green()
        );
    }

    if show_words {
        for &len in result.by_length.keys().rev() {
            let words: Vec<&str> = result
                .words
                .iter()
                .filter(|w| letter_count(w) == len)
                .map(String::as_str)
                .collect();
            println!("\n{} {}", length_badge(len), words.join(" "));
        }
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Roots:".bright_cyan().bold());
    println!("   Roots surveyed:    {}", stats.total_roots);
    println!(
        "   Average words:     {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:        {:.2}s", stats.total_time.as_secs_f64());

    if let Some(best) = stats.richest() {
        println!(
            "   Richest:           {} ({} words, max score {})",
            best.root.green().bold(),
            best.solutions,
            best.max_score
        );
    }
    if let Some(worst) = stats.poorest() {
        println!(
            "   Poorest:           {} ({} words, max score {})",
            worst.root.yellow(),
            worst.solutions,
            worst.max_score
        );
    }

    let most = stats.richest().map_or(0, |r| r.solutions);
    println!("\n📈 {}", "Top roots:".bright_cyan().bold());
    for root in stats.roots.iter().take(10) {
        println!(
            "   {:<10} {} {:4}",
            root.root,
            create_progress_bar(root.solutions, most, 30).green(),
            root.solutions
        );
    }

    if !stats.barren.is_empty() {
        println!(
            "\n{} {}",
            "⚠ No words found for:".red().bold(),
            stats.barren.join(", ")
        );
    }
}
