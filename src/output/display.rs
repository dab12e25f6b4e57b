//! Display functions for command results

use super::formatters::{history_line, length_badge, spaced_root};
use crate::commands::CheckReport;
use crate::core::{Outcome, RoundState};
use colored::Colorize;

/// Describe an outcome for the terminal
///
/// Returns `None` for silent rejections (blank input).
#[must_use]
pub fn format_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Accepted { word, points } => Some(format!(
            "{} {} {}",
            "✓".green().bold(),
            word.bright_white().bold(),
            format!("+{points}").green()
        )),
        Outcome::Rejected(reason) if reason.is_silent() => None,
        Outcome::Rejected(reason) => Some(format!(
            "{} {} {}",
            "✗".red().bold(),
            reason.title().red().bold(),
            format!("- {}", reason.message()).bright_black()
        )),
    }
}

/// Header shown at the start of each round
#[must_use]
pub fn format_round_header(round: &RoundState) -> String {
    format!(
        "{}\n  Root word: {}\n{}",
        "─".repeat(60).cyan(),
        spaced_root(round.root_word()).bright_yellow().bold(),
        "─".repeat(60).cyan()
    )
}

/// Score line plus accepted words, most recent first
#[must_use]
pub fn format_round_summary(round: &RoundState) -> String {
    let mut out = format!(
        "Current root word score: {}",
        round.score().to_string().bright_cyan().bold()
    );
    for word in round.history() {
        out.push_str("\n  ");
        out.push_str(&history_line(word));
    }
    out
}

/// Print the result of checking a list of words
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Root word: {}", report.root.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for entry in &report.entries {
        let shown = entry.input.trim();
        match &entry.outcome {
            Outcome::Accepted { word, points } => println!(
                "  {} {:<16} {} {}",
                "✓".green().bold(),
                word,
                length_badge(word),
                format!("+{points}").green()
            ),
            Outcome::Rejected(reason) if reason.is_silent() => {
                println!("  {} {:<16} {}", "·".bright_black(), "", "ignored".bright_black());
            }
            Outcome::Rejected(reason) => println!(
                "  {} {:<16} {}",
                "✗".red().bold(),
                shown,
                reason.title().red()
            ),
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Score: {} ({} of {} words accepted)",
            report.score,
            report.accepted_count(),
            report.entries.len()
        )
        .bold()
    );
}

/// Print candidate root words
pub fn print_roots(roots: &[String]) {
    for root in roots {
        println!("{root}");
    }
    eprintln!("{} root words", roots.len());
}
