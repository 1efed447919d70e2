//! Display functions for game screens and command results

use super::formatters::{colored_row, create_progress_bar, pattern_to_emoji};
use crate::commands::{CheckReport, ScoreResult};
use crate::game::{GuessRecord, MAX_ATTEMPTS, RoundOutcome, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// How-to-play text shared by the line and TUI front ends
pub const INSTRUCTIONS: &[&str] = &[
    "Guess the 5-letter word within 6 attempts.",
    "After each guess, the color of the tiles will change:",
    "  Green:  correct letter in the correct position",
    "  Yellow: correct letter in the wrong position",
    "  Grey:   letter not in the word",
    "A letter is only marked yellow as many times as it is still unmatched in the word.",
    "Try to guess the word in as few attempts as possible!",
];

/// Write the how-to-play text
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_instructions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "How to Play".bright_green().bold())?;
    for line in INSTRUCTIONS {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Write every guess of the round as colored tiles
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, history: &[GuessRecord]) -> io::Result<()> {
    for (i, record) in history.iter().enumerate() {
        writeln!(
            out,
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            colored_row(&record.guess, record.pattern)
        )?;
    }
    Ok(())
}

/// Write the end-of-round message
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &RoundOutcome,
    history: &[GuessRecord],
) -> io::Result<()> {
    writeln!(out)?;
    if outcome.won {
        writeln!(
            out,
            "{}",
            "Congratulations! You've guessed the word!".bright_green().bold()
        )?;
        writeln!(
            out,
            "Solved in {} of {MAX_ATTEMPTS} {}",
            outcome.attempts,
            if outcome.attempts == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(
            out,
            "{} The word was {}.",
            "Game over.".red().bold(),
            outcome.secret.text().to_uppercase().bright_yellow().bold()
        )?;
    }

    for record in history {
        writeln!(out, "  {}", pattern_to_emoji(record.pattern))?;
    }
    writeln!(out)
}

/// Write the session statistics with a guess distribution chart
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "{}", "Game Statistics".bright_cyan().bold())?;
    writeln!(out, "  Total Games:    {}", stats.total_games)?;
    writeln!(out, "  Games Won:      {}", stats.games_won)?;
    writeln!(out, "  Win Percentage: {:.1}%", stats.win_percentage())?;
    writeln!(out, "  Current Streak: {}", stats.current_streak)?;
    writeln!(out, "  Max Streak:     {}", stats.max_streak)?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "  {}: {} {count}", i + 1, bar.green())?;
    }
    writeln!(out)
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", colored_row(&result.guess, result.pattern));
    println!("  {}", pattern_to_emoji(result.pattern));
    println!("  {}", result.pattern.to_code());
}

/// Print the result of the word list audit
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Candidate secrets:  {}", report.answer_count);
    println!("  Acceptable guesses: {}", report.allowed_count);
    println!("  Scored pairs:       {}", report.pairs_checked);

    print_issue_list("Invalid lines in candidate list", &report.rejected_answers);
    print_issue_list("Invalid lines in guess list", &report.rejected_allowed);
    print_issue_list("Duplicate candidates", &report.duplicate_answers);
    print_issue_list("Duplicate guesses", &report.duplicate_allowed);
    print_issue_list(
        "Candidates missing from guess list (accepted anyway)",
        &report.answers_not_allowed,
    );
    print_issue_list("Scoring violations", &report.scorer_violations);

    println!();
    if report.is_clean() {
        println!("{}", "✅ Word lists look good".green().bold());
    } else {
        println!(
            "{}",
            format!("⚠️  {} issues found", report.issue_count())
                .yellow()
                .bold()
        );
    }
}

fn print_issue_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n  {} ({})", title.yellow().bold(), items.len());
    for item in items.iter().take(10) {
        println!("    • {item}");
    }
    if items.len() > 10 {
        println!("    ...and {} more", items.len() - 10);
    }
}
