//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackPattern, Word};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: FeedbackPattern) -> String {
    pattern.to_emoji()
}

/// One letter as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn tile(letter: u8, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black().bold(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, pattern: FeedbackPattern) -> String {
    guess
        .letters()
        .iter()
        .zip(pattern.symbols())
        .map(|(&letter, &feedback)| tile(letter, feedback).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_absent() {
        let pattern = FeedbackPattern::new([Feedback::Absent; 5]);
        assert_eq!(pattern_to_emoji(pattern), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn pattern_to_emoji_win() {
        assert_eq!(pattern_to_emoji(FeedbackPattern::WIN), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("babes").unwrap();
        let secret = Word::new("abbey").unwrap();
        let row = colored_row(&guess, FeedbackPattern::calculate(&guess, &secret));
        assert_eq!(row, " B  A  B  E  S ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
