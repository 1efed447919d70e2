//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, colored tiles after
//! each accepted guess.

use crate::game::{GameError, GuessEngine, MAX_ATTEMPTS, Statistics};
use crate::output::{write_board, write_instructions, write_outcome, write_statistics};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// Commands: `help`, `new` (abandon the round), `quit`. Everything else is
/// submitted as a guess.
///
/// # Errors
///
/// Returns an error on I/O failure or if a new round cannot be started.
pub fn run_simple<R, I, O>(
    engine: &mut GuessEngine<'_, R>,
    stats: &mut Statistics,
    mut input: I,
    mut output: O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════╗")?;
    writeln!(output, "║                  JORDLE                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════╝\n")?;
    write_instructions(&mut output)?;
    writeln!(output, "Commands: 'help', 'new' for a new word, 'quit' to exit\n")?;

    loop {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", engine.attempts_used() + 1);
        let Some(line) = get_user_input(&mut input, &mut output, &prompt)? else {
            writeln!(output)?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                writeln!(output, "\nThanks for playing!")?;
                return Ok(());
            }
            "help" | "?" => {
                write_instructions(&mut output)?;
                continue;
            }
            "new" => {
                engine.reset()?;
                writeln!(output, "\nNew game started!\n")?;
                continue;
            }
            _ => {}
        }

        match engine.submit_guess(&line) {
            Ok(_) => {
                writeln!(output)?;
                write_board(&mut output, engine.history())?;
                writeln!(output)?;
            }
            Err(err @ GameError::InvalidGuess(_)) => {
                writeln!(output, "{}", err.to_string().red())?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        if let Some(outcome) = engine.take_outcome() {
            stats.record(&outcome);
            write_outcome(&mut output, &outcome, engine.history())?;
            write_statistics(&mut output, stats)?;

            let answer = get_user_input(&mut input, &mut output, "Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase();
            if !matches!(answer.as_str(), "yes" | "y") {
                writeln!(output, "\nThanks for playing!")?;
                return Ok(());
            }
            engine.reset()?;
            writeln!(output, "\nNew game started!\n")?;
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{RoundStatus, WordBank};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn bank() -> WordBank {
        let words = |list: &[&str]| list.iter().map(|w| Word::new(w).unwrap()).collect::<Vec<_>>();
        WordBank::new(
            words(&["abbey"]),
            words(&["babes", "crane", "slate", "irate", "grate", "crate"]),
        )
        .unwrap()
    }

    fn play(script: &str) -> (String, Statistics, RoundStatus) {
        colored::control::set_override(false);
        let bank = bank();
        let mut engine = GuessEngine::new(&bank, StdRng::seed_from_u64(0)).unwrap();
        let mut stats = Statistics::default();
        let mut out = Vec::new();

        run_simple(&mut engine, &mut stats, Cursor::new(script), &mut out).unwrap();

        (String::from_utf8(out).unwrap(), stats, engine.status())
    }

    #[test]
    fn immediate_quit() {
        let (out, stats, status) = play("quit\n");
        assert!(out.contains("Thanks for playing!"));
        assert_eq!(stats.total_games, 0);
        assert_eq!(status, RoundStatus::InProgress);
    }

    #[test]
    fn end_of_input_stops() {
        let (_, stats, _) = play("crane\n");
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn win_records_statistics() {
        let (out, stats, status) = play("babes\n  ABBEY  \nno\n");
        assert!(out.contains("Congratulations! You've guessed the word!"));
        assert!(out.contains("Solved in 2 of 6 guesses"));
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
        assert_eq!(status, RoundStatus::Won);
    }

    #[test]
    fn invalid_guesses_are_reported_and_not_counted() {
        let (out, _, _) = play("abbe\nab1ey\nzebra\nquit\n");
        assert!(out.contains("Invalid guess: guess must be exactly 5 letters"));
        assert!(out.contains("Invalid guess: guess may only contain the letters a-z"));
        assert!(out.contains("Invalid guess: not in word list"));
        assert_eq!(out.matches("Guess 1/6").count(), 4);
    }

    #[test]
    fn loss_reveals_word_and_replay_starts_new_round() {
        let script = "babes\ncrane\nslate\nirate\ngrate\ncrate\nyes\nabbey\nno\n";
        let (out, stats, _) = play(script);
        assert!(out.contains("Game over. The word was ABBEY."));
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn new_command_abandons_round_without_recording() {
        let (out, stats, status) = play("crane\nnew\nquit\n");
        assert!(out.contains("New game started!"));
        assert_eq!(stats.total_games, 0);
        assert_eq!(status, RoundStatus::InProgress);
    }
}
