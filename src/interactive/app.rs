//! TUI application state and logic
//!
//! The board is drawn straight from the engine's history; the only state kept
//! here is the row being typed, the message log and the session statistics.

use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{GameError, GuessEngine, RoundOutcome, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, R: Rng> {
    pub engine: GuessEngine<'a, R>,
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub last_outcome: Option<RoundOutcome>,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(engine: GuessEngine<'a, R>) -> Self {
        let mut app = Self {
            engine,
            input: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            last_outcome: None,
            show_help: false,
            should_quit: false,
        };
        app.add_message("Try guessing a word!", MessageStyle::Info);
        app.add_message("Press ? for instructions", MessageStyle::Info);
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::F(2) => self.new_game(),
            KeyCode::F(1) | KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl => self.push_letter(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Add a letter to the row being typed
    ///
    /// Only `a-z` is accepted, at most five letters, and only while the round
    /// is still running.
    pub fn push_letter(&mut self, c: char) {
        if self.engine.status().is_over() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input.len() < WORD_LENGTH {
            self.input.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the typed row, or start a new game if the round is over
    pub fn submit(&mut self) {
        if self.engine.status().is_over() {
            self.new_game();
            return;
        }

        if self.input.len() != WORD_LENGTH {
            self.add_message("Please enter a 5-letter word.", MessageStyle::Error);
            return;
        }

        match self.engine.submit_guess(&self.input) {
            Ok(_) => {
                self.input.clear();
                if let Some(outcome) = self.engine.take_outcome() {
                    self.finish_round(outcome);
                }
            }
            Err(GameError::InvalidGuess(reason)) => {
                let text = format!("{}: {reason}", self.input.to_uppercase());
                self.add_message(&text, MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        self.stats.record(&outcome);
        if outcome.won {
            self.add_message(
                "Congratulations! You've guessed the word!",
                MessageStyle::Success,
            );
        } else {
            let text = format!(
                "Game over. The word was {}.",
                outcome.secret.text().to_uppercase()
            );
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press Enter for a new word", MessageStyle::Info);
        self.last_outcome = Some(outcome);
    }

    /// Abandon the current round and draw a new word
    pub fn new_game(&mut self) {
        match self.engine.reset() {
            Ok(()) => {
                self.input.clear();
                self.last_outcome = None;
                self.messages.clear();
                self.add_message("Try guessing a word!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Best feedback seen so far for each letter a-z
    ///
    /// `Correct` beats `Present` beats `Absent`; `None` means not yet guessed.
    #[must_use]
    pub fn letter_states(&self) -> [Option<Feedback>; 26] {
        let mut states = [None; 26];
        for record in self.engine.history() {
            for (&letter, &feedback) in record.guess.letters().iter().zip(record.pattern.symbols()) {
                let slot = &mut states[usize::from(letter - b'a')];
                *slot = (*slot).max(Some(feedback));
            }
        }
        states
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<Statistics> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(app.stats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{RoundStatus, WordBank};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> WordBank {
        let words = |list: &[&str]| list.iter().map(|w| Word::new(w).unwrap()).collect::<Vec<_>>();
        WordBank::new(
            words(&["abbey"]),
            words(&["babes", "crane", "slate", "irate", "grate", "crate"]),
        )
        .unwrap()
    }

    fn app(bank: &WordBank) -> App<'_, StdRng> {
        App::new(GuessEngine::new(bank, StdRng::seed_from_u64(0)).unwrap())
    }

    fn press(app: &mut App<'_, StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_, StdRng>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_to_five_letters() {
        let bank = bank();
        let mut app = app(&bank);

        for c in "CR4ANES".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input, "crane");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "cran");
    }

    #[test]
    fn short_row_is_not_submitted() {
        let bank = bank();
        let mut app = app(&bank);

        type_word(&mut app, "abb");
        assert_eq!(app.engine.attempts_used(), 0);
        assert_eq!(app.input, "abb");
        assert_eq!(
            app.messages.last().unwrap().text,
            "Please enter a 5-letter word."
        );
    }

    #[test]
    fn unknown_word_keeps_input() {
        let bank = bank();
        let mut app = app(&bank);

        type_word(&mut app, "zebra");
        assert_eq!(app.engine.attempts_used(), 0);
        assert_eq!(app.input, "zebra");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "ZEBRA: not in word list");
    }

    #[test]
    fn winning_records_stats_and_enter_restarts() {
        let bank = bank();
        let mut app = app(&bank);

        type_word(&mut app, "babes");
        type_word(&mut app, "abbey");
        assert_eq!(app.engine.status(), RoundStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.last_outcome.as_ref().is_some_and(|o| o.won));

        // Letters are ignored once the round is over
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.status(), RoundStatus::InProgress);
        assert_eq!(app.engine.attempts_used(), 0);
        assert!(app.last_outcome.is_none());
    }

    #[test]
    fn losing_reveals_secret() {
        let bank = bank();
        let mut app = app(&bank);

        for word in ["babes", "crane", "slate", "irate", "grate", "crate"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.engine.status(), RoundStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Game over. The word was ABBEY.")
        );
    }

    #[test]
    fn ctrl_n_abandons_round_without_recording() {
        let bank = bank();
        let mut app = app(&bank);

        type_word(&mut app, "crane");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.engine.attempts_used(), 0);
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn help_toggle_and_quit() {
        let bank = bank();
        let mut app = app(&bank);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn letter_states_keep_best_feedback() {
        let bank = bank();
        let mut app = app(&bank);

        type_word(&mut app, "babes");
        let states = app.letter_states();
        assert_eq!(states[usize::from(b'b' - b'a')], Some(Feedback::Correct));
        assert_eq!(states[usize::from(b'a' - b'a')], Some(Feedback::Present));
        assert_eq!(states[usize::from(b's' - b'a')], Some(Feedback::Absent));
        assert_eq!(states[usize::from(b'z' - b'a')], None);
    }

    #[test]
    fn messages_are_capped() {
        let bank = bank();
        let mut app = app(&bank);

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
