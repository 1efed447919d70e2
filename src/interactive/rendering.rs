//! TUI rendering with ratatui
//!
//! Board, keyboard, statistics and message panels for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, RoundStatus};
use crate::output::INSTRUCTIONS;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];
const DISTRIBUTION_WIDTH: usize = 16;

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 3), // Board
            Constraint::Min(5),                              // Keyboard
        ])
        .split(main_chunks[0]);

    render_board(f, app, left[0]);
    render_keyboard(f, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    render_statistics(f, app, right[0]);
    render_messages(f, app, right[1]);

    render_status(f, app, chunks[2]);

    if app.show_help {
        render_help(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("JORDLE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn feedback_style(feedback: Option<Feedback>) -> Style {
    match feedback {
        Some(Feedback::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Feedback::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
    .add_modifier(Modifier::BOLD)
}

fn tile(letter: Option<u8>, feedback: Option<Feedback>) -> Span<'static> {
    let text = letter.map_or_else(
        || " _ ".to_string(),
        |l| format!(" {} ", char::from(l.to_ascii_uppercase())),
    );
    Span::styled(text, feedback_style(feedback))
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let history = app.engine.history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = if let Some(record) = history.get(row) {
            record
                .guess
                .letters()
                .iter()
                .zip(record.pattern.symbols())
                .flat_map(|(&letter, &feedback)| {
                    [tile(Some(letter), Some(feedback)), Span::raw(" ")]
                })
                .collect()
        } else if row == history.len() && app.engine.status() == RoundStatus::InProgress {
            let typed = app.input.as_bytes();
            (0..WORD_LENGTH)
                .flat_map(|i| [tile(typed.get(i).copied(), None), Span::raw(" ")])
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.engine.status() {
        RoundStatus::InProgress => format!(
            " Guess {}/{MAX_ATTEMPTS} ",
            app.engine.attempts_used() + 1
        ),
        RoundStatus::Won => " Solved! ".to_string(),
        RoundStatus::Lost => format!(
            " The word was {} ",
            app.engine.secret().text().to_uppercase()
        ),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let states = app.letter_states();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let state = states[usize::from(letter - b'a')];
                    [tile(Some(letter), state), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_statistics<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let stats = &app.stats;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![
        Line::from(format!("Total Games:    {}", stats.total_games)),
        Line::from(format!("Games Won:      {}", stats.games_won)),
        Line::from(format!("Win Percentage: {:.1}%", stats.win_percentage())),
        Line::from(format!("Current Streak: {}", stats.current_streak)),
        Line::from(format!("Max Streak:     {}", stats.max_streak)),
        Line::from(""),
    ];

    let last_win = app
        .last_outcome
        .as_ref()
        .filter(|o| o.won)
        .map(|o| o.attempts);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let color = if last_win == Some(i + 1) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled(distribution_bar(count, most), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Game Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

/// Bar for one row of the guess distribution, scaled against the largest row
///
/// Empty for a zero count; any win gets at least one block.
fn distribution_bar(count: usize, most: usize) -> String {
    if count == 0 || most == 0 {
        return String::new();
    }
    "█".repeat((count * DISTRIBUTION_WIDTH / most).max(1))
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let help_text = if app.engine.status().is_over() {
        "Enter: New Word | ?: Help | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Ctrl+N: New Word | ?: Help | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(70, 50, f.area());

    let mut lines: Vec<Line> = INSTRUCTIONS.iter().map(|&l| Line::from(l)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    let help = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to Play Jordle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GuessEngine, WordBank};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_board_and_reveal() {
        let bank = WordBank::new(words(&["abbey"]), words(&["crane"])).unwrap();
        let mut app = App::new(GuessEngine::new(&bank, StdRng::seed_from_u64(0)).unwrap());
        for _ in 0..MAX_ATTEMPTS {
            "crane".chars().for_each(|c| app.push_letter(c));
            app.submit();
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("JORDLE"));
        assert!(text.contains("The word was ABBEY"));
        assert!(text.contains(" C "));
        assert!(text.contains("Total Games:    1"));
    }

    #[test]
    fn distribution_bar_is_empty_without_wins() {
        assert_eq!(distribution_bar(0, 0), "");
        assert_eq!(distribution_bar(0, 5), "");
        assert_eq!(distribution_bar(1, 100), "█");
        assert_eq!(distribution_bar(5, 5).chars().count(), DISTRIBUTION_WIDTH);
    }

    #[test]
    fn fresh_session_draws_no_distribution_bars() {
        let bank = WordBank::new(words(&["abbey"]), Vec::new()).unwrap();
        let app = App::new(GuessEngine::new(&bank, StdRng::seed_from_u64(0)).unwrap());

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(!buffer_text(&terminal).contains('█'));
    }

    #[test]
    fn draws_help_overlay() {
        let bank = WordBank::new(words(&["abbey"]), Vec::new()).unwrap();
        let mut app = App::new(GuessEngine::new(&bank, StdRng::seed_from_u64(0)).unwrap());
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("How to Play Jordle"));
    }
}
