//! TUI rendering with ratatui
//!
//! Board, keyboard and popups for the game screen.

use super::app::{App, MessageStyle, Popup};
use crate::core::{Guess, LetterStatus};
use crate::game::{GAME_TITLE, GameSession, Outcome, share_text, status_message};
use crate::keyboard::{Key, layout};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const WELCOME_TEXT: &str = "We do not collect any data.";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let session = &app.session;
    let board = board_text(session);
    let keyboard = keyboard_text(session);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Min(height_of(board.len())),       // Board
            Constraint::Length(height_of(keyboard.len())), // Keyboard
            Constraint::Length(3),                         // Message
            Constraint::Length(1),                         // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_lines(f, board, " Board ", chunks[1]);
    render_lines(f, keyboard, " Keyboard ", chunks[2]);
    render_message(f, app, chunks[3]);
    render_help(f, chunks[4]);

    match app.popup {
        Some(Popup::Welcome) => render_welcome(f),
        Some(Popup::RoundOver) => render_round_over(f, session),
        None => {}
    }
}

/// Rows needed for `lines` inside a bordered block
fn height_of(lines: usize) -> u16 {
    u16::try_from(lines + 2).unwrap_or(u16::MAX)
}

/// Colours of a tile or key with the given status
#[must_use]
pub fn status_style(status: Option<LetterStatus>) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => style.bg(Color::Green).fg(Color::Black),
        Some(LetterStatus::Present) => style.bg(Color::Yellow).fg(Color::Black),
        Some(LetterStatus::Absent) => style.bg(Color::DarkGray).fg(Color::Gray),
        None => style.fg(Color::White),
    }
}

fn guess_line(guess: &Guess) -> Line<'static> {
    spaced(
        guess
            .tiles()
            .map(|(letter, status)| Span::styled(format!(" {letter} "), status_style(Some(status))))
            .collect(),
    )
}

fn entry_line(entry: &[char], word_length: usize) -> Line<'static> {
    let placeholder = Style::default().fg(Color::DarkGray);
    spaced(
        (0..word_length)
            .map(|i| match entry.get(i) {
                Some(letter) => Span::styled(format!(" {letter} "), status_style(None)),
                None => Span::styled(" _ ", placeholder),
            })
            .collect(),
    )
}

fn spaced(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut line = Vec::with_capacity(spans.len() * 2);
    for (i, span) in spans.into_iter().enumerate() {
        if i > 0 {
            line.push(Span::raw(" "));
        }
        line.push(span);
    }
    Line::from(line)
}

/// Board rows separated by blank lines, one row per attempt
#[must_use]
pub fn board_text(session: &GameSession) -> Vec<Line<'static>> {
    let mut rows: Vec<Line> = session.history().iter().map(guess_line).collect();
    if session.outcome() == Outcome::InProgress {
        rows.push(entry_line(session.pending_entry(), session.word_length()));
    }
    while rows.len() < session.max_attempts() {
        rows.push(entry_line(&[], session.word_length()));
    }

    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(row);
    }
    lines
}

/// Keyboard rows with every letter coloured by its hint
#[must_use]
pub fn keyboard_text(session: &GameSession) -> Vec<Line<'static>> {
    let hints = session.key_hints();
    layout(session.alphabet())
        .into_iter()
        .map(|row| {
            spaced(
                row.into_iter()
                    .map(|key| {
                        let style = match key {
                            Key::Letter(letter) => status_style(hints.get(letter)),
                            Key::Enter | Key::Back => Style::default().fg(Color::Cyan),
                        };
                        Span::styled(format!(" {} ", key.label()), style)
                    })
                    .collect(),
            )
        })
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("🟩 {} 🟨", GAME_TITLE.to_uppercase()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_lines(f: &mut Frame, lines: Vec<Line<'static>>, title: &str, area: Rect) {
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let color = match message.style {
                MessageStyle::Info => Color::Cyan,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (
                message.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            format!(
                "{} of {} attempts remaining",
                app.session.attempts_remaining(),
                app.session.max_attempts()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Type letters | Enter: Submit | Backspace: Delete | Ctrl-R: New Round | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_welcome(f: &mut Frame) {
    let content = vec![
        Line::from(WELCOME_TEXT),
        Line::default(),
        Line::styled("Press any key to start", Style::default().fg(Color::DarkGray)),
    ];
    render_popup(f, content, format!(" {GAME_TITLE} "), Color::Cyan);
}

fn render_round_over(f: &mut Frame, session: &GameSession) {
    let (title, color) = match session.outcome() {
        Outcome::Won => (" 🎉 CONGRATULATIONS! 🎉 ", Color::Green),
        _ => (" Game Over ", Color::Red),
    };

    let mut content = Vec::new();
    if let Some(message) = status_message(session) {
        content.push(Line::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        content.push(Line::default());
    }
    content.extend(share_text(session).lines().map(|line| Line::from(line.to_string())));
    content.push(Line::default());
    content.push(Line::styled(
        "Enter: Close | Ctrl-R: New Round",
        Style::default().fg(Color::DarkGray),
    ));

    render_popup(f, content, title.to_string(), color);
}

fn render_popup(f: &mut Frame, content: Vec<Line<'static>>, title: String, color: Color) {
    let height = height_of(content.len());
    let area = centered_rect(40, height, f.area());

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rectangle of `width` columns and `height` rows centered in `area`,
/// shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn played(guesses: &[&str]) -> App {
        let mut app = App::new(GameConfig::default());
        app.popup = None;
        for guess in guesses {
            for ch in guess.chars() {
                app.session.append_letter(ch).unwrap();
            }
            app.session.submit().unwrap();
        }
        app
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn board_text_has_a_row_per_attempt() {
        let app = played(&["stall"]);
        let lines = board_text(&app.session);
        assert_eq!(lines.len(), 11);
        assert_eq!(line_text(&lines[0]), " S   T   A   L   L ");
        assert_eq!(line_text(&lines[2]), " _   _   _   _   _ ");
        assert_eq!(lines[0].spans[0].style, status_style(Some(LetterStatus::Present)));
        assert_eq!(lines[0].spans[8].style, status_style(Some(LetterStatus::Absent)));
    }

    #[test]
    fn keyboard_text_colours_letters_by_hint() {
        let app = played(&["stall"]);
        let lines = keyboard_text(&app.session);
        assert_eq!(lines.len(), 3);

        let style_of = |label: &str| {
            lines
                .iter()
                .flat_map(|line| line.spans.iter())
                .find(|span| span.content.trim() == label)
                .map(|span| span.style)
        };
        assert_eq!(style_of("S"), Some(status_style(Some(LetterStatus::Present))));
        assert_eq!(style_of("Q"), Some(status_style(None)));
        assert_eq!(style_of("ENTER"), Some(Style::default().fg(Color::Cyan)));
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 20, area), area);
    }

    #[test]
    fn welcome_popup_is_drawn() {
        let app = App::new(GameConfig::default());
        assert!(screen(&app).contains(WELCOME_TEXT));
    }

    #[test]
    fn round_over_popup_shows_message() {
        let mut app = played(&["stall", "altsu"]);
        app.popup = Some(Popup::RoundOver);
        let screen = screen(&app);
        assert!(screen.contains("You won!"));
        assert!(screen.contains("Ctrl-R"));
    }
}
