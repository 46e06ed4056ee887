//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Effect, GameSession, InputEvent, Outcome, status_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub session: GameSession,
    pub message: Option<Message>,
    pub popup: Option<Popup>,
    pub should_quit: bool,
}

/// Overlay shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Welcome,
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let session = GameSession::new(&config);
        Self {
            config,
            session,
            message: None,
            popup: Some(Popup::Welcome),
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.popup, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Char('r')) if ctrl => self.apply(InputEvent::Reset),
            (Some(Popup::Welcome), _) => self.popup = None,
            (Some(Popup::RoundOver), KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) => {
                self.popup = None;
            }
            (Some(Popup::RoundOver), _) => {}
            (None, KeyCode::Esc) => self.should_quit = true,
            (None, code) => {
                if let Some(event) = input_event(code, ctrl || key.modifiers.contains(KeyModifiers::ALT)) {
                    self.apply(event);
                }
            }
        }
    }

    /// Dispatch an event and update the message line
    pub fn apply(&mut self, event: InputEvent) {
        match self.session.dispatch(event, &self.config) {
            Ok(Effect::Submitted { outcome, .. }) if outcome.is_over() => {
                let style = if outcome == Outcome::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                if let Some(text) = status_message(&self.session) {
                    self.set_message(&text, style);
                }
                self.popup = Some(Popup::RoundOver);
            }
            Ok(Effect::Reset) => {
                self.popup = None;
                self.set_message("New round started!", MessageStyle::Info);
            }
            Ok(_) => self.message = None,
            Err(err) if err.is_user_visible() => self.set_message(&err.to_string(), MessageStyle::Error),
            Err(err) => debug!(%err, "input ignored"),
        }
    }

    pub fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }
}

/// Map a terminal key to a game event
///
/// Keys pressed with Ctrl or Alt are shortcuts, never letters.
fn input_event(code: KeyCode, modified: bool) -> Option<InputEvent> {
    match code {
        KeyCode::Enter => InputEvent::from_key("Enter"),
        KeyCode::Backspace => InputEvent::from_key("Backspace"),
        KeyCode::Char(ch) if !modified => Some(InputEvent::Letter(ch)),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
