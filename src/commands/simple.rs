//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: every line is typed and submitted as a
//! guess.

use super::replay::enter_guess;
use crate::config::GameConfig;
use crate::game::{GameError, GameSession, Outcome};
use crate::output::{legend, print_board, print_outcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Reset,
    Quit,
}

impl Command {
    /// Parse a trimmed input line; blank lines yield `None`
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" => None,
            ":q" | ":quit" | ":exit" => Some(Self::Quit),
            ":r" | ":reset" | ":new" => Some(Self::Reset),
            word => Some(Self::Guess(word.to_string())),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an I/O error if reading input or flushing output fails.
pub fn run_simple(config: &GameConfig) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Rottawordle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} attempts.",
        config.word_length(),
        config.max_attempts()
    );
    println!("Type a word and press Enter. Commands: ':reset' for a new round, ':quit' to exit.");
    println!("{}", legend());

    let mut session = GameSession::new(config);
    print_board(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(&session)?;
        let Some(line) = lines.next().transpose()? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            None => {}
            Some(Command::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(Command::Reset) => {
                session.reset(config);
                println!("\n🔄 New round started!");
                print_board(&session);
            }
            Some(Command::Guess(word)) => play_line(&mut session, config, &word),
        }
    }
}

/// Submit one typed line and print the result
fn play_line(session: &mut GameSession, config: &GameConfig, word: &str) {
    match enter_guess(session, config, word) {
        Ok(_) => {
            print_board(session);
            print_outcome(session);
            if session.outcome().is_over() {
                println!("Type ':reset' to play again or ':quit' to exit.");
            }
        }
        Err(err @ GameError::Finished(_)) => {
            println!("{} Type ':reset' to play again.", format!("The round is over ({err}).").yellow());
        }
        Err(err) if err.is_user_visible() => println!("{}", format!("❌ {err}").red()),
        Err(err) => tracing::warn!(%err, "guess rejected"),
    }
}

fn prompt(session: &GameSession) -> io::Result<()> {
    let label = match session.outcome() {
        Outcome::InProgress => format!("Guess {}/{}", session.history().len() + 1, session.max_attempts()),
        _ => "Command".to_string(),
    };
    print!("{label}: ");
    io::stdout().flush()
}
