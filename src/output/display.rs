//! Display functions for the line-based front-ends

use super::formatters::{guess_row, key, pending_row};
use crate::game::{GameSession, Outcome, share_text, status_message};
use crate::keyboard::{Key, layout};
use colored::Colorize;

/// Render the board: submitted guesses, the row being typed, empty rows
#[must_use]
pub fn board_lines(session: &GameSession) -> Vec<String> {
    let mut lines: Vec<String> = session.history().iter().map(guess_row).collect();

    if session.outcome() == Outcome::InProgress {
        lines.push(pending_row(session.pending_entry(), session.word_length()));
    }
    while lines.len() < session.max_attempts() {
        lines.push(pending_row(&[], session.word_length()));
    }

    lines
}

/// Render the keyboard with every key coloured by its hint
#[must_use]
pub fn keyboard_lines(session: &GameSession) -> Vec<String> {
    let hints = session.key_hints();
    layout(session.alphabet())
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|k| match k {
                    Key::Letter(letter) => key(k, hints.get(letter)),
                    _ => key(k, None),
                })
                .collect::<String>()
        })
        .collect()
}

/// Letters the guesses have ruled out, if any
#[must_use]
pub fn ruled_out_line(session: &GameSession) -> Option<String> {
    let letters: Vec<String> = session.key_hints().ruled_out().map(String::from).collect();
    if letters.is_empty() {
        None
    } else {
        Some(format!("Not in the word: {}", letters.join(" ")))
    }
}

/// Print the board followed by the keyboard
pub fn print_board(session: &GameSession) {
    println!();
    for line in board_lines(session) {
        println!("  {line}");
    }
    println!();
    for line in keyboard_lines(session) {
        println!("  {line}");
    }
    if let Some(line) = ruled_out_line(session) {
        println!("\n  {}", line.bright_black());
    }
    println!();
}

/// Print the end-of-round message and the share text
pub fn print_outcome(session: &GameSession) {
    let Some(message) = status_message(session) else {
        println!(
            "{}",
            format!(
                "{} of {} attempts remaining",
                session.attempts_remaining(),
                session.max_attempts()
            )
            .bright_black()
        );
        return;
    };

    match session.outcome() {
        Outcome::Won => println!("{}", message.green().bold()),
        _ => println!("{}", message.red().bold()),
    }
    println!("\n{}\n", share_text(session));
}
