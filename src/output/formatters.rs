//! Formatting utilities for terminal output

use crate::core::{Guess, LetterStatus};
use crate::keyboard::Key;
use colored::{ColoredString, Colorize};

/// One letter tile coloured by its status
#[must_use]
pub fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .tiles()
        .map(|(letter, status)| tile(letter, Some(status)).to_string())
        .collect()
}

/// The row being typed, padded with placeholders up to `word_length`
#[must_use]
pub fn pending_row(entry: &[char], word_length: usize) -> String {
    (0..word_length)
        .map(|i| match entry.get(i) {
            Some(&letter) => tile(letter, None).to_string(),
            None => " _ ".dimmed().to_string(),
        })
        .collect()
}

/// A keyboard key coloured by its hint
#[must_use]
pub fn key(key: Key, hint: Option<LetterStatus>) -> String {
    match key {
        Key::Letter(letter) => match hint {
            Some(status) => tile(letter, Some(status)).to_string(),
            None => format!(" {letter} "),
        },
        other => format!(" {} ", other.label()).dimmed().to_string(),
    }
}

/// One sample tile per status, lowest priority first
#[must_use]
pub fn legend() -> String {
    LetterStatus::ALL
        .iter()
        .map(|&status| format!("{} {}", tile(status.symbol(), Some(status)), status.name()))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Word};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn guess_row_plain_text() {
        plain();
        let alphabet = Alphabet::default();
        let secret = Word::parse("altsu", &alphabet).unwrap();
        let guess = Guess::new(Word::parse("stall", &alphabet).unwrap(), &secret);
        assert_eq!(guess_row(&guess), " S  T  A  L  L ");
    }

    #[test]
    fn pending_row_pads_with_placeholders() {
        plain();
        assert_eq!(pending_row(&['A', 'L'], 5), " A  L  _  _  _ ");
        assert_eq!(pending_row(&[], 3), " _  _  _ ");
    }

    #[test]
    fn keys_render_labels() {
        plain();
        assert_eq!(key(Key::Letter('Ö'), None), " Ö ");
        assert_eq!(key(Key::Letter('Ö'), Some(LetterStatus::Absent)), " Ö ");
        assert_eq!(key(Key::Enter, None), " ENTER ");
    }

    #[test]
    fn legend_lists_every_status() {
        plain();
        assert_eq!(legend(), " ⬛  absent   🟨  present   🟩  correct");
    }
}
