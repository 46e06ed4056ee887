//! On-screen keyboard layout
//!
//! A Nordic QWERTY layout filtered to the configured alphabet. Letters of the
//! alphabet the layout does not know get an extra row, so every recognized
//! letter can be typed.

use crate::core::Alphabet;
use crate::game::InputEvent;

const TOP_ROW: &str = "QWERTYUIOPÅ";
const MIDDLE_ROW: &str = "ASDFGHJKLÖÄ";
const BOTTOM_ROW: &str = "ZXCVBNM";

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Back,
}

impl Key {
    /// Input event produced by pressing the key
    #[must_use]
    pub const fn event(self) -> InputEvent {
        match self {
            Self::Letter(ch) => InputEvent::Letter(ch),
            Self::Enter => InputEvent::Submit,
            Self::Back => InputEvent::Delete,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Back => "⌫".to_string(),
        }
    }
}

/// Rows of keys for `alphabet`, top to bottom
///
/// The last row always holds Enter and Back around the remaining letters.
///
/// # Examples
/// ```
/// use rottawordle::core::Alphabet;
/// use rottawordle::keyboard::{layout, Key};
///
/// let rows = layout(&Alphabet::default());
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[2].first(), Some(&Key::Enter));
/// assert_eq!(rows[2].last(), Some(&Key::Back));
/// ```
#[must_use]
pub fn layout(alphabet: &Alphabet) -> Vec<Vec<Key>> {
    let letters_of = |row: &str| -> Vec<Key> {
        row.chars()
            .filter(|&c| alphabet.contains(c))
            .map(Key::Letter)
            .collect()
    };

    let mut rows: Vec<Vec<Key>> = [TOP_ROW, MIDDLE_ROW]
        .iter()
        .map(|row| letters_of(row))
        .filter(|row| !row.is_empty())
        .collect();

    let known: String = [TOP_ROW, MIDDLE_ROW, BOTTOM_ROW].concat();
    let extra: Vec<Key> = alphabet
        .letters()
        .iter()
        .filter(|&&c| !known.contains(c))
        .map(|&c| Key::Letter(c))
        .collect();
    if !extra.is_empty() {
        rows.push(extra);
    }

    let mut bottom = vec![Key::Enter];
    bottom.extend(letters_of(BOTTOM_ROW));
    bottom.push(Key::Back);
    rows.push(bottom);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(row: &[Key]) -> String {
        row.iter()
            .filter_map(|k| match k {
                Key::Letter(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn default_layout_matches_nordic_keyboard() {
        let rows = layout(&Alphabet::default());
        assert_eq!(rows.len(), 3);
        assert_eq!(letters(&rows[0]), "QWERTYUIOPÅ");
        assert_eq!(letters(&rows[1]), "ASDFGHJKLÖÄ");
        assert_eq!(letters(&rows[2]), "ZXCVBNM");
    }

    #[test]
    fn every_alphabet_letter_has_a_key() {
        let alphabet = Alphabet::new("abcdefghijklmnopqrstuvwxyzñü").unwrap();
        let rows = layout(&alphabet);
        let all: String = rows.iter().map(|r| letters(r)).collect();
        for &letter in alphabet.letters() {
            assert!(all.contains(letter), "missing key for {letter}");
        }
        assert!(!all.contains('Å'));
        assert_eq!(letters(&rows[2]), "ÑÜ");
    }

    #[test]
    fn small_alphabet_drops_empty_rows() {
        let rows = layout(&Alphabet::new("zxy").unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(letters(&rows[0]), "Y");
        assert_eq!(rows[1], vec![Key::Enter, Key::Letter('Z'), Key::Letter('X'), Key::Back]);
    }

    #[test]
    fn keys_produce_events() {
        assert_eq!(Key::Letter('Å').event(), InputEvent::Letter('Å'));
        assert_eq!(Key::Enter.event(), InputEvent::Submit);
        assert_eq!(Key::Back.event(), InputEvent::Delete);
        assert_eq!(Key::Enter.label(), "ENTER");
    }
}
