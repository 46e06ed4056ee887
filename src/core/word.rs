//! Word representation
//!
//! A Word is a non-empty sequence of uppercase letters from an [`Alphabet`].
//! Secrets and submitted guesses are both Words.

use super::alphabet::{Alphabet, normalize};
use std::fmt;
use thiserror::Error;

/// A word made of recognized uppercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("'{0}' is not in the alphabet")]
    InvalidLetter(char),
}

impl Word {
    /// Create a Word from text, checking every letter against `alphabet`
    ///
    /// Input is case-insensitive; the stored letters are uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains a character the
    /// alphabet does not recognize.
    ///
    /// # Examples
    /// ```
    /// use rottawordle::core::{Alphabet, Word};
    ///
    /// let alphabet = Alphabet::default();
    /// let word = Word::parse("Altsu", &alphabet).unwrap();
    /// assert_eq!(word.text(), "ALTSU");
    ///
    /// assert!(Word::parse("", &alphabet).is_err());
    /// assert!(Word::parse("sh0rt", &alphabet).is_err());
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, WordError> {
        let letters = text
            .chars()
            .map(|ch| alphabet.accept(ch).ok_or(WordError::InvalidLetter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_letters(letters)
    }

    /// Create a Word from letters that were already accepted by an alphabet
    ///
    /// Letters are normalized again so that the uppercase invariant holds
    /// even for callers that skipped the alphabet.
    ///
    /// # Errors
    /// Returns `WordError::Empty` for an empty sequence and
    /// `WordError::InvalidLetter` for characters with no single uppercase form.
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Result<Self, WordError> {
        let letters = letters
            .into_iter()
            .map(|ch| normalize(ch).ok_or(WordError::InvalidLetter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if letters.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self { letters })
    }

    /// Letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The word as an uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.letters {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::parse(text, &Alphabet::default()).unwrap()
    }

    #[test]
    fn parse_normalizes_to_uppercase() {
        assert_eq!(word("altsu").text(), "ALTSU");
        assert_eq!(word("AlTsU").text(), "ALTSU");
        assert_eq!(word("öljy").text(), "ÖLJY");
    }

    #[test]
    fn parse_rejects_unknown_letters() {
        let alphabet = Alphabet::default();
        assert_eq!(Word::parse("", &alphabet), Err(WordError::Empty));
        assert_eq!(
            Word::parse("ab3de", &alphabet),
            Err(WordError::InvalidLetter('3'))
        );
        assert_eq!(
            Word::parse("ab de", &alphabet),
            Err(WordError::InvalidLetter(' '))
        );
        assert_eq!(
            Word::parse("über", &alphabet),
            Err(WordError::InvalidLetter('ü'))
        );
    }

    #[test]
    fn parse_respects_custom_alphabet() {
        let alphabet = Alphabet::new("abc").unwrap();
        assert!(Word::parse("cab", &alphabet).is_ok());
        assert_eq!(
            Word::parse("bad", &alphabet),
            Err(WordError::InvalidLetter('d'))
        );
    }

    #[test]
    fn from_letters_uppercases() {
        let word = Word::from_letters(['s', 'P', 'e']).unwrap();
        assert_eq!(word.letters(), &['S', 'P', 'E']);
        assert_eq!(Word::from_letters([]), Err(WordError::Empty));
    }

    #[test]
    fn display_and_equality() {
        assert_eq!(format!("{}", word("stall")), "STALL");
        assert_eq!(word("stall"), word("STALL"));
        assert_ne!(word("stall"), word("altsu"));
        assert_eq!(word("stall").len(), 5);
        assert!(!word("stall").is_empty());
    }
}
