//! The set of letters a game recognizes
//!
//! Letters are stored uppercase, in the order they were configured, so the
//! keyboard and hint views can iterate them deterministically.

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Letters of the original game: the Latin alphabet plus Finnish/Swedish vowels
pub const DEFAULT_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÅÄÖ";

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one letter")]
    Empty,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

/// Normalize a character to the canonical (uppercase) case
///
/// Returns `None` for characters whose uppercase form is not a single
/// character (e.g. `ß`), since they cannot occupy a single tile.
///
/// # Examples
/// ```
/// use rottawordle::core::normalize;
///
/// assert_eq!(normalize('a'), Some('A'));
/// assert_eq!(normalize('ä'), Some('Ä'));
/// assert_eq!(normalize('ß'), None);
/// ```
#[must_use]
pub fn normalize(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    let first = upper.next()?;
    if upper.next().is_some() {
        None
    } else {
        Some(first)
    }
}

/// An ordered set of recognized uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    lookup: FxHashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of letters
    ///
    /// Letters are uppercased and de-duplicated; whitespace is ignored.
    ///
    /// # Errors
    /// Returns `AlphabetError` if no letters remain or if a character is not
    /// alphabetic.
    ///
    /// # Examples
    /// ```
    /// use rottawordle::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("abcA b").unwrap();
    /// assert_eq!(alphabet.letters(), &['A', 'B', 'C']);
    /// assert!(Alphabet::new("ab1").is_err());
    /// ```
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let mut ordered = Vec::new();
        let mut lookup = FxHashSet::default();

        for ch in letters.chars().filter(|c| !c.is_whitespace()) {
            let letter = normalize(ch)
                .filter(|c| c.is_alphabetic())
                .ok_or(AlphabetError::NotALetter(ch))?;
            if lookup.insert(letter) {
                ordered.push(letter);
            }
        }

        if ordered.is_empty() {
            return Err(AlphabetError::Empty);
        }

        Ok(Self {
            letters: ordered,
            lookup,
        })
    }

    /// Letters in configured order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
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

    /// Check whether an already-normalized letter is recognized
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.lookup.contains(&letter)
    }

    /// Normalize a typed character and accept it only if it is recognized
    #[must_use]
    pub fn accept(&self, ch: char) -> Option<char> {
        normalize(ch).filter(|&c| self.contains(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: DEFAULT_LETTERS.chars().collect(),
            lookup: DEFAULT_LETTERS.chars().collect(),
        }
    }
}
