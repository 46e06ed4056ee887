//! Per-letter feedback
//!
//! Every guessed letter receives exactly one of three statuses. The derived
//! ordering (`Absent < Present < Correct`) is the priority used when several
//! readings of the same letter are merged into a single keyboard hint.

use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// The letter does not occur in the secret (or every occurrence is
    /// already accounted for by other positions of the guess)
    Absent,
    /// The letter occurs in the secret, but at another position
    Present,
    /// The letter is at the right position
    Correct,
}

impl LetterStatus {
    /// All statuses from lowest to highest priority
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Symbol used for this status in the share grid
    ///
    /// # Examples
    /// ```
    /// use rottawordle::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::Correct.symbol(), '🟩');
    /// assert_eq!(LetterStatus::Present.symbol(), '🟨');
    /// assert_eq!(LetterStatus::Absent.symbol(), '⬛');
    /// ```
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Lowercase name, as used for styling hooks
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::Absent);
        assert_eq!(
            LetterStatus::ALL.iter().max(),
            Some(&LetterStatus::Correct)
        );
    }

    #[test]
    fn symbols_are_distinct() {
        let symbols: Vec<char> = LetterStatus::ALL.iter().map(|s| s.symbol()).collect();
        assert_ne!(symbols[0], symbols[1]);
        assert_ne!(symbols[1], symbols[2]);
        assert_ne!(symbols[0], symbols[2]);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(LetterStatus::Present.to_string(), "present");
        assert!(LetterStatus::Correct.is_correct());
        assert!(!LetterStatus::Absent.is_correct());
    }
}
