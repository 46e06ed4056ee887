//! Game configuration
//!
//! The secret word, attempt budget and recognized alphabet. Values come from
//! the command line or environment (see `main.rs`) and are validated here.

use crate::core::{Alphabet, AlphabetError, Word, WordError};
use thiserror::Error;

/// Secret word of the original game
pub const DEFAULT_SECRET: &str = "ALTSU";

/// Attempts per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest attempt budget a round may have
pub const MAX_ATTEMPTS_LIMIT: usize = 100;

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
    #[error("invalid secret word: {0}")]
    Secret(#[from] WordError),
    #[error("at least one attempt is required")]
    NoAttempts,
    #[error("at most {limit} attempts are allowed, got {0}", limit = MAX_ATTEMPTS_LIMIT)]
    TooManyAttempts(usize),
}

/// Validated settings for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    secret: Word,
    max_attempts: usize,
    alphabet: Alphabet,
}

impl GameConfig {
    /// Build a configuration, validating the secret against the alphabet
    ///
    /// # Errors
    /// Returns `ConfigError` if the alphabet is empty or malformed, the secret
    /// contains letters outside the alphabet, or `max_attempts` is zero or
    /// above [`MAX_ATTEMPTS_LIMIT`].
    ///
    /// # Examples
    /// ```
    /// use rottawordle::config::GameConfig;
    ///
    /// let config = GameConfig::new("kissa", 6, "abcdefghijklmnopqrstuvwxyzåäö").unwrap();
    /// assert_eq!(config.word_length(), 5);
    ///
    /// assert!(GameConfig::new("kissa", 0, "abcdefghijklmnopqrstuvwxyz").is_err());
    /// assert!(GameConfig::new("kissa", 6, "abc").is_err());
    /// ```
    pub fn new(secret: &str, max_attempts: usize, alphabet: &str) -> Result<Self, ConfigError> {
        let alphabet = Alphabet::new(alphabet)?;
        let secret = Word::parse(secret.trim(), &alphabet)?;

        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::TooManyAttempts(max_attempts));
        }

        Ok(Self {
            secret,
            max_attempts,
            alphabet,
        })
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Length every guess must have
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        // Safe: the default secret only uses letters of the default alphabet
        let secret = Word::from_letters(DEFAULT_SECRET.chars()).expect("default secret is valid");

        Self {
            secret,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            alphabet: Alphabet::default(),
        }
    }
}
