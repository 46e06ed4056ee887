//! Game session state machine
//!
//! A [`GameSession`] owns the guess history, the letters typed so far and the
//! outcome. It is the only place where any of those change.

use super::hints::{KeyHints, hint_for};
use super::input::{Effect, InputEvent};
use super::summary::encode;
use crate::config::GameConfig;
use crate::core::{Alphabet, Guess, LetterStatus, Word};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in progress"),
            Self::Won => f.write_str("won"),
            Self::Lost => f.write_str("lost"),
        }
    }
}

/// Why a typed character was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("'{0}' is not a recognized letter")]
    NotInAlphabet(char),
    #[error("the guess already has {0} letters")]
    EntryFull(usize),
}

/// Rejected game operations
///
/// None of these change the session. Front-ends decide what to show with
/// [`GameError::is_user_visible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("the guess must have {expected} letters")]
    IncompleteGuess { expected: usize, got: usize },
    #[error("all {0} attempts have been used")]
    AttemptsExhausted(usize),
    #[error("the game is already {0}")]
    Finished(Outcome),
}

impl GameError {
    /// True for errors the player should be told about
    ///
    /// Invalid keystrokes and input after the round ended are ignored quietly.
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        matches!(self, Self::IncompleteGuess { .. })
    }
}

/// One round of the puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    alphabet: Alphabet,
    max_attempts: usize,
    history: Vec<Guess>,
    pending: Vec<char>,
    outcome: Outcome,
}

impl GameSession {
    /// Start a fresh round from `config`
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            secret: config.secret().clone(),
            alphabet: config.alphabet().clone(),
            max_attempts: config.max_attempts(),
            history: Vec::new(),
            pending: Vec::with_capacity(config.word_length()),
            outcome: Outcome::InProgress,
        }
    }

    /// Type a letter into the pending entry
    ///
    /// Returns the normalized letter that was added.
    ///
    /// # Errors
    /// - `Finished` once the round is over
    /// - `InvalidInput` for characters outside the alphabet or a full entry
    pub fn append_letter(&mut self, ch: char) -> Result<char, GameError> {
        self.ensure_in_progress()?;

        let Some(letter) = self.alphabet.accept(ch) else {
            trace!(%ch, "ignoring character outside the alphabet");
            return Err(InvalidInput::NotInAlphabet(ch).into());
        };
        if self.pending.len() >= self.word_length() {
            trace!(%letter, "ignoring letter, entry is full");
            return Err(InvalidInput::EntryFull(self.word_length()).into());
        }

        self.pending.push(letter);
        debug!(%letter, entry = %self.pending_text(), "letter typed");
        Ok(letter)
    }

    /// Remove the last typed letter
    ///
    /// Returns the removed letter, or `None` if the entry was empty.
    ///
    /// # Errors
    /// Returns `Finished` once the round is over.
    pub fn delete_letter(&mut self) -> Result<Option<char>, GameError> {
        self.ensure_in_progress()?;

        let removed = self.pending.pop();
        if let Some(letter) = removed {
            debug!(%letter, entry = %self.pending_text(), "letter deleted");
        }
        Ok(removed)
    }

    /// Submit the pending entry as a guess
    ///
    /// On success the guess is evaluated, appended to the history, the entry
    /// is cleared and the outcome is updated.
    ///
    /// # Errors
    /// - `Finished` once the round is over
    /// - `IncompleteGuess` if the entry is shorter than the secret
    /// - `AttemptsExhausted` if every attempt has been used
    pub fn submit(&mut self) -> Result<&Guess, GameError> {
        self.ensure_in_progress()?;

        if self.pending.len() != self.word_length() {
            return Err(GameError::IncompleteGuess {
                expected: self.word_length(),
                got: self.pending.len(),
            });
        }
        if self.history.len() >= self.max_attempts {
            return Err(GameError::AttemptsExhausted(self.max_attempts));
        }

        // Safe: the entry is full and every letter passed the alphabet
        let word = Word::from_letters(std::mem::take(&mut self.pending))
            .expect("full entry is a valid word");
        let guess = Guess::new(word, &self.secret);
        debug!(
            guess = %guess.word(),
            attempt = self.history.len() + 1,
            "guess submitted"
        );

        self.outcome = if guess.is_solved() {
            Outcome::Won
        } else if self.history.len() + 1 >= self.max_attempts {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        self.history.push(guess);

        if self.outcome.is_over() {
            info!(outcome = %self.outcome, attempts = self.history.len(), "round finished");
        }

        Ok(&self.history[self.history.len() - 1])
    }

    /// Feed one input event into the matching operation
    ///
    /// This is the single entry point front-ends use for keystrokes.
    ///
    /// # Errors
    /// Returns whatever the underlying operation rejected with.
    pub fn dispatch(&mut self, event: InputEvent, config: &GameConfig) -> Result<Effect, GameError> {
        match event {
            InputEvent::Letter(ch) => self.append_letter(ch).map(Effect::Typed),
            InputEvent::Delete => self.delete_letter().map(Effect::Deleted),
            InputEvent::Submit => {
                let statuses = self.submit()?.statuses().to_vec();
                Ok(Effect::Submitted {
                    statuses,
                    outcome: self.outcome,
                })
            }
            InputEvent::Reset => {
                self.reset(config);
                Ok(Effect::Reset)
            }
        }
    }

    /// Replace this session with a fresh one
    ///
    /// Allowed in any state; the previous history is discarded.
    pub fn reset(&mut self, config: &GameConfig) {
        info!(
            previous = %self.outcome,
            attempts = self.history.len(),
            "session reset"
        );
        *self = Self::new(config);
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.outcome.is_over() {
            trace!(outcome = %self.outcome, "input after the round ended");
            return Err(GameError::Finished(self.outcome));
        }
        Ok(())
    }

    /// Letters typed so far
    #[inline]
    #[must_use]
    pub fn pending_entry(&self) -> &[char] {
        &self.pending
    }

    #[must_use]
    pub fn pending_text(&self) -> String {
        self.pending.iter().collect()
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The secret word
    ///
    /// Front-ends should only reveal it once the round is lost.
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// Keyboard hint for one letter
    #[must_use]
    pub fn hint_for(&self, letter: char) -> Option<LetterStatus> {
        hint_for(letter, &self.history)
    }

    /// Keyboard hints for every letter of the alphabet
    #[must_use]
    pub fn key_hints(&self) -> KeyHints {
        KeyHints::compute(&self.alphabet, &self.history)
    }

    /// Symbol grid of the guesses so far
    #[must_use]
    pub fn summary(&self) -> String {
        encode(&self.history)
    }
}
