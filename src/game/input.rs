//! Input events
//!
//! Every keystroke or on-screen key press becomes one [`InputEvent`], which
//! [`GameSession::dispatch`](super::GameSession::dispatch) routes to the
//! matching state-machine operation.

use super::session::Outcome;
use crate::core::LetterStatus;

/// A single player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Submit,
    Reset,
}

impl InputEvent {
    /// Map a key name to an event
    ///
    /// `"Enter"` submits, `"Backspace"` deletes, any single character types a
    /// letter (the session decides whether it is recognized). Other keys have
    /// no meaning for the game.
    ///
    /// # Examples
    /// ```
    /// use rottawordle::game::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Submit));
    /// assert_eq!(InputEvent::from_key("ä"), Some(InputEvent::Letter('ä')));
    /// assert_eq!(InputEvent::from_key("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_key(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Self::Letter(ch)),
                    _ => None,
                }
            }
        }
    }
}

/// What an accepted event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A letter (normalized) was added to the entry
    Typed(char),
    /// The last letter was removed, if there was one
    Deleted(Option<char>),
    /// A guess was evaluated
    Submitted {
        statuses: Vec<LetterStatus>,
        outcome: Outcome,
    },
    /// A fresh session replaced the old one
    Reset,
}
