//! Core domain types for the puzzle
//!
//! Letters, words and the guess evaluator. Everything here is pure: no I/O
//! and no mutable state beyond local values.

mod alphabet;
mod evaluate;
mod status;
mod word;

pub use alphabet::{Alphabet, AlphabetError, DEFAULT_LETTERS, normalize};
pub use evaluate::{Guess, evaluate};
pub use status::LetterStatus;
pub use word::{Word, WordError};
