//! Game state machine and the views derived from it
//!
//! [`GameSession`] is the only mutable state. Keyboard hints and the share
//! summary are pure functions over its history.

mod hints;
mod input;
mod session;
mod summary;

pub use hints::{KeyHints, hint_for};
pub use input::{Effect, InputEvent};
pub use session::{GameError, GameSession, InvalidInput, Outcome};
pub use summary::{GAME_TITLE, encode, share_text, status_message};
