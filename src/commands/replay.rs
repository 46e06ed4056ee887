//! Replay command
//!
//! Plays a list of guesses against the configured secret without any
//! interaction and returns the finished (or partial) session.

use crate::config::GameConfig;
use crate::game::{Effect, GameError, GameSession, InputEvent};
use thiserror::Error;
use tracing::debug;

/// A guess that could not be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("guess {number} ({guess}) could not be played: {source}")]
pub struct ReplayError {
    /// 1-based position of the guess
    pub number: usize,
    pub guess: String,
    #[source]
    pub source: GameError,
}

/// Type `text` into the session as fresh keystrokes and submit it
///
/// Any half-typed entry is cleared first. Characters the alphabet does not
/// recognize are skipped like ignored keystrokes, so a guess containing one
/// ends up short and is rejected as incomplete.
///
/// # Errors
/// Returns the `GameError` of the first operation that was not ignorable.
pub fn enter_guess(
    session: &mut GameSession,
    config: &GameConfig,
    text: &str,
) -> Result<Effect, GameError> {
    while session.dispatch(InputEvent::Delete, config)? != Effect::Deleted(None) {}

    for ch in text.chars() {
        match session.dispatch(InputEvent::Letter(ch), config) {
            Ok(_) => {}
            Err(GameError::InvalidInput(reason)) => debug!(%reason, "keystroke ignored"),
            Err(err) => return Err(err),
        }
    }

    session.dispatch(InputEvent::Submit, config)
}

/// Play `guesses` in order against the configured secret
///
/// # Errors
/// Returns `ReplayError` for the first guess that is incomplete or arrives
/// after the round has ended.
///
/// # Examples
/// ```
/// use rottawordle::commands::replay;
/// use rottawordle::config::GameConfig;
/// use rottawordle::game::Outcome;
///
/// let session = replay(&GameConfig::default(), &["stall", "altsu"]).unwrap();
/// assert_eq!(session.outcome(), Outcome::Won);
/// ```
pub fn replay<S: AsRef<str>>(config: &GameConfig, guesses: &[S]) -> Result<GameSession, ReplayError> {
    let mut session = GameSession::new(config);

    for (i, guess) in guesses.iter().enumerate() {
        let guess = guess.as_ref();
        enter_guess(&mut session, config, guess).map_err(|source| ReplayError {
            number: i + 1,
            guess: guess.to_string(),
            source,
        })?;
    }

    Ok(session)
}
