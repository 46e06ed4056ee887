//! Shareable result summary
//!
//! Each guess becomes one line of status symbols, so a finished round can be
//! shared without giving away the letters.

use super::session::{GameSession, Outcome};
use crate::core::Guess;

/// Title used in the share header
pub const GAME_TITLE: &str = "Rottawordle";

/// Encode the history as a grid of symbols, one line per guess
///
/// Lines are joined with `\n` (no trailing newline). Calling this before the
/// round ends gives the partial grid so far.
///
/// # Examples
/// ```
/// use rottawordle::core::{Alphabet, Guess, Word};
/// use rottawordle::game::encode;
///
/// let alphabet = Alphabet::default();
/// let secret = Word::parse("altsu", &alphabet).unwrap();
/// let history: Vec<Guess> = ["stall", "altsu"]
///     .iter()
///     .map(|g| Guess::new(Word::parse(g, &alphabet).unwrap(), &secret))
///     .collect();
///
/// assert_eq!(encode(&history), "🟨🟨🟨🟨⬛\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn encode(history: &[Guess]) -> String {
    history
        .iter()
        .map(|guess| guess.statuses().iter().map(|s| s.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header line plus grid, ready to paste
///
/// The header reads `Rottawordle 3/6`, or `Rottawordle X/6` for a lost round.
#[must_use]
pub fn share_text(session: &GameSession) -> String {
    let score = match session.outcome() {
        Outcome::Lost => "X".to_string(),
        _ => session.history().len().to_string(),
    };
    let header = format!("{GAME_TITLE} {score}/{}", session.max_attempts());

    if session.history().is_empty() {
        header
    } else {
        format!("{header}\n\n{}", encode(session.history()))
    }
}

/// Message shown under the board for a finished round
///
/// A lost round reveals the secret. Returns `None` while the round is running.
#[must_use]
pub fn status_message(session: &GameSession) -> Option<String> {
    match session.outcome() {
        Outcome::InProgress => None,
        Outcome::Won => Some("You won!".to_string()),
        Outcome::Lost => Some(format!(
            "Out of attempts. The word was {}",
            session.secret()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Alphabet, DEFAULT_LETTERS, Word};
    use proptest::prelude::*;

    fn play(config: &GameConfig, guesses: &[&str]) -> GameSession {
        let mut session = GameSession::new(config);
        for guess in guesses {
            for ch in guess.chars() {
                session.append_letter(ch).unwrap();
            }
            session.submit().unwrap();
        }
        session
    }

    #[test]
    fn empty_history_encodes_to_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn end_to_end_grid() {
        let session = play(&GameConfig::default(), &["stall", "altsu"]);
        let grid = encode(session.history());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 5);
        assert_eq!(lines[1], "🟩🟩🟩🟩🟩");
        assert!(!grid.ends_with('\n'));
    }

    #[test]
    fn encode_is_repeatable() {
        let session = play(&GameConfig::default(), &["stall", "kuuma", "altsu"]);
        assert_eq!(encode(session.history()), encode(session.history()));
        assert_eq!(session.summary(), encode(session.history()));
    }

    #[test]
    fn partial_grid_mid_game() {
        let session = play(&GameConfig::default(), &["stall"]);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(encode(session.history()), "🟨🟨🟨🟨⬛");
    }

    #[test]
    fn share_text_for_win() {
        let session = play(&GameConfig::default(), &["stall", "altsu"]);
        assert_eq!(
            share_text(&session),
            "Rottawordle 2/6\n\n🟨🟨🟨🟨⬛\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_for_loss() {
        let config = GameConfig::new("altsu", 1, DEFAULT_LETTERS).unwrap();
        let session = play(&config, &["kiosk"]);
        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(share_text(&session), "Rottawordle X/1\n\n⬛⬛⬛🟩⬛");
    }

    #[test]
    fn share_text_without_guesses_is_header_only() {
        let session = GameSession::new(&GameConfig::default());
        assert_eq!(share_text(&session), "Rottawordle 0/6");
    }

    #[test]
    fn status_messages() {
        let config = GameConfig::new("altsu", 1, DEFAULT_LETTERS).unwrap();
        assert_eq!(status_message(&GameSession::new(&config)), None);
        assert_eq!(
            status_message(&play(&config, &["altsu"])).as_deref(),
            Some("You won!")
        );
        assert_eq!(
            status_message(&play(&config, &["stall"])).as_deref(),
            Some("Out of attempts. The word was ALTSU")
        );
    }

    proptest! {
        #[test]
        fn one_line_per_guess(guesses in proptest::collection::vec("[a-eA-E]{4}", 0..6)) {
            let alphabet = Alphabet::default();
            let secret = Word::parse("abcd", &alphabet).unwrap();
            let history: Vec<Guess> = guesses
                .iter()
                .map(|g| Guess::new(Word::parse(g, &alphabet).unwrap(), &secret))
                .collect();

            let grid = encode(&history);
            prop_assert_eq!(grid.clone(), encode(&history));
            prop_assert_eq!(grid.lines().count(), history.len());
            for line in grid.lines() {
                prop_assert_eq!(line.chars().count(), 4);
            }
        }
    }
}
