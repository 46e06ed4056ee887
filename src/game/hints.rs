//! Keyboard hints
//!
//! The hint for a letter is the highest-priority status it has received in
//! any guess: `Correct` over `Present` over `Absent`. A letter can be `Absent`
//! at one position and `Correct` at another (in the same or another guess);
//! the `Correct` reading always wins. Hints are recomputed from the history
//! every time and never cached.

use crate::core::{Alphabet, Guess, LetterStatus, normalize};
use rustc_hash::FxHashMap;

/// Hint for one letter over the whole history
///
/// Returns `None` if the letter has never been guessed.
///
/// # Examples
/// ```
/// use rottawordle::core::{Alphabet, Guess, LetterStatus, Word};
/// use rottawordle::game::hint_for;
///
/// let alphabet = Alphabet::default();
/// let secret = Word::parse("altsu", &alphabet).unwrap();
/// let history = vec![Guess::new(Word::parse("stall", &alphabet).unwrap(), &secret)];
///
/// // The second L of STALL is absent, the first one present
/// assert_eq!(hint_for('l', &history), Some(LetterStatus::Present));
/// assert_eq!(hint_for('q', &history), None);
/// ```
#[must_use]
pub fn hint_for(letter: char, history: &[Guess]) -> Option<LetterStatus> {
    let letter = normalize(letter)?;
    history
        .iter()
        .flat_map(Guess::tiles)
        .filter(|&(ch, _)| ch == letter)
        .map(|(_, status)| status)
        .max()
}

/// Hints for every letter of an alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHints {
    order: Vec<char>,
    hints: FxHashMap<char, LetterStatus>,
}

impl KeyHints {
    /// Merge every reading in `history` into one hint per letter
    #[must_use]
    pub fn compute(alphabet: &Alphabet, history: &[Guess]) -> Self {
        let mut hints: FxHashMap<char, LetterStatus> = FxHashMap::default();
        for (letter, status) in history.iter().flat_map(Guess::tiles) {
            hints
                .entry(letter)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }

        Self {
            order: alphabet.letters().to_vec(),
            hints,
        }
    }

    /// Hint for a letter (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        normalize(letter).and_then(|l| self.hints.get(&l).copied())
    }

    /// Every alphabet letter with its hint, in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterStatus>)> + '_ {
        self.order.iter().map(|&l| (l, self.hints.get(&l).copied()))
    }

    /// Letters known to be absent from the secret
    pub fn ruled_out(&self) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(|(_, hint)| *hint == Some(LetterStatus::Absent))
            .map(|(letter, _)| letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use LetterStatus::{Absent, Correct, Present};

    fn history(secret: &str, guesses: &[&str]) -> Vec<Guess> {
        let alphabet = Alphabet::default();
        let secret = Word::parse(secret, &alphabet).unwrap();
        guesses
            .iter()
            .map(|g| Guess::new(Word::parse(g, &alphabet).unwrap(), &secret))
            .collect()
    }

    #[test]
    fn unseen_letter_has_no_hint() {
        let history = history("altsu", &["stall"]);
        assert_eq!(hint_for('Z', &history), None);
        assert_eq!(hint_for('A', &[]), None);
    }

    #[test]
    fn absent_in_same_guess_does_not_shadow_correct() {
        // HELLO: in LOLLY the first L is absent, the other two are correct
        let history = history("hello", &["lolly"]);
        assert_eq!(history[0].statuses()[0], Absent);
        assert_eq!(hint_for('L', &history), Some(Correct));
    }

    #[test]
    fn later_correct_overrides_earlier_absent() {
        // In STALL the second L is absent; later the L is confirmed correct
        let history = history("altsu", &["stall", "altsu"]);
        assert_eq!(hint_for('L', &history), Some(Correct));
    }

    #[test]
    fn earlier_correct_survives_later_present() {
        // A is correct in ABBEY, misplaced in BABES
        let history = history("altsu", &["abbey", "babes"]);
        assert_eq!(history[0].statuses()[0], Correct);
        assert_eq!(history[1].statuses()[1], Present);
        assert_eq!(hint_for('a', &history), Some(Correct));
    }

    #[test]
    fn present_beats_absent() {
        let history = history("altsu", &["stall"]);
        assert_eq!(hint_for('L', &history), Some(Present));
        assert_eq!(hint_for('S', &history), Some(Present));
    }

    #[test]
    fn absent_when_only_absent() {
        let history = history("altsu", &["bbbbb"]);
        assert_eq!(hint_for('B', &history), Some(Absent));
    }

    #[test]
    fn key_hints_match_hint_for() {
        let history = history("altsu", &["stall", "lolly", "kuuma"]);
        let hints = KeyHints::compute(&Alphabet::default(), &history);
        for (letter, hint) in hints.iter() {
            assert_eq!(hint, hint_for(letter, &history), "letter {letter}");
        }
        assert_eq!(hints.iter().count(), 29);
        assert_eq!(hints.get('u'), hint_for('U', &history));
    }

    #[test]
    fn ruled_out_lists_absent_letters() {
        let history = history("altsu", &["kiosk"]);
        let hints = KeyHints::compute(&Alphabet::default(), &history);
        let ruled_out: Vec<char> = hints.ruled_out().collect();
        assert_eq!(ruled_out, vec!['I', 'K', 'O']);
    }
}
