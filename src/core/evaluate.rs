//! Guess evaluation
//!
//! Compares a guess against the secret and produces one [`LetterStatus`] per
//! position, with correct handling of repeated letters.

use super::alphabet::normalize;
use super::status::LetterStatus;
use super::word::Word;

/// Evaluate `guess` against `secret`
///
/// Both inputs must have the same length; that is the caller's contract and
/// is only checked in debug builds.
///
/// # Algorithm
/// 1. Case-fold both sides to uppercase
/// 2. First pass: mark exact position matches `Correct` and consume them from
///    the pool of secret letters
/// 3. Second pass: mark remaining positions `Present` while the pool still
///    holds that letter (consuming it), otherwise `Absent`
///
/// For any letter, `Correct` + `Present` never exceeds its count in the secret.
///
/// # Examples
/// ```
/// use rottawordle::core::{evaluate, LetterStatus::*};
///
/// let guess: Vec<char> = "stall".chars().collect();
/// let secret: Vec<char> = "ALTSU".chars().collect();
///
/// // Only one L is in the secret, so the second L is absent
/// assert_eq!(
///     evaluate(&guess, &secret),
///     vec![Present, Present, Present, Present, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[char], secret: &[char]) -> Vec<LetterStatus> {
    debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

    let fold = |ch: &char| normalize(*ch).unwrap_or(*ch);
    let guess: Vec<char> = guess.iter().map(fold).collect();
    let secret: Vec<char> = secret.iter().map(fold).collect();

    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut available = rustc_hash::FxHashMap::<char, usize>::default();
    for &ch in &secret {
        *available.entry(ch).or_insert(0) += 1;
    }

    // First pass: exact matches
    for (i, (g, s)) in guess.iter().zip(&secret).enumerate() {
        if g == s {
            result[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from what is left
    for (i, g) in guess.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(g)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}

/// A submitted guess together with its feedback
///
/// Created once when a guess is submitted and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    statuses: Vec<LetterStatus>,
}

impl Guess {
    /// Evaluate `word` against `secret` and record the result
    #[must_use]
    pub fn new(word: Word, secret: &Word) -> Self {
        let statuses = evaluate(word.letters(), secret.letters());
        Self { word, statuses }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// Letters paired with their statuses, in position order
    pub fn tiles(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.statuses.iter().copied())
    }

    /// True if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses.iter().all(|s| s.is_correct())
    }
}
