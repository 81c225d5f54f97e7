//! Per-letter evaluation codes and derived letter states
//!
//! The server scores each guessed letter with a small integer code:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The codes are totally ordered, so the best knowledge about a letter is
//! simply the maximum code observed for it anywhere on the board.

use super::{COLS, Letter};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Evaluation of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Evaluation {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

/// Error for codes outside {0, 1, 2}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid evaluation code {0}, expected 0, 1 or 2")]
pub struct CodecError(pub u8);

impl Evaluation {
    /// Decode a wire code
    ///
    /// # Errors
    /// Returns `CodecError` for any code other than 0, 1 or 2.
    pub const fn from_code(code: u8) -> Result<Self, CodecError> {
        match code {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Present),
            2 => Ok(Self::Correct),
            other => Err(CodecError(other)),
        }
    }

    /// The wire code for this evaluation
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Emoji square used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Render one evaluated row as emoji squares
///
/// # Examples
/// ```
/// use wordle_client::core::{Evaluation, row_to_emoji};
///
/// let row = [Evaluation::Correct, Evaluation::Present, Evaluation::Absent,
///            Evaluation::Correct, Evaluation::Present];
/// assert_eq!(row_to_emoji(&row), "🟩🟨⬜🟩🟨");
/// ```
#[must_use]
pub fn row_to_emoji(row: &[Evaluation; COLS]) -> String {
    row.iter().map(|e| e.emoji()).collect()
}

/// Best-known evaluation for each letter seen on the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates(FxHashMap<Letter, Evaluation>);

impl LetterStates {
    /// Best-known evaluation of a letter, `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<Evaluation> {
        self.0.get(&letter).copied()
    }

    /// Record an evaluation, keeping whichever of old and new is better
    ///
    /// Returns `true` if the stored state changed.
    pub fn upgrade(&mut self, letter: Letter, evaluation: Evaluation) -> bool {
        match self.0.get(&letter) {
            Some(&current) if current >= evaluation => false,
            _ => {
                self.0.insert(letter, evaluation);
                true
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Letter, Evaluation)> + '_ {
        self.0.iter().map(|(&l, &e)| (l, e))
    }
}

/// Derive the best-known state of every letter on the board
///
/// For each letter seen across all committed rows, the maximum evaluation
/// observed wins (Correct > Present > Absent). Letters that never appear on
/// the board are absent from the result. Rows beyond the shorter of the two
/// matrices are ignored.
///
/// # Examples
/// ```
/// use wordle_client::core::{Evaluation, Letter, best_letter_states};
///
/// let row = ['C', 'R', 'A', 'N', 'E'].map(|c| Letter::new(c).unwrap());
/// let evals = [0, 2, 1, 0, 0].map(|c| Evaluation::from_code(c).unwrap());
/// let states = best_letter_states(&[row], &[evals]);
///
/// assert_eq!(states.get(Letter::new('R').unwrap()), Some(Evaluation::Correct));
/// assert_eq!(states.get(Letter::new('Z').unwrap()), None);
/// ```
#[must_use]
pub fn best_letter_states(
    guesses: &[[Letter; COLS]],
    evaluations: &[[Evaluation; COLS]],
) -> LetterStates {
    let mut states = LetterStates::default();
    for (row, evals) in guesses.iter().zip(evaluations) {
        for (&letter, &evaluation) in row.iter().zip(evals) {
            states.upgrade(letter, evaluation);
        }
    }
    states
}
