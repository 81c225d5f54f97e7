//! Server payloads and their validated forms
//!
//! `GameSnapshot` and `StatsSnapshot` mirror the JSON the server sends.
//! A `GameSnapshot` is turned into a `Board` before it touches client state,
//! so every committed row is guaranteed to carry exactly five letters and
//! five evaluations.

use super::{COLS, CodecError, Evaluation, Letter, LetterError, ROWS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game state as returned by `/api/sync-game` and `/api/player-guess`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Only revealed by the server once the game is over
    #[serde(default)]
    pub target_word: Option<String>,
    pub guess_matrix: Vec<Vec<String>>,
    pub evaluation_matrix: Vec<Vec<u8>>,
    pub has_won: bool,
}

/// Player statistics as returned by `/api/sync-stats`
///
/// `guess_distribution[0..6]` counts wins in 1..=6 tries, index 6 counts losses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub guess_distribution: [u32; 7],
}

/// Reasons a game snapshot is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot has {0} rows, at most 6 allowed")]
    TooManyRows(usize),
    #[error("guess matrix has {guesses} rows but evaluation matrix has {evaluations}")]
    RowCountMismatch { guesses: usize, evaluations: usize },
    #[error("row {row} has {len} letters, expected 5")]
    GuessRowLength { row: usize, len: usize },
    #[error("row {row} has {len} evaluations, expected 5")]
    EvaluationRowLength { row: usize, len: usize },
    #[error("row {row}: {source}")]
    Letter { row: usize, source: LetterError },
    #[error("row {row}: {source}")]
    Code { row: usize, source: CodecError },
}

/// Validated, immutable board contents from one server snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    target_word: Option<String>,
    guesses: Vec<[Letter; COLS]>,
    evaluations: Vec<[Evaluation; COLS]>,
    has_won: bool,
}

impl Board {
    /// Validate a wire snapshot
    ///
    /// # Errors
    /// Returns `SnapshotError` if the matrices disagree in shape, hold more
    /// than six rows, or contain anything other than single letters and
    /// codes 0-2.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let guess_rows = snapshot.guess_matrix.len();
        let eval_rows = snapshot.evaluation_matrix.len();

        if guess_rows != eval_rows {
            return Err(SnapshotError::RowCountMismatch {
                guesses: guess_rows,
                evaluations: eval_rows,
            });
        }
        if guess_rows > ROWS {
            return Err(SnapshotError::TooManyRows(guess_rows));
        }

        let mut guesses = Vec::with_capacity(guess_rows);
        let mut evaluations = Vec::with_capacity(eval_rows);

        for (row, (letters, codes)) in snapshot
            .guess_matrix
            .iter()
            .zip(&snapshot.evaluation_matrix)
            .enumerate()
        {
            let letters = letters
                .iter()
                .map(|text| Letter::parse(text))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| SnapshotError::Letter { row, source })?;
            let letters: [Letter; COLS] =
                letters
                    .try_into()
                    .map_err(|v: Vec<Letter>| SnapshotError::GuessRowLength {
                        row,
                        len: v.len(),
                    })?;

            let codes = codes
                .iter()
                .map(|&code| Evaluation::from_code(code))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| SnapshotError::Code { row, source })?;
            let codes: [Evaluation; COLS] =
                codes
                    .try_into()
                    .map_err(|v: Vec<Evaluation>| SnapshotError::EvaluationRowLength {
                        row,
                        len: v.len(),
                    })?;

            guesses.push(letters);
            evaluations.push(codes);
        }

        Ok(Self {
            target_word: snapshot.target_word.clone(),
            guesses,
            evaluations,
            has_won: snapshot.has_won,
        })
    }

    /// Number of committed rows
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[[Letter; COLS]] {
        &self.guesses
    }

    #[must_use]
    pub fn evaluations(&self) -> &[[Evaluation; COLS]] {
        &self.evaluations
    }

    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        self.target_word.as_deref()
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.has_won
    }
}
