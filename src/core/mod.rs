//! Core domain types for the Wordle client
//!
//! This module contains the fundamental domain types and pure functions.
//! Nothing here performs I/O or keeps time.

mod evaluation;
mod grid;
mod letter;
mod snapshot;

pub use evaluation::{CodecError, Evaluation, LetterStates, best_letter_states, row_to_emoji};
pub use grid::{COLS, Coord, ROWS};
pub use letter::{Letter, LetterError};
pub use snapshot::{Board, GameSnapshot, SnapshotError, StatsSnapshot};
