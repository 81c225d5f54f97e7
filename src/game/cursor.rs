//! Cursor, draft row and game flags

use crate::core::{Board, COLS, Letter, ROWS};

/// Pointer to the next editable cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Number of committed rows, i.e. the row being typed into
    pub current_row: usize,
    /// Selected column of the current row, if any
    pub selected: Option<usize>,
}

impl Cursor {
    /// Whether the current row is still on the board
    #[must_use]
    pub const fn row_available(&self) -> bool {
        self.current_row < ROWS
    }
}

/// Letters typed into the current row but not yet submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draft([Option<Letter>; COLS]);

impl Draft {
    #[must_use]
    pub fn get(&self, col: usize) -> Option<Letter> {
        self.0.get(col).copied().flatten()
    }

    /// Write or clear one cell; out-of-range columns are ignored
    pub fn set(&mut self, col: usize, letter: Option<Letter>) {
        if let Some(cell) = self.0.get_mut(col) {
            *cell = letter;
        }
    }

    pub fn clear(&mut self) {
        self.0 = [None; COLS];
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// The guess as sent to the server
    ///
    /// Empty cells are skipped, so an incomplete row yields fewer than five
    /// characters.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.iter().flatten().map(|l| l.as_char()).collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = Option<Letter>> + '_ {
        self.0.iter().copied()
    }
}

/// Win/loss status derived from a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFlags {
    pub has_won: bool,
    pub game_over: bool,
}

impl GameFlags {
    /// `game_over` is true only when all six rows are used without a win
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let has_won = board.has_won();
        Self {
            has_won,
            game_over: board.rows() >= ROWS && !has_won,
        }
    }

    /// Won or lost
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.has_won || self.game_over
    }
}
