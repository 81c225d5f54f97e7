//! Board geometry
//!
//! Tiles are addressed by an explicit `(row, col)` coordinate rather than by
//! any presentation identifier.

use std::fmt;

/// Maximum number of guesses per game
pub const ROWS: usize = 6;

/// Letters per guess
pub const COLS: usize = 5;

/// Position of one tile on the 6×5 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a coordinate, `None` if it falls outside the board
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// All coordinates of one row, left to right
    pub fn row_cells(row: usize) -> impl Iterator<Item = Self> {
        (0..COLS).filter_map(move |col| Self::new(row, col))
    }

    /// Every coordinate on the board in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ROWS).flat_map(Self::row_cells)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(5, 4).is_some());
        assert!(Coord::new(6, 0).is_none());
        assert!(Coord::new(0, 5).is_none());
    }

    #[test]
    fn row_cells_left_to_right() {
        let cols: Vec<usize> = Coord::row_cells(2).map(Coord::col).collect();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
        assert!(Coord::row_cells(2).all(|c| c.row() == 2));
        assert_eq!(Coord::row_cells(ROWS).count(), 0);
    }

    #[test]
    fn all_covers_board() {
        assert_eq!(Coord::all().count(), ROWS * COLS);
        assert_eq!(Coord::all().next(), Coord::new(0, 0));
        assert_eq!(Coord::all().last(), Coord::new(5, 4));
    }
}
