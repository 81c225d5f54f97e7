//! Render targets for tiles and keys
//!
//! `BoardView` is what the screen shows, which may lag behind `GameState`
//! while an animation is running. Tiles are addressed by `Coord`, keys by
//! `Letter`/`KeyId`; the terminal layer maps those to screen cells.

use crate::core::{COLS, Coord, Evaluation, Letter, LetterStates, ROWS};
use crate::game::GameState;
use crate::input::KeyId;
use rustc_hash::FxHashSet;

/// Rotation of a tile during a flip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flip {
    #[default]
    Flat,
    /// Rotated 90°, nothing visible
    EdgeOn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileView {
    pub letter: Option<Letter>,
    pub color: Option<Evaluation>,
    pub flip: Flip,
    /// Scaled up by the typing pulse
    pub enlarged: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BoardView {
    tiles: [[TileView; COLS]; ROWS],
    keys: LetterStates,
    pressed: FxHashSet<KeyId>,
    current_row: Option<usize>,
    selected: Option<Coord>,
}

impl BoardView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the whole state at once: letters, colours, keyboard and cursor
    pub fn load(&mut self, state: &GameState) {
        self.tiles = [[TileView::default(); COLS]; ROWS];
        let board = state.board();
        for (row, (letters, evals)) in board
            .guesses()
            .iter()
            .zip(board.evaluations())
            .enumerate()
        {
            self.paint_row(row, letters, evals);
        }
        self.keys = state.letter_states().clone();
        self.sync_cursor(state);
    }

    /// Show a committed row with its final colours
    pub fn paint_row(&mut self, row: usize, letters: &[Letter; COLS], evals: &[Evaluation; COLS]) {
        if let Some(tiles) = self.tiles.get_mut(row) {
            for (tile, (&letter, &eval)) in tiles.iter_mut().zip(letters.iter().zip(evals)) {
                *tile = TileView {
                    letter: Some(letter),
                    color: Some(eval),
                    ..TileView::default()
                };
            }
        }
    }

    /// Show a committed row's letters with colours still hidden
    pub fn stage_row(&mut self, row: usize, letters: &[Letter; COLS]) {
        if let Some(tiles) = self.tiles.get_mut(row) {
            for (tile, &letter) in tiles.iter_mut().zip(letters) {
                *tile = TileView {
                    letter: Some(letter),
                    ..TileView::default()
                };
            }
        }
    }

    /// Mirror the cursor and the draft row
    pub fn sync_cursor(&mut self, state: &GameState) {
        let cursor = state.cursor();
        let editable = !state.is_terminal() && cursor.row_available();

        self.current_row = editable.then_some(cursor.current_row);
        self.selected = cursor
            .selected
            .filter(|_| editable)
            .and_then(|col| Coord::new(cursor.current_row, col));

        if editable && let Some(tiles) = self.tiles.get_mut(cursor.current_row) {
            for (tile, letter) in tiles.iter_mut().zip(state.draft().cells()) {
                tile.letter = letter;
                tile.color = None;
            }
        }
    }

    #[must_use]
    pub fn tile(&self, coord: Coord) -> &TileView {
        &self.tiles[coord.row()][coord.col()]
    }

    pub fn tile_mut(&mut self, coord: Coord) -> &mut TileView {
        &mut self.tiles[coord.row()][coord.col()]
    }

    /// Colour of an on-screen key, `None` while the letter is unused
    #[must_use]
    pub fn key_color(&self, letter: Letter) -> Option<Evaluation> {
        self.keys.get(letter)
    }

    /// Raise a key's colour; keys never go from green back to yellow or grey
    pub fn upgrade_key(&mut self, letter: Letter, evaluation: Evaluation) -> bool {
        self.keys.upgrade(letter, evaluation)
    }

    #[must_use]
    pub const fn keys(&self) -> &LetterStates {
        &self.keys
    }

    pub fn set_pressed(&mut self, key: KeyId, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    #[must_use]
    pub fn is_pressed(&self, key: KeyId) -> bool {
        self.pressed.contains(&key)
    }

    #[must_use]
    pub const fn current_row(&self) -> Option<usize> {
        self.current_row
    }

    #[must_use]
    pub const fn selected(&self) -> Option<Coord> {
        self.selected
    }
}
