//! Screen geometry and hit-testing
//!
//! The same layout is used for drawing and for mapping mouse clicks back
//! to tiles and keys, so the two can never disagree.

use crate::core::{COLS, Coord, Letter, ROWS};
use crate::input::KeyId;
use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const TILE_WIDTH: u16 = 7;
pub const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 9;
const KEY_HEIGHT: u16 = 3;
const KEY_GAP: u16 = 1;

pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Where something was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tile(Coord),
    Key(KeyId),
}

#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub header: Rect,
    pub grid: Rect,
    pub keyboard: Rect,
    pub status: Rect,
    tiles: [[Rect; COLS]; ROWS],
    keys: Vec<(KeyId, Rect)>,
}

impl ScreenLayout {
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let grid_height = ROWS as u16 * TILE_HEIGHT;
        let keyboard_height = KEYBOARD_ROWS.len() as u16 * KEY_HEIGHT;
        let [header, grid, _, keyboard, _, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(grid_height),
            Constraint::Length(1),
            Constraint::Length(keyboard_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let grid_width = COLS as u16 * TILE_WIDTH + (COLS as u16 - 1) * TILE_GAP;
        let grid = centered(grid, grid_width);

        let mut tiles = [[Rect::default(); COLS]; ROWS];
        for coord in Coord::all() {
            let x = grid.x + coord.col() as u16 * (TILE_WIDTH + TILE_GAP);
            let y = grid.y + coord.row() as u16 * TILE_HEIGHT;
            tiles[coord.row()][coord.col()] =
                Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT).intersection(area);
        }

        let keys = keyboard_rows()
            .into_iter()
            .enumerate()
            .flat_map(|(index, row)| {
                let y = keyboard.y + index as u16 * KEY_HEIGHT;
                place_row(&row, keyboard, y)
            })
            .map(|(key, rect)| (key, rect.intersection(area)))
            .collect();

        Self {
            header,
            grid,
            keyboard,
            status,
            tiles,
            keys,
        }
    }

    #[must_use]
    pub const fn tile(&self, coord: Coord) -> Rect {
        self.tiles[coord.row()][coord.col()]
    }

    pub fn keys(&self) -> impl Iterator<Item = (KeyId, Rect)> + '_ {
        self.keys.iter().copied()
    }

    /// What lies under the terminal cell `(x, y)`
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        let position = Position::new(x, y);
        Coord::all()
            .find(|&coord| self.tile(coord).contains(position))
            .map(Hit::Tile)
            .or_else(|| {
                self.keys
                    .iter()
                    .find(|(_, rect)| rect.contains(position))
                    .map(|&(key, _)| Hit::Key(key))
            })
    }
}

/// Key rows of the on-screen keyboard; the last row is flanked by Enter
/// and Backspace
fn keyboard_rows() -> Vec<Vec<KeyId>> {
    let letters = |row: &str| -> Vec<KeyId> {
        row.chars()
            .filter_map(|ch| Letter::new(ch).ok())
            .map(KeyId::Letter)
            .collect()
    };
    let mut rows: Vec<Vec<KeyId>> = KEYBOARD_ROWS.iter().map(|row| letters(row)).collect();
    if let Some(last) = rows.last_mut() {
        last.insert(0, KeyId::Enter);
        last.push(KeyId::Backspace);
    }
    rows
}

const fn key_width(key: KeyId) -> u16 {
    match key {
        KeyId::Enter => WIDE_KEY_WIDTH,
        KeyId::Letter(_) | KeyId::Backspace | KeyId::Left | KeyId::Right => KEY_WIDTH,
    }
}

fn place_row(row: &[KeyId], area: Rect, y: u16) -> Vec<(KeyId, Rect)> {
    let width: u16 = row.iter().map(|&key| key_width(key)).sum::<u16>()
        + (row.len() as u16).saturating_sub(1) * KEY_GAP;
    let mut x = centered(area, width).x;
    row.iter()
        .map(|&key| {
            let rect = Rect::new(x, y, key_width(key), KEY_HEIGHT);
            x += key_width(key) + KEY_GAP;
            (key, rect)
        })
        .collect()
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}
