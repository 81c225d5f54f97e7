//! Input controller
//!
//! Turns key presses and tile clicks into cursor moves, draft edits and
//! submissions. Every edit is a no-op once the game is won or lost; only
//! Enter keeps a meaning there (reset, while the popup is open).

use super::{KeyId, KeyLatch};
use crate::core::{COLS, Coord, Letter};
use crate::game::GameState;

const LAST_COL: usize = COLS - 1;

/// What the rest of the client should do after an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Invalid input: shake the current row
    Shake,
    /// A letter was written to this tile
    Pulse(Coord),
    /// Send this five-letter guess to the server
    Submit(String),
    /// Start a new game
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    latch: KeyLatch,
}

impl InputController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a physical key-down; `false` for repeats of a held key
    pub fn press(&mut self, key: KeyId) -> bool {
        self.latch.press(key)
    }

    pub fn release(&mut self, key: KeyId) {
        self.latch.release(key);
    }

    pub fn release_all(&mut self) {
        self.latch.release_all();
    }

    /// Apply one key to the game state
    pub fn apply(&self, state: &mut GameState, key: KeyId, popup_open: bool) -> InputAction {
        match key {
            KeyId::Letter(letter) => type_letter(state, letter),
            KeyId::Backspace => backspace(state),
            KeyId::Left => move_selection(state, Direction::Left),
            KeyId::Right => move_selection(state, Direction::Right),
            KeyId::Enter => enter(state, popup_open),
        }
    }

    /// Select a tile of the current row by clicking it
    pub fn click_tile(&self, state: &mut GameState, coord: Coord) -> InputAction {
        if state.is_terminal() || coord.row() != state.cursor().current_row {
            return InputAction::None;
        }
        state.select(Some(coord.col()));
        InputAction::None
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

fn type_letter(state: &mut GameState, letter: Letter) -> InputAction {
    if state.is_terminal() {
        return InputAction::None;
    }
    let cursor = state.cursor();
    let Some(col) = cursor.selected else {
        return InputAction::Shake;
    };
    let Some(coord) = Coord::new(cursor.current_row, col) else {
        return InputAction::None;
    };

    state.set_cell(col, Some(letter));
    state.select(if col < LAST_COL { Some(col + 1) } else { None });
    InputAction::Pulse(coord)
}

fn backspace(state: &mut GameState) -> InputAction {
    if state.is_terminal() {
        return InputAction::None;
    }
    match state.cursor().selected {
        None => {
            state.select(Some(LAST_COL));
            state.set_cell(LAST_COL, None);
        }
        Some(col) if state.draft().get(col).is_some() => {
            state.set_cell(col, None);
        }
        Some(col) => {
            let col = col.saturating_sub(1);
            state.select(Some(col));
            state.set_cell(col, None);
        }
    }
    InputAction::None
}

fn move_selection(state: &mut GameState, direction: Direction) -> InputAction {
    if state.is_terminal() {
        return InputAction::None;
    }
    if let Some(col) = state.cursor().selected {
        let target = match direction {
            Direction::Left => col.checked_sub(1),
            Direction::Right => (col < LAST_COL).then_some(col + 1),
        };
        if let Some(target) = target {
            state.select(Some(target));
        }
    }
    InputAction::None
}

fn enter(state: &GameState, popup_open: bool) -> InputAction {
    if state.is_terminal() {
        return if popup_open {
            InputAction::Reset
        } else {
            InputAction::None
        };
    }
    let guess = state.guess_text();
    if guess.chars().count() == COLS {
        InputAction::Submit(guess)
    } else {
        log::debug!("rejecting incomplete guess {guess:?}");
        InputAction::Shake
    }
}
