//! Game state store
//!
//! Holds the latest server board together with the client-only cursor and
//! draft row. Server data is only ever replaced as a whole.

use super::cursor::{Cursor, Draft, GameFlags};
use crate::core::{Board, COLS, Letter, LetterStates, best_letter_states};

/// What triggered a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOrigin {
    /// Response to a submitted guess
    Submission,
    /// Startup or manual refresh
    Refresh,
}

/// How a sync changed the game, used to choose the render path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// First snapshot since the client started; render without animation
    pub first_sync: bool,
    /// The snapshot committed at least one new row
    pub was_new_guess: bool,
    /// Won or lost after this snapshot
    pub is_terminal: bool,
    /// A submission came back with the same rows as before
    pub rejected: bool,
}

/// Single owner of all client game state
#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: Board,
    flags: GameFlags,
    cursor: Cursor,
    draft: Draft,
    letter_states: LetterStates,
    synced: bool,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace server state with a new board
    ///
    /// Recomputes flags, letter states and the cursor. The draft row is
    /// cleared and the first cell selected whenever the current row moves;
    /// a rejected submission leaves both untouched. In terminal state
    /// nothing is selected.
    pub fn apply_sync(&mut self, board: Board, origin: SyncOrigin) -> SyncOutcome {
        let first_sync = !self.synced;
        let previous_rows = self.board.rows();
        let was_new_guess = previous_rows < board.rows();
        let row_moved = previous_rows != board.rows();

        self.board = board;
        self.flags = GameFlags::from_board(&self.board);
        self.letter_states = best_letter_states(self.board.guesses(), self.board.evaluations());
        self.cursor.current_row = self.board.rows();
        self.synced = true;

        let is_terminal = self.flags.is_terminal();
        if row_moved || first_sync {
            self.draft.clear();
        }
        if is_terminal || !self.cursor.row_available() {
            self.cursor.selected = None;
        } else if row_moved || first_sync {
            self.cursor.selected = Some(0);
        }

        log::debug!(
            "applied sync: rows {previous_rows} -> {}, won={}, over={}",
            self.board.rows(),
            self.flags.has_won,
            self.flags.game_over
        );

        SyncOutcome {
            first_sync,
            was_new_guess,
            is_terminal,
            rejected: !first_sync
                && !row_moved
                && !is_terminal
                && origin == SyncOrigin::Submission,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn flags(&self) -> GameFlags {
        self.flags
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.flags.is_terminal()
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn letter_states(&self) -> &LetterStates {
        &self.letter_states
    }

    /// Whether any snapshot has been applied yet
    #[must_use]
    pub const fn has_synced(&self) -> bool {
        self.synced
    }

    /// Target word, only known once the game is over
    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        self.board.target_word()
    }

    /// Select a column of the current row, or clear the selection
    ///
    /// Ignored when the column is out of range or no row is available.
    pub fn select(&mut self, col: Option<usize>) {
        match col {
            Some(col) if col < COLS && self.cursor.row_available() => {
                self.cursor.selected = Some(col);
            }
            Some(_) => {}
            None => self.cursor.selected = None,
        }
    }

    /// Write or clear one cell of the draft row
    pub fn set_cell(&mut self, col: usize, letter: Option<Letter>) {
        self.draft.set(col, letter);
    }

    /// The current draft as a guess string
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.draft.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, GameSnapshot};

    fn board(rows: &[&str], has_won: bool) -> Board {
        let snap = GameSnapshot {
            target_word: None,
            guess_matrix: rows
                .iter()
                .map(|w| w.chars().map(|c| c.to_string()).collect())
                .collect(),
            evaluation_matrix: rows
                .iter()
                .enumerate()
                .map(|(i, _)| {
                    if has_won && i + 1 == rows.len() {
                        vec![2; 5]
                    } else {
                        vec![0, 1, 0, 0, 0]
                    }
                })
                .collect(),
            has_won,
        };
        Board::from_snapshot(&snap).unwrap()
    }

    #[test]
    fn first_sync_flagged_and_selects_first_cell() {
        let mut state = GameState::new();
        assert!(!state.has_synced());

        let outcome = state.apply_sync(board(&[], false), SyncOrigin::Refresh);
        assert!(outcome.first_sync);
        assert!(!outcome.was_new_guess);
        assert!(!outcome.rejected);
        assert_eq!(state.cursor().current_row, 0);
        assert_eq!(state.cursor().selected, Some(0));
    }

    #[test]
    fn new_row_advances_cursor_and_clears_draft() {
        let mut state = GameState::new();
        state.apply_sync(board(&[], false), SyncOrigin::Refresh);
        state.set_cell(0, Some(Letter::new('c').unwrap()));
        state.select(Some(3));

        let outcome = state.apply_sync(board(&["CRANE"], false), SyncOrigin::Submission);
        assert!(!outcome.first_sync);
        assert!(outcome.was_new_guess);
        assert!(!outcome.is_terminal);
        assert_eq!(state.cursor().current_row, 1);
        assert_eq!(state.cursor().selected, Some(0));
        assert!(state.draft().is_empty());
        assert_eq!(
            state.letter_states().get(Letter::new('R').unwrap()),
            Some(Evaluation::Present)
        );
    }

    #[test]
    fn rejected_submission_keeps_draft_and_selection() {
        let mut state = GameState::new();
        state.apply_sync(board(&["CRANE"], false), SyncOrigin::Refresh);
        for (col, ch) in "XXXXX".chars().enumerate() {
            state.set_cell(col, Some(Letter::new(ch).unwrap()));
        }
        state.select(None);

        let outcome = state.apply_sync(board(&["CRANE"], false), SyncOrigin::Submission);
        assert!(outcome.rejected);
        assert!(!outcome.was_new_guess);
        assert_eq!(state.guess_text(), "XXXXX");
        assert_eq!(state.cursor().selected, None);
    }

    #[test]
    fn submission_answered_with_fewer_rows_is_not_a_rejection() {
        let mut state = GameState::new();
        state.apply_sync(board(&["CRANE", "SLATE"], false), SyncOrigin::Refresh);

        let outcome = state.apply_sync(board(&[], false), SyncOrigin::Submission);
        assert!(!outcome.rejected);
        assert!(!outcome.was_new_guess);
        assert_eq!(state.cursor().current_row, 0);
        assert_eq!(state.cursor().selected, Some(0));
    }

    #[test]
    fn unchanged_refresh_is_not_a_rejection() {
        let mut state = GameState::new();
        state.apply_sync(board(&["CRANE"], false), SyncOrigin::Refresh);

        let outcome = state.apply_sync(board(&["CRANE"], false), SyncOrigin::Refresh);
        assert!(!outcome.rejected);
    }

    #[test]
    fn win_clears_selection_and_is_terminal() {
        let mut state = GameState::new();
        state.apply_sync(board(&[], false), SyncOrigin::Refresh);

        let outcome = state.apply_sync(board(&["CRANE"], true), SyncOrigin::Submission);
        assert!(outcome.is_terminal);
        assert!(state.flags().has_won);
        assert!(!state.flags().game_over);
        assert_eq!(state.cursor().selected, None);
    }

    #[test]
    fn six_rows_without_win_is_game_over() {
        let mut state = GameState::new();
        let rows = ["CRANE"; 6];
        let outcome = state.apply_sync(board(&rows, false), SyncOrigin::Refresh);

        assert!(outcome.is_terminal);
        assert!(state.flags().game_over);
        assert!(!state.flags().has_won);
        assert_eq!(state.cursor().current_row, 6);
        assert_eq!(state.cursor().selected, None);
    }

    #[test]
    fn flags_never_both_set_and_matrices_parallel() {
        let mut state = GameState::new();
        for n in 0..=6 {
            let rows = vec!["SLATE"; n];
            for won in [false, true] {
                if won && n == 0 {
                    continue;
                }
                state.apply_sync(board(&rows, won), SyncOrigin::Refresh);
                let flags = state.flags();
                assert!(!(flags.has_won && flags.game_over));
                assert_eq!(
                    state.board().guesses().len(),
                    state.board().evaluations().len()
                );
            }
        }
    }

    #[test]
    fn select_bounds() {
        let mut state = GameState::new();
        state.apply_sync(board(&[], false), SyncOrigin::Refresh);

        state.select(Some(4));
        assert_eq!(state.cursor().selected, Some(4));
        state.select(Some(5));
        assert_eq!(state.cursor().selected, Some(4));
        state.select(None);
        assert_eq!(state.cursor().selected, None);
    }
}
