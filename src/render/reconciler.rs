//! Render reconciler
//!
//! Projects `GameState` onto the `BoardView`, either at once (first load)
//! or through timed animations:
//!
//! ```text
//!   Idle ──shake──▶ Shaking ──500ms──▶ Idle
//!   Idle ──reveal─▶ Revealing ──cascade done──▶ Idle (+ RevealFinished)
//! ```
//!
//! A shake and a reveal touch different rows, so a shake may start while a
//! reveal is running; it is only refused while another shake is running.
//!
//! The reveal flips the committed row tile by tile. Each flip turns the
//! tile edge-on, swaps in its colour at the midpoint (upgrading the
//! matching keyboard key) and turns it back; tiles start `2 × flip_delay`
//! apart so the cascade runs left to right.

use super::board::{BoardView, Flip};
use super::timeline::Timeline;
use crate::config::AnimationTiming;
use crate::core::{COLS, Coord, Evaluation, Letter};
use crate::game::GameState;
use std::time::Duration;

/// Animation phase of the board, a running reveal taking precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Shaking { row: usize, since: Duration },
    Revealing { row: usize, terminal: bool },
}

/// Emitted by `Reconciler::advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilerEvent {
    RevealFinished { row: usize, terminal: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    FlipOut(Coord),
    FlipIn {
        coord: Coord,
        letter: Letter,
        evaluation: Evaluation,
    },
    RevealDone {
        row: usize,
        terminal: bool,
    },
    ShakeDone,
    PulseUp(Coord),
    PulseDown(Coord),
}

impl Step {
    const fn is_reveal(self) -> bool {
        matches!(
            self,
            Self::FlipOut(_) | Self::FlipIn { .. } | Self::RevealDone { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shake {
    row: usize,
    since: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reveal {
    row: usize,
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct Reconciler {
    view: BoardView,
    shaking: Option<Shake>,
    revealing: Option<Reveal>,
    timing: AnimationTiming,
    timeline: Timeline<Step>,
    pending: Vec<ReconcilerEvent>,
}

impl Reconciler {
    #[must_use]
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            view: BoardView::new(),
            shaking: None,
            revealing: None,
            timing,
            timeline: Timeline::new(),
            pending: Vec::new(),
        }
    }

    /// Drop all running animations and draw `state` as-is
    pub fn render_immediate(&mut self, state: &GameState) {
        self.timeline.clear();
        self.pending.clear();
        self.shaking = None;
        self.revealing = None;
        self.view.load(state);
    }

    /// Show committed rows `rows` with final colours and keys, no animation
    pub fn paint_rows(&mut self, state: &GameState, rows: std::ops::Range<usize>) {
        let board = state.board();
        for row in rows {
            if let (Some(letters), Some(evals)) =
                (board.guesses().get(row), board.evaluations().get(row))
            {
                self.view.paint_row(row, letters, evals);
                for (&letter, &evaluation) in letters.iter().zip(evals) {
                    self.view.upgrade_key(letter, evaluation);
                }
            }
        }
    }

    /// Shake the current row
    ///
    /// Returns `false` (and does nothing) while a shake is already running,
    /// so overlapping shakes never stack.
    pub fn shake(&mut self, row: usize, now: Duration) -> bool {
        if let Some(running) = self.shaking {
            log::debug!("shake ignored, row {} still shaking", running.row);
            return false;
        }
        self.shaking = Some(Shake { row, since: now });
        self.timeline.schedule(now + self.timing.shake, Step::ShakeDone);
        true
    }

    /// Start the reveal cascade for a freshly committed row
    ///
    /// A reveal still in progress is completed instantly first; an active
    /// shake is cancelled.
    pub fn reveal(
        &mut self,
        row: usize,
        letters: &[Letter; COLS],
        evals: &[Evaluation; COLS],
        terminal: bool,
        now: Duration,
    ) {
        if self.revealing.is_some() {
            self.finish_reveal();
        }
        if self.shaking.take().is_some() {
            self.timeline.cancel(|step| *step == Step::ShakeDone);
        }

        log::debug!("revealing row {row} (terminal: {terminal})");
        self.view.stage_row(row, letters);

        let delay = self.timing.flip_delay;
        for (col, (&letter, &evaluation)) in letters.iter().zip(evals).enumerate() {
            let Some(coord) = Coord::new(row, col) else {
                continue;
            };
            let start = now + delay * (col as u32 * 2);
            self.timeline.schedule(start, Step::FlipOut(coord));
            self.timeline.schedule(
                start + delay,
                Step::FlipIn {
                    coord,
                    letter,
                    evaluation,
                },
            );
        }
        self.timeline.schedule(
            now + self.timing.cascade_total(),
            Step::RevealDone { row, terminal },
        );
        self.revealing = Some(Reveal { row, terminal });
    }

    /// Briefly enlarge a tile that was just typed into
    pub fn pulse(&mut self, coord: Coord, now: Duration) {
        self.view.tile_mut(coord).enlarged = false;
        let up = now + self.timing.pulse_delay;
        self.timeline.schedule(up, Step::PulseUp(coord));
        self.timeline
            .schedule(up + self.timing.pulse_hold, Step::PulseDown(coord));
    }

    /// Run every step due at `now`
    pub fn advance(&mut self, now: Duration) -> Vec<ReconcilerEvent> {
        for step in self.timeline.drain_due(now) {
            self.apply(step);
        }
        std::mem::take(&mut self.pending)
    }

    /// Mirror cursor and draft changes onto the view
    pub fn sync_cursor(&mut self, state: &GameState) {
        self.view.sync_cursor(state);
    }

    /// Horizontal displacement of the shaking row, in cells
    #[must_use]
    pub fn shake_offset(&self, now: Duration) -> i16 {
        let Some(Shake { since, .. }) = self.shaking else {
            return 0;
        };
        let elapsed = now.saturating_sub(since);
        if elapsed >= self.timing.shake {
            return 0;
        }
        match (elapsed.as_millis() / 50) % 4 {
            1 => -1,
            3 => 1,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.revealing, self.shaking) {
            (Some(Reveal { row, terminal }), _) => Phase::Revealing { row, terminal },
            (None, Some(Shake { row, since })) => Phase::Shaking { row, since },
            (None, None) => Phase::Idle,
        }
    }

    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shaking.is_some()
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.shaking.is_some() || self.revealing.is_some()
    }

    #[must_use]
    pub const fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut BoardView {
        &mut self.view
    }

    fn finish_reveal(&mut self) {
        let mut rest = Vec::new();
        for step in self.timeline.drain_all() {
            if step.is_reveal() {
                self.apply(step);
            } else {
                rest.push(step);
            }
        }
        // Remaining steps are re-queued as already due
        for step in rest {
            self.timeline.schedule(Duration::ZERO, step);
        }
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::FlipOut(coord) => self.view.tile_mut(coord).flip = Flip::EdgeOn,
            Step::FlipIn {
                coord,
                letter,
                evaluation,
            } => {
                let tile = self.view.tile_mut(coord);
                tile.flip = Flip::Flat;
                tile.color = Some(evaluation);
                self.view.upgrade_key(letter, evaluation);
            }
            Step::RevealDone { row, terminal } => {
                self.revealing = None;
                self.pending
                    .push(ReconcilerEvent::RevealFinished { row, terminal });
            }
            Step::ShakeDone => self.shaking = None,
            Step::PulseUp(coord) => self.view.tile_mut(coord).enlarged = true,
            Step::PulseDown(coord) => self.view.tile_mut(coord).enlarged = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameSnapshot};
    use crate::game::SyncOrigin;
    use crate::render::{Clock, ManualClock};

    fn letters(word: &str) -> [Letter; COLS] {
        let v: Vec<Letter> = word.chars().map(|c| Letter::new(c).unwrap()).collect();
        v.try_into().unwrap()
    }

    fn evals(codes: [u8; COLS]) -> [Evaluation; COLS] {
        codes.map(|c| Evaluation::from_code(c).unwrap())
    }

    fn state(rows: &[(&str, [u8; 5])], has_won: bool) -> GameState {
        let snap = GameSnapshot {
            target_word: None,
            guess_matrix: rows
                .iter()
                .map(|(w, _)| w.chars().map(|c| c.to_string()).collect())
                .collect(),
            evaluation_matrix: rows.iter().map(|(_, e)| e.to_vec()).collect(),
            has_won,
        };
        let mut state = GameState::new();
        state.apply_sync(Board::from_snapshot(&snap).unwrap(), SyncOrigin::Refresh);
        state
    }

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn shake_is_single_shot_and_not_reentrant() {
        let clock = ManualClock::new();
        let mut reconciler = Reconciler::new(AnimationTiming::default());

        assert!(reconciler.shake(0, clock.now()));
        clock.advance_ms(100);
        assert!(!reconciler.shake(0, clock.now()));
        assert!(matches!(reconciler.phase(), Phase::Shaking { .. }));

        clock.advance_ms(399);
        reconciler.advance(clock.now());
        assert!(reconciler.is_busy());

        clock.advance_ms(1);
        reconciler.advance(clock.now());
        assert_eq!(reconciler.phase(), Phase::Idle);
        assert_eq!(reconciler.shake_offset(clock.now()), 0);
        assert!(reconciler.shake(0, clock.now()));
    }

    #[test]
    fn shake_offset_oscillates() {
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        reconciler.shake(0, Duration::ZERO);

        let offsets: Vec<i16> = [0, 60, 110, 160]
            .iter()
            .map(|&ms| reconciler.shake_offset(Duration::from_millis(ms)))
            .collect();
        assert_eq!(offsets, vec![0, -1, 0, 1]);
    }

    #[test]
    fn reveal_cascades_left_to_right() {
        let clock = ManualClock::new();
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        reconciler.render_immediate(&state(&[], false));

        reconciler.reveal(0, &letters("CRANE"), &evals([0, 2, 1, 0, 0]), false, clock.now());
        reconciler.advance(clock.now());
        assert_eq!(reconciler.view().tile(coord(0, 0)).flip, Flip::EdgeOn);
        assert_eq!(reconciler.view().tile(coord(0, 1)).flip, Flip::Flat);
        assert_eq!(reconciler.view().tile(coord(0, 0)).color, None);

        // Midpoint of the first tile
        clock.advance_ms(200);
        reconciler.advance(clock.now());
        let first = reconciler.view().tile(coord(0, 0));
        assert_eq!(first.flip, Flip::Flat);
        assert_eq!(first.color, Some(Evaluation::Absent));
        assert_eq!(reconciler.view().tile(coord(0, 1)).color, None);

        // Second tile starts at 400ms, midpoint at 600ms
        clock.advance_ms(200);
        reconciler.advance(clock.now());
        assert_eq!(reconciler.view().tile(coord(0, 1)).flip, Flip::EdgeOn);
        clock.advance_ms(200);
        reconciler.advance(clock.now());
        assert_eq!(
            reconciler.view().tile(coord(0, 1)).color,
            Some(Evaluation::Correct)
        );
        assert_eq!(
            reconciler.view().key_color(Letter::new('R').unwrap()),
            Some(Evaluation::Correct)
        );
        assert_eq!(reconciler.view().key_color(Letter::new('E').unwrap()), None);
    }

    #[test]
    fn reveal_finishes_after_full_cascade() {
        let clock = ManualClock::new();
        let mut reconciler = Reconciler::new(AnimationTiming::default());

        reconciler.reveal(0, &letters("CRANE"), &evals([2; 5]), true, clock.now());
        clock.advance_ms(2199);
        assert!(reconciler.advance(clock.now()).is_empty());
        assert!(reconciler.is_busy());

        clock.advance_ms(1);
        assert_eq!(
            reconciler.advance(clock.now()),
            vec![ReconcilerEvent::RevealFinished {
                row: 0,
                terminal: true
            }]
        );
        assert_eq!(reconciler.phase(), Phase::Idle);
        for col in 0..COLS {
            assert_eq!(
                reconciler.view().tile(coord(0, col)).color,
                Some(Evaluation::Correct)
            );
        }
    }

    #[test]
    fn keys_only_escalate_during_reveal() {
        let clock = ManualClock::new();
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        // E already green from an earlier row
        reconciler.render_immediate(&state(&[("THREE", [0, 0, 0, 0, 2])], false));

        reconciler.reveal(1, &letters("EERIE"), &evals([1, 0, 0, 0, 0]), false, clock.now());
        clock.advance_ms(5000);
        reconciler.advance(clock.now());

        let e = Letter::new('E').unwrap();
        assert_eq!(reconciler.view().key_color(e), Some(Evaluation::Correct));
        assert_eq!(
            reconciler.view().key_color(Letter::new('I').unwrap()),
            Some(Evaluation::Absent)
        );
    }

    #[test]
    fn keyboard_matches_store_after_reveal() {
        let clock = ManualClock::new();
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        let before = state(&[("SLATE", [0, 1, 0, 0, 2])], false);
        reconciler.render_immediate(&before);

        let after = state(
            &[("SLATE", [0, 1, 0, 0, 2]), ("LOBBY", [2, 0, 1, 0, 0])],
            false,
        );
        let board = after.board();
        reconciler.reveal(
            1,
            &board.guesses()[1],
            &board.evaluations()[1],
            false,
            clock.now(),
        );
        clock.advance_ms(2200);
        reconciler.advance(clock.now());

        assert_eq!(reconciler.view().keys(), after.letter_states());
    }

    #[test]
    fn shake_runs_alongside_reveal() {
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        reconciler.reveal(0, &letters("CRANE"), &evals([0; 5]), false, Duration::ZERO);

        let at = Duration::from_millis(500);
        assert!(reconciler.shake(1, at));
        assert!(reconciler.is_shaking());
        assert!(!reconciler.shake(1, at + Duration::from_millis(100)));
        assert_eq!(reconciler.shake_offset(at + Duration::from_millis(60)), -1);
        assert!(matches!(reconciler.phase(), Phase::Revealing { row: 0, .. }));

        reconciler.advance(at + Duration::from_millis(500));
        assert!(!reconciler.is_shaking());
        assert!(matches!(reconciler.phase(), Phase::Revealing { row: 0, .. }));

        reconciler.advance(Duration::from_millis(2200));
        assert_eq!(reconciler.phase(), Phase::Idle);
    }

    #[test]
    fn paint_rows_escalates_keys() {
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        let state = state(&[("CRANE", [0, 2, 1, 0, 0]), ("PIOUS", [1, 0, 0, 0, 0])], false);
        reconciler.render_immediate(&GameState::new());

        reconciler.paint_rows(&state, 0..2);
        assert_eq!(reconciler.view().keys(), state.letter_states());
        assert!(!reconciler.is_busy());
    }

    #[test]
    fn reveal_cancels_running_shake() {
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        reconciler.shake(0, Duration::ZERO);

        reconciler.reveal(0, &letters("CRANE"), &evals([0; 5]), false, Duration::from_millis(10));
        assert!(matches!(reconciler.phase(), Phase::Revealing { row: 0, .. }));
        assert!(!reconciler.is_shaking());
        assert_eq!(reconciler.shake_offset(Duration::from_millis(60)), 0);
    }

    #[test]
    fn second_reveal_fast_forwards_first() {
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        reconciler.reveal(0, &letters("CRANE"), &evals([0; 5]), false, Duration::ZERO);
        reconciler.reveal(
            1,
            &letters("SLATE"),
            &evals([1; 5]),
            false,
            Duration::from_millis(300),
        );

        for col in 0..COLS {
            assert_eq!(
                reconciler.view().tile(coord(0, col)).color,
                Some(Evaluation::Absent)
            );
        }
        let events = reconciler.advance(Duration::from_millis(300));
        assert_eq!(
            events,
            vec![ReconcilerEvent::RevealFinished {
                row: 0,
                terminal: false
            }]
        );
        assert!(matches!(reconciler.phase(), Phase::Revealing { row: 1, .. }));
    }

    #[test]
    fn pulse_grows_then_shrinks() {
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        let c = coord(0, 2);
        reconciler.pulse(c, Duration::ZERO);

        reconciler.advance(Duration::from_millis(19));
        assert!(!reconciler.view().tile(c).enlarged);
        reconciler.advance(Duration::from_millis(20));
        assert!(reconciler.view().tile(c).enlarged);
        reconciler.advance(Duration::from_millis(70));
        assert!(!reconciler.view().tile(c).enlarged);
        // Pulses do not occupy the board
        assert!(!reconciler.is_busy());
    }

    #[test]
    fn render_immediate_drops_animations() {
        let mut reconciler = Reconciler::new(AnimationTiming::default());
        reconciler.reveal(0, &letters("CRANE"), &evals([2; 5]), true, Duration::ZERO);

        reconciler.render_immediate(&state(&[], false));
        assert_eq!(reconciler.phase(), Phase::Idle);
        assert!(reconciler.advance(Duration::from_secs(10)).is_empty());
        assert_eq!(reconciler.view().tile(coord(0, 0)).letter, None);
    }
}
