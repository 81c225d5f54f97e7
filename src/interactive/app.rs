//! TUI application state and logic
//!
//! `App` owns every piece of client state and never performs I/O itself:
//! each handler returns the requests the caller should dispatch, and time
//! is passed in as a `Duration` since startup.

use crate::config::{ClientConfig, SubmitGuard};
use crate::core::{Board, Coord, Letter};
use crate::game::{GameState, SyncOrigin};
use crate::input::{InputAction, InputController, KeyId};
use crate::popup::{Feedback, Outcome, Popup, StatsSummary, feedback};
use crate::render::{Reconciler, ReconcilerEvent};
use crate::sync::{ApiRequest, ApiResponse, GatewayEvent};
use std::time::Duration;

/// Application state
pub struct App {
    config: ClientConfig,
    state: GameState,
    reconciler: Reconciler,
    input: InputController,
    popup: Popup,
    stats: Option<StatsSummary>,
    submit_in_flight: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let timing = config.timing;
        Self {
            config,
            state: GameState::new(),
            reconciler: Reconciler::new(timing),
            input: InputController::new(),
            popup: Popup::new(timing.popup_transition),
            stats: None,
            submit_in_flight: false,
            should_quit: false,
        }
    }

    /// Requests to send on startup
    #[must_use]
    pub fn start(&self) -> Vec<ApiRequest> {
        log::info!("loading game from {}", self.config.server_url);
        vec![ApiRequest::FetchGame]
    }

    /// Physical key-down; repeats of a held key are ignored
    pub fn key_down(&mut self, key: KeyId, now: Duration) -> Vec<ApiRequest> {
        if !self.input.press(key) {
            return Vec::new();
        }
        self.reconciler.view_mut().set_pressed(key, true);
        self.perform(key, now)
    }

    pub fn key_up(&mut self, key: KeyId) {
        self.input.release(key);
        self.reconciler.view_mut().set_pressed(key, false);
    }

    /// Release every held key, e.g. when the terminal loses focus
    pub fn release_all(&mut self) {
        self.input.release_all();
        for key in self.held_keys() {
            self.reconciler.view_mut().set_pressed(key, false);
        }
    }

    /// Click on an on-screen key
    pub fn click_key(&mut self, key: KeyId, now: Duration) -> Vec<ApiRequest> {
        self.perform(key, now)
    }

    /// Click on a grid tile
    pub fn click_tile(&mut self, coord: Coord) {
        if self.input_blocked() {
            return;
        }
        self.input.click_tile(&mut self.state, coord);
        self.reconciler.sync_cursor(&self.state);
    }

    /// Open the statistics popup, or close it if it is open
    pub fn toggle_stats(&mut self, now: Duration) -> Vec<ApiRequest> {
        if self.popup.is_open() {
            self.close_popup(now);
            Vec::new()
        } else {
            self.open_popup(now)
        }
    }

    pub fn close_popup(&mut self, now: Duration) {
        self.popup.close(now);
    }

    /// Re-fetch the game from the server
    #[must_use]
    pub fn refresh(&self) -> Vec<ApiRequest> {
        log::info!("refreshing game");
        vec![ApiRequest::FetchGame]
    }

    /// Handle a finished request
    pub fn on_completion(&mut self, event: GatewayEvent, now: Duration) -> Vec<ApiRequest> {
        match event {
            GatewayEvent::Completed { request, response } => {
                self.on_response(request, response, now)
            }
            GatewayEvent::Failed { request } => {
                if matches!(request, ApiRequest::SubmitGuess(_)) {
                    self.submit_in_flight = false;
                }
                Vec::new()
            }
        }
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: Duration) -> Vec<ApiRequest> {
        let mut requests = Vec::new();
        for event in self.reconciler.advance(now) {
            match event {
                ReconcilerEvent::RevealFinished { row, terminal } => {
                    log::debug!("reveal of row {row} finished");
                    if terminal {
                        requests.push(self.show_result(now));
                    }
                }
            }
        }
        self.popup.advance(now);
        requests
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    #[must_use]
    pub const fn popup(&self) -> &Popup {
        &self.popup
    }

    #[must_use]
    pub const fn stats(&self) -> Option<&StatsSummary> {
        self.stats.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_flags(self.state.flags(), self.state.board().rows())
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        feedback(self.outcome(), self.state.target_word())
    }

    /// Whether board input is ignored while a guess is on its way
    #[must_use]
    pub fn input_blocked(&self) -> bool {
        self.submit_in_flight && self.config.submit_guard == SubmitGuard::BlockWhileInFlight
    }

    #[must_use]
    pub const fn submit_in_flight(&self) -> bool {
        self.submit_in_flight
    }

    fn held_keys(&self) -> Vec<KeyId> {
        let view = self.reconciler.view();
        [KeyId::Enter, KeyId::Backspace, KeyId::Left, KeyId::Right]
            .into_iter()
            .chain(Letter::alphabet().map(KeyId::Letter))
            .filter(|&key| view.is_pressed(key))
            .collect()
    }

    fn perform(&mut self, key: KeyId, now: Duration) -> Vec<ApiRequest> {
        if self.input_blocked() {
            log::debug!("ignoring {key} while a guess is pending");
            return Vec::new();
        }

        let action = self
            .input
            .apply(&mut self.state, key, self.popup.is_open());
        self.reconciler.sync_cursor(&self.state);

        match action {
            InputAction::None => Vec::new(),
            InputAction::Shake => {
                self.reconciler
                    .shake(self.state.cursor().current_row, now);
                Vec::new()
            }
            InputAction::Pulse(coord) => {
                self.reconciler.pulse(coord, now);
                Vec::new()
            }
            InputAction::Submit(guess) => {
                log::info!("submitting guess {guess}");
                self.submit_in_flight = true;
                vec![ApiRequest::SubmitGuess(guess)]
            }
            InputAction::Reset => {
                log::info!("starting a new game");
                vec![ApiRequest::ResetGame]
            }
        }
    }

    fn open_popup(&mut self, now: Duration) -> Vec<ApiRequest> {
        if self.popup.open(now) {
            vec![ApiRequest::FetchStats]
        } else {
            Vec::new()
        }
    }

    /// Open the popup on a finished game; stats are re-fetched even if it
    /// was already open, since the result just changed them
    fn show_result(&mut self, now: Duration) -> ApiRequest {
        self.popup.open(now);
        ApiRequest::FetchStats
    }

    fn on_response(
        &mut self,
        request: ApiRequest,
        response: ApiResponse,
        now: Duration,
    ) -> Vec<ApiRequest> {
        match (request, response) {
            (ApiRequest::SubmitGuess(_), ApiResponse::Game(board)) => {
                self.submit_in_flight = false;
                self.apply_board(board, SyncOrigin::Submission, now)
            }
            (ApiRequest::FetchGame, ApiResponse::Game(board)) => {
                self.apply_board(board, SyncOrigin::Refresh, now)
            }
            (ApiRequest::FetchStats, ApiResponse::Stats(stats)) => {
                self.stats = Some(StatsSummary::from_snapshot(&stats));
                Vec::new()
            }
            (ApiRequest::ResetGame, ApiResponse::Acknowledged) => {
                // Full reload: nothing from the old game survives
                *self = Self::new(self.config.clone());
                self.start()
            }
            (ApiRequest::ResetStats, ApiResponse::Acknowledged) => vec![ApiRequest::FetchStats],
            (request, response) => {
                log::warn!("unexpected response to {request}: {response:?}");
                Vec::new()
            }
        }
    }

    fn apply_board(&mut self, board: Board, origin: SyncOrigin, now: Duration) -> Vec<ApiRequest> {
        let previous_rows = self.state.board().rows();
        let outcome = self.state.apply_sync(board, origin);
        let rows = self.state.board().rows();
        let mut requests = Vec::new();

        if outcome.first_sync {
            log::info!("game loaded with {rows} guesses");
            self.reconciler.render_immediate(&self.state);
            if outcome.is_terminal {
                requests.push(self.show_result(now));
            }
        } else if outcome.was_new_guess {
            let last = rows - 1;
            self.reconciler
                .paint_rows(&self.state, previous_rows..last);
            let board = self.state.board();
            if let (Some(letters), Some(evals)) =
                (board.guesses().get(last), board.evaluations().get(last))
            {
                let (letters, evals) = (*letters, *evals);
                self.reconciler
                    .reveal(last, &letters, &evals, outcome.is_terminal, now);
            }
        } else if outcome.rejected {
            log::info!("guess rejected by server");
            self.reconciler.shake(self.state.cursor().current_row, now);
        } else if previous_rows != rows || !self.reconciler.is_busy() {
            self.reconciler.render_immediate(&self.state);
        }

        self.reconciler.sync_cursor(&self.state);
        requests
    }
}
