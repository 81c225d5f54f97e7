//! Client configuration
//!
//! Every tunable lives here with a `Default` matching the reference web client.

use crate::core::COLS;
use crate::sync::FailurePolicy;
use std::time::Duration;

/// Server used when neither `--server` nor `WORDLE_SERVER` is given
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Durations of the board animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// Half of one tile flip, also the stagger unit of the reveal cascade
    pub flip_delay: Duration,
    /// Length of the invalid-input shake
    pub shake: Duration,
    /// Wait before a typed tile grows
    pub pulse_delay: Duration,
    /// How long a typed tile stays enlarged
    pub pulse_hold: Duration,
    /// Popup slide in/out
    pub popup_transition: Duration,
}

impl AnimationTiming {
    /// Full reveal cascade: two flip halves per tile plus one trailing delay
    #[must_use]
    pub fn cascade_total(&self) -> Duration {
        self.flip_delay * (COLS as u32 * 2) + self.flip_delay
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            flip_delay: Duration::from_millis(200),
            shake: Duration::from_millis(500),
            pulse_delay: Duration::from_millis(20),
            pulse_hold: Duration::from_millis(50),
            popup_transition: Duration::from_millis(500),
        }
    }
}

/// Whether a guess may be submitted while an earlier one is unanswered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitGuard {
    /// Ignore board input until the pending submission completes or fails
    #[default]
    BlockWhileInFlight,
    /// Leave ordering to the server
    Allow,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub request_timeout: Duration,
    pub timing: AnimationTiming,
    pub failure_policy: FailurePolicy,
    pub submit_guard: SubmitGuard,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            timing: AnimationTiming::default(),
            failure_policy: FailurePolicy::default(),
            submit_guard: SubmitGuard::default(),
        }
    }
}
