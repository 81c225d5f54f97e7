//! Popup visibility
//!
//! ```text
//!   Closed ──open──▶ Opening ──500ms──▶ Open ──close──▶ Closing ──▶ Closed
//! ```
//!
//! The popup panel and the dimmed overlay behind it both animate, and both
//! report when their transition ends. Whichever report comes first finishes
//! the transition; the second one is a no-op.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    Closed,
    Opening { since: Duration },
    Open,
    Closing { since: Duration },
}

/// Element whose transition just ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Panel,
    Overlay,
}

#[derive(Debug, Clone)]
pub struct Popup {
    phase: PopupPhase,
    transition: Duration,
    cleanups: u32,
}

impl Popup {
    #[must_use]
    pub const fn new(transition: Duration) -> Self {
        Self {
            phase: PopupPhase::Closed,
            transition,
            cleanups: 0,
        }
    }

    /// Start opening; `true` when the popup was not already showing
    ///
    /// Callers fetch fresh statistics whenever this returns `true`.
    pub fn open(&mut self, now: Duration) -> bool {
        match self.phase {
            PopupPhase::Closed | PopupPhase::Closing { .. } => {
                log::debug!("opening popup");
                self.phase = PopupPhase::Opening { since: now };
                true
            }
            PopupPhase::Opening { .. } | PopupPhase::Open => false,
        }
    }

    /// Start closing; `false` when it was not showing
    pub fn close(&mut self, now: Duration) -> bool {
        match self.phase {
            PopupPhase::Opening { .. } | PopupPhase::Open => {
                log::debug!("closing popup");
                self.phase = PopupPhase::Closing { since: now };
                true
            }
            PopupPhase::Closed | PopupPhase::Closing { .. } => false,
        }
    }

    /// Open for input purposes, including while sliding in
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.phase, PopupPhase::Opening { .. } | PopupPhase::Open)
    }

    /// Anything to draw at all
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self.phase, PopupPhase::Closed)
    }

    #[must_use]
    pub const fn phase(&self) -> PopupPhase {
        self.phase
    }

    /// Emit transition-end notifications for any transition that has run
    /// its full length
    pub fn advance(&mut self, now: Duration) {
        let since = match self.phase {
            PopupPhase::Opening { since } | PopupPhase::Closing { since } => since,
            PopupPhase::Closed | PopupPhase::Open => return,
        };
        if now.saturating_sub(since) >= self.transition {
            self.transition_end(Surface::Panel);
            self.transition_end(Surface::Overlay);
        }
    }

    /// A surface finished animating; returns `true` if this ran the cleanup
    pub fn transition_end(&mut self, surface: Surface) -> bool {
        match self.phase {
            PopupPhase::Opening { .. } => {
                self.phase = PopupPhase::Open;
                true
            }
            PopupPhase::Closing { .. } => {
                log::debug!("popup closed ({surface:?} transition)");
                self.phase = PopupPhase::Closed;
                self.cleanups += 1;
                true
            }
            PopupPhase::Closed | PopupPhase::Open => false,
        }
    }

    /// How far the popup has slid in, from 0.0 (hidden) to 1.0 (shown)
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        let fraction = |since: Duration| {
            if self.transition.is_zero() {
                1.0
            } else {
                (now.saturating_sub(since).as_secs_f64() / self.transition.as_secs_f64()).min(1.0)
            }
        };
        match self.phase {
            PopupPhase::Closed => 0.0,
            PopupPhase::Open => 1.0,
            PopupPhase::Opening { since } => fraction(since),
            PopupPhase::Closing { since } => 1.0 - fraction(since),
        }
    }

    /// Completed close cleanups
    #[must_use]
    pub const fn cleanups(&self) -> u32 {
        self.cleanups
    }
}
