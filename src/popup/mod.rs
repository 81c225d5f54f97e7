//! Statistics popup: derived numbers, text and visibility

mod messages;
mod overlay;
mod summary;

pub use messages::{Feedback, Outcome, feedback};
pub use overlay::{Popup, PopupPhase, Surface};
pub use summary::StatsSummary;
