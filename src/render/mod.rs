//! Board rendering model and animation driver
//!
//! Terminal drawing lives in `interactive`; this module only decides what
//! each tile and key should look like at a given instant.

mod board;
mod clock;
mod reconciler;
mod timeline;

pub use board::{BoardView, Flip, TileView};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use reconciler::{Phase, Reconciler, ReconcilerEvent};
pub use timeline::Timeline;
