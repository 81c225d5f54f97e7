//! Command implementations

pub mod reset;
pub mod show;
pub mod stats;

pub use reset::{ResetTarget, reset};
pub use show::{ShowResult, show_game};
pub use stats::fetch_stats;
