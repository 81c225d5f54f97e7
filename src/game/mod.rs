//! Client-side game state

mod cursor;
mod state;

pub use cursor::{Cursor, Draft, GameFlags};
pub use state::{GameState, SyncOrigin, SyncOutcome};
