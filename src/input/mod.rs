//! Keyboard and mouse input handling

mod controller;
mod key;
mod latch;

pub use controller::{InputAction, InputController};
pub use key::KeyId;
pub use latch::KeyLatch;
