//! Press/release latch
//!
//! Holding a key produces a stream of repeat events; only the first one of
//! each physical press should act.

use super::KeyId;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
pub struct KeyLatch {
    held: FxHashSet<KeyId>,
}

impl KeyLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key-down; `true` only if the key was not already held
    pub fn press(&mut self, key: KeyId) -> bool {
        self.held.insert(key)
    }

    /// Register a key-up
    pub fn release(&mut self, key: KeyId) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    #[must_use]
    pub fn is_held(&self, key: KeyId) -> bool {
        self.held.contains(&key)
    }
}
