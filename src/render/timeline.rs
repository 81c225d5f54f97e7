//! Ordered queue of timed animation steps

use std::time::Duration;

/// Steps waiting for their due time
///
/// Steps due at the same instant come out in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    steps: Vec<(Duration, u64, T)>,
    next_seq: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> Timeline<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Duration, step: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let pos = self
            .steps
            .partition_point(|&(due, s, _)| (due, s) <= (at, seq));
        self.steps.insert(pos, (at, seq, step));
    }

    /// Remove and return every step due at or before `now`
    pub fn drain_due(&mut self, now: Duration) -> Vec<T> {
        let split = self.steps.partition_point(|&(due, _, _)| due <= now);
        self.steps.drain(..split).map(|(_, _, step)| step).collect()
    }

    /// Remove and return every step regardless of due time
    pub fn drain_all(&mut self) -> Vec<T> {
        self.steps.drain(..).map(|(_, _, step)| step).collect()
    }

    /// Drop steps matching a predicate
    pub fn cancel(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        self.steps.retain(|(_, _, step)| !predicate(step));
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Due time of the earliest pending step
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.steps.first().map(|&(due, _, _)| due)
    }
}
