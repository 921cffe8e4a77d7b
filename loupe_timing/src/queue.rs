// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Keyed one-shot timers.
///
/// Each key is pending at most once. Scheduling a pending key replaces its
/// deadline, so a burst of requests collapses into a single firing after the
/// last one (debounce). Keys fire in deadline order; equal deadlines fire in
/// the order they were scheduled.
///
/// The queue is expected to hold a handful of named timers, so it is a plain
/// vector rather than a heap.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    // Sorted by deadline, stable for ties.
    entries: Vec<(u64, K)>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire at `deadline`, replacing any pending deadline
    /// for the same key.
    pub fn schedule(&mut self, key: K, deadline: u64) {
        self.cancel(key);
        let at = self
            .entries
            .iter()
            .position(|&(d, _)| d > deadline)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, (deadline, key));
    }

    /// Cancels `key`. Returns `true` if it was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        match self.entries.iter().position(|&(_, k)| k == key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `key` is pending.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.entries.iter().any(|&(_, k)| k == key)
    }

    /// Returns the deadline of `key`, if pending.
    #[must_use]
    pub fn deadline(&self, key: K) -> Option<u64> {
        self.entries
            .iter()
            .find(|&&(_, k)| k == key)
            .map(|&(d, _)| d)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|&(d, _)| d)
    }

    /// Removes and returns the earliest key whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<K> {
        match self.entries.first() {
            Some(&(d, key)) if d <= now => {
                self.entries.remove(0);
                Some(key)
            }
            _ => None,
        }
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pending keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Cancels everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
