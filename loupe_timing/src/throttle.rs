// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rate limiter that admits at most one action per interval.
///
/// Unlike a debounce, a throttle never delays anything: a call either fires
/// now or is dropped.
///
/// ```rust
/// use loupe_timing::Throttle;
///
/// let mut throttle = Throttle::new(20);
/// assert!(throttle.try_fire(100));
/// assert!(!throttle.try_fire(110));
/// assert!(!throttle.try_fire(120));
/// assert!(throttle.try_fire(121));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: u64,
    last: Option<u64>,
}

impl Throttle {
    /// Creates a throttle admitting one call per `interval` milliseconds.
    #[must_use]
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns the configured interval.
    #[must_use]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Returns the time of the last admitted call, if any.
    #[must_use]
    pub fn last_fired(&self) -> Option<u64> {
        self.last
    }

    /// Returns `true` and records `now` if strictly more than the interval
    /// has passed since the last admitted call.
    pub fn try_fire(&mut self, now: u64) -> bool {
        let ready = match self.last {
            None => true,
            Some(last) => now.saturating_sub(last) > self.interval,
        };
        if ready {
            self.last = Some(now);
        }
        ready
    }

    /// Forgets the last admitted call so the next one fires unconditionally.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
