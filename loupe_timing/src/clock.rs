// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::Cell;

/// Source of monotonic time in milliseconds.
///
/// The absolute value is meaningless; only differences are compared.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// A clock that only moves when told to.
///
/// Interior mutability lets a test keep a shared reference to the clock that
/// a viewer also holds.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Creates a clock reading `start` milliseconds.
    #[must_use]
    pub fn new(start: u64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Sets the clock to an absolute reading.
    ///
    /// Moving backwards is allowed; callers that do so get what they asked for.
    pub fn set(&self, now: u64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.get()
    }
}

/// Wall clock measured from the moment it was created.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: web_time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Creates a clock reading zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: web_time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
