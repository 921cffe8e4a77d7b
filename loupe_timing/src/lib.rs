// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Timing: host-agnostic time primitives for single-threaded viewers.
//!
//! Viewers in this workspace never talk to a platform event loop directly.
//! Instead they are handed a [`Clock`] and keep their pending work in small
//! explicit structures that the host polls:
//!
//! - [`Clock`]: a source of monotonic milliseconds. [`ManualClock`] is driven
//!   by hand (tests, simulations); `SystemClock` (feature `std`) reads the
//!   wall clock.
//! - [`Throttle`]: lets an action through at most once per interval.
//! - [`TimerQueue`]: keyed one-shot timers. Scheduling a key that is already
//!   pending moves its deadline, which is exactly debounce semantics.
//!
//! ## Debounce example
//!
//! ```rust
//! use loupe_timing::TimerQueue;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Timer {
//!     Settle,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Timer::Settle, 0 + 300);
//! // A new request arrives before the deadline: restart the wait.
//! timers.schedule(Timer::Settle, 200 + 300);
//!
//! assert_eq!(timers.pop_due(300), None);
//! assert_eq!(timers.pop_due(500), Some(Timer::Settle));
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod queue;
mod throttle;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use queue::TimerQueue;
pub use throttle::Throttle;
