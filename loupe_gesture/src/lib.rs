// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_gesture --heading-base-level=0

//! Loupe Gesture: turn raw pointer, touch and wheel streams into gestures.
//!
//! A [`GestureRecognizer`] consumes [`InputEvent`]s and produces a small set
//! of semantic [`Gesture`]s:
//!
//! - [`Gesture::Drag`] for every move while a pointer is down,
//! - one of the four swipes when a pointer is released far enough from where
//!   it went down,
//! - [`Gesture::DoubleTap`] when a release lands close in space and time to
//!   the previous one,
//! - [`Gesture::Pinch`] from wheel notches, native pinch events or two
//!   tracked touch points,
//! - [`Gesture::Twist`] from native rotate events.
//!
//! The recognizer knows nothing about what the gestures drive. Callers either
//! read the returned [`Response`] or pass a [`GestureHandler`] whose methods
//! default to no-ops.
//!
//! ## Swipe example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::{Gesture, GestureConfig, GestureRecognizer, InputEvent, PointerSample};
//!
//! let mut gestures = GestureRecognizer::new(GestureConfig::default());
//!
//! gestures.handle(&InputEvent::Down(PointerSample::at(Point::new(100.0, 100.0))), 0).unwrap();
//! gestures.handle(&InputEvent::Move(PointerSample::at(Point::new(160.0, 100.0))), 16).unwrap();
//! let response = gestures.handle(&InputEvent::Up, 32).unwrap();
//!
//! match response.gestures.as_slice() {
//!     [Gesture::SwipeRight(swipe)] => assert_eq!(swipe.distance, 60.0),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Timing
//!
//! The recognizer never reads a clock. Every call to
//! [`GestureRecognizer::handle`] carries the current time in milliseconds,
//! which keeps double-tap detection deterministic under test.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod event;
mod gesture;
mod multi;
mod pointer;
mod recognizer;
mod single;
mod track;

pub use config::{GestureConfig, MultiTouchMode};
pub use event::InputEvent;
pub use gesture::{Drag, Gesture, GestureHandler, GestureKinds, Pinch, Swipe, Tap, Twist};
pub use pointer::{InputError, PointerSample, TargetId, read_pointer_position};
pub use recognizer::{GestureRecognizer, Response};
pub use track::PointerTrack;
