// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PointerSample;

/// One raw input event, already stripped of platform specifics.
///
/// Mouse, touch and pointer events all map to `Down`/`Move`/`Up`. A touch
/// event with two points is also read as a two-finger pinch when the
/// recognizer runs in [`MultiTouchMode::TouchFallback`].
///
/// [`MultiTouchMode::TouchFallback`]: crate::MultiTouchMode::TouchFallback
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer went down or a touch started.
    Down(PointerSample),
    /// A pointer or touch moved.
    Move(PointerSample),
    /// A pointer went up or the touches ended.
    Up,
    /// One wheel notch. Positive `delta` scrolls away from the user (zoom in).
    Wheel {
        /// Signed wheel distance; only the sign is used.
        delta: f64,
        /// Where the wheel was turned.
        pointer: PointerSample,
    },
    /// A native pinch/rotate gesture started.
    GestureStart {
        /// Cumulative scale reported by the platform.
        scale: f64,
        /// Cumulative rotation in degrees reported by the platform.
        rotation: f64,
        /// Gesture position.
        pointer: PointerSample,
    },
    /// A native pinch/rotate gesture changed.
    GestureChange {
        /// Cumulative scale reported by the platform.
        scale: f64,
        /// Cumulative rotation in degrees reported by the platform.
        rotation: f64,
        /// Gesture position.
        pointer: PointerSample,
    },
    /// A native pinch/rotate gesture ended.
    GestureEnd,
}
