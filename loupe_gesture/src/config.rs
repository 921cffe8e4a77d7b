// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::GestureKinds;

/// Where two-finger pinch/rotate input comes from.
///
/// Hosts probe the platform once and pick a mode; the recognizer never
/// re-checks per event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MultiTouchMode {
    /// The platform delivers native gesture events with cumulative scale and
    /// rotation ([`InputEvent::GestureStart`] and friends).
    ///
    /// [`InputEvent::GestureStart`]: crate::InputEvent::GestureStart
    Native,
    /// Derive pinch from the spread of two tracked touch points. No twist.
    #[default]
    TouchFallback,
}

/// Thresholds and switches for a [`GestureRecognizer`].
///
/// [`GestureRecognizer`]: crate::GestureRecognizer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Minimum net travel for a release to count as a swipe.
    pub swipe_threshold: f64,
    /// Pinch scale reported per wheel notch.
    pub wheel_increment: f64,
    /// Suppress the platform's scrolling while a pointer drags.
    pub cancel_default_touch_behavior: bool,
    /// Suppress the platform's zooming during pinch, twist and wheel.
    pub cancel_default_gesture_behavior: bool,
    /// Gestures to report.
    pub kinds: GestureKinds,
    /// Source of two-finger input.
    pub multi_touch_mode: MultiTouchMode,
    /// Maximum per-axis distance between two taps of a double tap.
    pub double_tap_distance: f64,
    /// Lower bound (exclusive) on the time between two taps, in ms.
    pub double_tap_min_ms: u64,
    /// Upper bound (exclusive) on the time between two taps, in ms.
    pub double_tap_max_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            wheel_increment: 0.1,
            cancel_default_touch_behavior: true,
            cancel_default_gesture_behavior: true,
            kinds: GestureKinds::all(),
            multi_touch_mode: MultiTouchMode::default(),
            double_tap_distance: 10.0,
            double_tap_min_ms: 100,
            double_tap_max_ms: 500,
        }
    }
}

impl GestureConfig {
    /// Sets the swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Sets the wheel increment.
    #[must_use]
    pub fn with_wheel_increment(mut self, increment: f64) -> Self {
        self.wheel_increment = increment;
        self
    }

    /// Sets whether drags suppress default platform behavior.
    #[must_use]
    pub fn with_cancel_default_touch_behavior(mut self, cancel: bool) -> Self {
        self.cancel_default_touch_behavior = cancel;
        self
    }

    /// Sets whether pinch/twist/wheel suppress default platform behavior.
    #[must_use]
    pub fn with_cancel_default_gesture_behavior(mut self, cancel: bool) -> Self {
        self.cancel_default_gesture_behavior = cancel;
        self
    }

    /// Restricts the reported gestures.
    #[must_use]
    pub fn with_kinds(mut self, kinds: GestureKinds) -> Self {
        self.kinds = kinds;
        self
    }

    /// Selects the two-finger input source.
    #[must_use]
    pub fn with_multi_touch_mode(mut self, mode: MultiTouchMode) -> Self {
        self.multi_touch_mode = mode;
        self
    }

    /// `true` if any single-pointer gesture is enabled.
    #[must_use]
    pub fn tracks_single(&self) -> bool {
        self.kinds.intersects(GestureKinds::SINGLE)
    }

    /// `true` if pinch or twist is enabled.
    #[must_use]
    pub fn tracks_multi(&self) -> bool {
        self.kinds.intersects(GestureKinds::MULTI)
    }
}
