// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use loupe_gesture::{GestureConfig, MultiTouchMode};
use loupe_tiles::{DEFAULT_TILE_SOURCE_TEMPLATE, TileConfig, TileSource, VisibilityTest};

/// Options of a [`TileEngine`](crate::TileEngine) and [`Viewer`](crate::Viewer).
///
/// Set once at construction. With the `serde` feature, missing fields fall
/// back to their defaults when deserializing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Minimum travel of a swipe, in pixels.
    pub swipe_threshold: f64,
    /// Pinch scale per wheel notch.
    pub wheel_increment: f64,
    /// Suppress platform scrolling while dragging.
    pub cancel_default_touch_behavior: bool,
    /// Suppress platform zooming during pinch, twist and wheel.
    pub cancel_default_gesture_behavior: bool,
    /// Maximum number of live tiles.
    pub tile_cache_capacity: usize,
    /// Nominal tile edge in pixels.
    pub tile_size: u32,
    /// Apply twist gestures to the rotation.
    pub allow_rotation: bool,
    /// Tile URL template; see [`TileSource`].
    pub tile_source_template: String,
    /// Image reference substituted for `{src}`.
    pub image_source: String,
    /// Minimum time between two overlay updates, in ms.
    pub redraw_throttle_ms: u64,
    /// Quiet time before tiles are reconciled, in ms.
    pub reconcile_delay_ms: u64,
    /// Zoom multiplier of a double tap.
    pub double_tap_zoom_factor: f64,
    /// Which live tiles are rendered.
    pub visibility: VisibilityTest,
    /// Source of two-finger input.
    pub multi_touch_mode: MultiTouchMode,
}

impl Default for Config {
    fn default() -> Self {
        let gestures = GestureConfig::default();
        let tiles = TileConfig::default();
        Self {
            swipe_threshold: gestures.swipe_threshold,
            wheel_increment: gestures.wheel_increment,
            cancel_default_touch_behavior: gestures.cancel_default_touch_behavior,
            cancel_default_gesture_behavior: gestures.cancel_default_gesture_behavior,
            tile_cache_capacity: tiles.capacity,
            tile_size: tiles.tile_size,
            allow_rotation: false,
            tile_source_template: String::from(DEFAULT_TILE_SOURCE_TEMPLATE),
            image_source: String::new(),
            redraw_throttle_ms: 20,
            reconcile_delay_ms: 300,
            double_tap_zoom_factor: 1.5,
            visibility: tiles.visibility,
            multi_touch_mode: gestures.multi_touch_mode,
        }
    }
}

impl Config {
    /// Sets the image reference substituted for `{src}`.
    #[must_use]
    pub fn with_image_source(mut self, src: impl Into<String>) -> Self {
        self.image_source = src.into();
        self
    }

    /// Sets the tile URL template.
    #[must_use]
    pub fn with_tile_source_template(mut self, template: impl Into<String>) -> Self {
        self.tile_source_template = template.into();
        self
    }

    /// Sets the tile cache capacity.
    #[must_use]
    pub fn with_tile_cache_capacity(mut self, capacity: usize) -> Self {
        self.tile_cache_capacity = capacity;
        self
    }

    /// Sets the nominal tile edge.
    #[must_use]
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Enables or disables rotation by twist gestures.
    #[must_use]
    pub fn with_allow_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

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

    /// Sets both default-behavior suppression flags.
    #[must_use]
    pub fn with_cancel_default_behavior(mut self, touch: bool, gesture: bool) -> Self {
        self.cancel_default_touch_behavior = touch;
        self.cancel_default_gesture_behavior = gesture;
        self
    }

    /// Sets the overlay throttle and reconciliation delay.
    #[must_use]
    pub fn with_timing(mut self, redraw_throttle_ms: u64, reconcile_delay_ms: u64) -> Self {
        self.redraw_throttle_ms = redraw_throttle_ms;
        self.reconcile_delay_ms = reconcile_delay_ms;
        self
    }

    /// Sets the double-tap zoom multiplier.
    #[must_use]
    pub fn with_double_tap_zoom_factor(mut self, factor: f64) -> Self {
        self.double_tap_zoom_factor = factor;
        self
    }

    /// Sets the tile visibility test.
    #[must_use]
    pub fn with_visibility(mut self, visibility: VisibilityTest) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the two-finger input source.
    #[must_use]
    pub fn with_multi_touch_mode(mut self, mode: MultiTouchMode) -> Self {
        self.multi_touch_mode = mode;
        self
    }

    /// Recognizer settings derived from these options.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig::default()
            .with_swipe_threshold(self.swipe_threshold)
            .with_wheel_increment(self.wheel_increment)
            .with_cancel_default_touch_behavior(self.cancel_default_touch_behavior)
            .with_cancel_default_gesture_behavior(self.cancel_default_gesture_behavior)
            .with_multi_touch_mode(self.multi_touch_mode)
    }

    /// Tile registry settings derived from these options.
    #[must_use]
    pub fn tile_config(&self) -> TileConfig {
        TileConfig {
            tile_size: self.tile_size,
            capacity: self.tile_cache_capacity,
            visibility: self.visibility,
        }
    }

    /// Tile URL builder derived from these options.
    #[must_use]
    pub fn tile_source(&self) -> TileSource {
        TileSource::new(self.tile_source_template.clone(), self.image_source.clone())
    }
}

#[cfg(test)]
mod tests {
    use loupe_gesture::MultiTouchMode;
    use loupe_tiles::VisibilityTest;

    use super::Config;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.tile_cache_capacity, 128);
        assert_eq!(c.tile_size, 128);
        assert!(!c.allow_rotation);
        assert_eq!(c.redraw_throttle_ms, 20);
        assert_eq!(c.reconcile_delay_ms, 300);
        assert_eq!(c.double_tap_zoom_factor, 1.5);
        assert_eq!(c.visibility, VisibilityTest::Strict);
        assert!(c.tile_source_template.contains("{width}"));
    }

    #[test]
    fn derived_settings_follow_options() {
        let c = Config::default()
            .with_swipe_threshold(80.0)
            .with_multi_touch_mode(MultiTouchMode::Native)
            .with_tile_cache_capacity(16)
            .with_image_source("big.jpg")
            .with_tile_source_template("{src}");
        let g = c.gesture_config();
        assert_eq!(g.swipe_threshold, 80.0);
        assert_eq!(g.multi_touch_mode, MultiTouchMode::Native);
        assert_eq!(c.tile_config().capacity, 16);
        assert_eq!(c.tile_source().src(), "big.jpg");
    }
}
