// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_gesture::{GestureRecognizer, InputEvent, Response};
use loupe_tiles::ReconcileReport;
use loupe_timing::Clock;

use crate::{Config, Error, Surface, TileEngine};

/// Zoom multiplier of the zoom-in control.
pub const ZOOM_IN_FACTOR: f64 = 1.5;

/// Zoom multiplier of the zoom-out control.
pub const ZOOM_OUT_FACTOR: f64 = 0.75;

/// A [`TileEngine`] driven by a [`GestureRecognizer`].
///
/// The recognizer never touches the view directly; every gesture goes
/// through the engine's public operations.
#[derive(Debug)]
pub struct Viewer<S, C> {
    engine: TileEngine<S, C>,
    gestures: GestureRecognizer,
}

impl<S: Surface, C: Clock> Viewer<S, C> {
    /// Builds the engine and a recognizer configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimensions`] if the surface cannot be measured.
    pub fn new(config: Config, surface: S, clock: C) -> Result<Self, Error> {
        let gestures = GestureRecognizer::new(config.gesture_config());
        Ok(Self {
            engine: TileEngine::new(config, surface, clock)?,
            gestures,
        })
    }

    /// The engine.
    #[must_use]
    pub fn engine(&self) -> &TileEngine<S, C> {
        &self.engine
    }

    /// The engine, mutably, for programmatic pan/zoom/rotate.
    pub fn engine_mut(&mut self) -> &mut TileEngine<S, C> {
        &mut self.engine
    }

    /// The recognizer.
    #[must_use]
    pub fn gestures(&self) -> &GestureRecognizer {
        &self.gestures
    }

    /// Feeds one input event and applies the resulting gestures.
    ///
    /// Positions in the event must be container pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] for a malformed event, which is skipped.
    pub fn handle(&mut self, event: &InputEvent) -> Result<Response, Error> {
        let response = self.gestures.handle(event, self.engine.now())?;
        for gesture in &response.gestures {
            gesture.dispatch(&mut self.engine);
        }
        Ok(response)
    }

    /// Accepts or ignores new gestures.
    pub fn set_gestures_enabled(&mut self, enabled: bool) {
        self.gestures.set_paused(!enabled);
    }

    /// `true` unless gestures are suspended.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        !self.gestures.is_paused()
    }

    /// A zoom control was pressed: suspend gestures until it is released.
    pub fn press_zoom_control(&mut self) {
        self.set_gestures_enabled(false);
    }

    /// The zoom-in control was released.
    pub fn zoom_in(&mut self) {
        self.set_gestures_enabled(true);
        self.engine.zoom_by_factor(ZOOM_IN_FACTOR);
    }

    /// The zoom-out control was released.
    pub fn zoom_out(&mut self) {
        self.set_gestures_enabled(true);
        self.engine.zoom_by_factor(ZOOM_OUT_FACTOR);
    }

    /// See [`TileEngine::on_resize`].
    ///
    /// # Errors
    ///
    /// See [`TileEngine::on_resize`].
    pub fn on_resize(&mut self) -> Result<(), Error> {
        self.engine.on_resize()
    }

    /// See [`TileEngine::next_deadline`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.engine.next_deadline()
    }

    /// See [`TileEngine::poll`].
    pub fn poll(&mut self) -> Option<ReconcileReport> {
        self.engine.poll()
    }
}
