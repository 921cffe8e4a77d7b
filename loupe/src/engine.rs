// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport tile engine: view state, redraw scheduling and tile upkeep.

use loupe_gesture::{Drag, GestureHandler, Pinch, Tap, Twist};
use loupe_tiles::{ReconcileReport, TileRegistry, TileRegistryDebugInfo};
use loupe_timing::{Clock, Throttle, TimerQueue};
use loupe_view::{
    DimensionsError, TransformRequest, Transformation, ViewState, ViewStateDebugInfo, VisibleArea,
};

use crate::{Config, Error, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    /// Re-measure and redraw after a smooth transform.
    Refresh,
    /// Reconcile tiles once input settles.
    Reconcile,
}

/// Owns the view state and the tile registry of one viewer.
///
/// Every pan/zoom/rotate operation clamps, updates the backdrop overlay at
/// most once per `redraw_throttle_ms`, and (re)starts a `reconcile_delay_ms`
/// wait after which tiles are reconciled. Nothing runs on its own: the host
/// calls [`TileEngine::poll`] when [`TileEngine::next_deadline`] has passed.
///
/// Tile changes, overlay updates and measurement requests go to the
/// [`Surface`]; time comes from the [`Clock`].
///
/// # Example
///
/// ```
/// use kurbo::Size;
/// use loupe::{Config, Surface, TileEngine};
/// use loupe_tiles::TileSink;
/// use loupe_timing::ManualClock;
/// use loupe_view::{Dimensions, DimensionsError};
///
/// struct Headless;
/// impl TileSink for Headless {}
/// impl Surface for Headless {
///     fn measure(&mut self) -> Result<Dimensions, DimensionsError> {
///         Dimensions::new(Size::new(800.0, 600.0), Size::new(4000.0, 3000.0))
///     }
/// }
///
/// let clock = ManualClock::new(0);
/// let mut engine = TileEngine::new(Config::default(), Headless, &clock).unwrap();
/// engine.zoom_to(3.0);
///
/// // Tiles wait for input to settle.
/// assert_eq!(engine.poll(), None);
/// clock.advance(300);
/// let report = engine.poll().unwrap();
/// assert_eq!(report.level, 3);
/// assert!(report.created > 0);
/// ```
#[derive(Debug)]
pub struct TileEngine<S, C> {
    config: Config,
    view: ViewState,
    tiles: TileRegistry,
    surface: S,
    clock: C,
    throttle: Throttle,
    timers: TimerQueue<Timer>,
    transitioning: bool,
}

impl<S: Surface, C: Clock> TileEngine<S, C> {
    /// Measures the surface and draws the initial, unzoomed view.
    ///
    /// Tiles are reconciled after the usual delay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimensions`] if the surface cannot be measured.
    pub fn new(config: Config, mut surface: S, clock: C) -> Result<Self, Error> {
        let dimensions = surface.measure()?;
        let mut engine = Self {
            view: ViewState::new(dimensions),
            tiles: TileRegistry::new(config.tile_config(), config.tile_source()),
            throttle: Throttle::new(config.redraw_throttle_ms),
            timers: TimerQueue::new(),
            transitioning: false,
            config,
            surface,
            clock,
        };
        engine.refresh_controls();
        engine.redraw();
        Ok(engine)
    }

    /// Options this engine was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current transformation.
    #[must_use]
    pub fn transformation(&self) -> &Transformation {
        self.view.transformation()
    }

    /// Visible area as of the last reconciliation.
    #[must_use]
    pub fn area(&self) -> &VisibleArea {
        self.view.area()
    }

    /// Live tiles.
    #[must_use]
    pub fn tiles(&self) -> &TileRegistry {
        &self.tiles
    }

    /// The rendering host.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The rendering host, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current time according to the engine's clock.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    /// `true` while a smooth transition started by [`TileEngine::transform`]
    /// has not been finished.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// `true` while the zoom can still grow.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.view.can_zoom_in()
    }

    /// `true` while the zoom can still shrink.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.view.can_zoom_out()
    }

    /// Moves the pan center to `(x, y)`.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        self.view.pan_to(x, y);
        self.redraw();
    }

    /// Moves the pan center by `(dx, dy)` in image fractions.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.view.pan_by(dx, dy);
        self.redraw();
    }

    /// Sets the zoom factor.
    pub fn zoom_to(&mut self, zoom: f64) {
        self.view.zoom_to(zoom);
        self.redraw();
    }

    /// Adds `dz` to the zoom factor.
    pub fn zoom_by(&mut self, dz: f64) {
        self.view.zoom_by(dz);
        self.redraw();
    }

    /// Multiplies the zoom factor by `factor`.
    pub fn zoom_by_factor(&mut self, factor: f64) {
        self.view.zoom_by_factor(factor);
        self.redraw();
    }

    /// Sets the rotation in degrees.
    pub fn rotate_to(&mut self, degrees: f64) {
        self.view.rotate_to(degrees);
        self.redraw();
    }

    /// Adds `dr` degrees to the rotation.
    pub fn rotate_by(&mut self, dr: f64) {
        self.view.rotate_by(dr);
        self.redraw();
    }

    /// Applies a partial transformation with a smooth transition.
    ///
    /// The values are clamped and stored at once; the surface is asked to
    /// animate, and the redraw runs on the next [`TileEngine::poll`].
    pub fn transform(&mut self, request: &TransformRequest) {
        self.view.apply(request);
        self.transitioning = true;
        self.surface.set_transition(true);
        self.timers.schedule(Timer::Refresh, self.clock.now());
    }

    /// Turns the smooth transition off again; call when the host's animation
    /// has ended.
    pub fn finish_transition(&mut self) {
        self.transitioning = false;
        self.surface.set_transition(false);
    }

    /// Updates the overlay (throttled) and restarts the reconciliation wait.
    pub fn redraw(&mut self) {
        let now = self.clock.now();
        if self.throttle.try_fire(now) {
            self.surface.set_overlay(&self.view.overlay());
        }
        self.timers.schedule(
            Timer::Reconcile,
            now.saturating_add(self.config.reconcile_delay_ms),
        );
    }

    /// Re-measures the surface after its container changed size, then
    /// redraws.
    ///
    /// A new container size invalidates every tile, since the grid then maps
    /// keys to different regions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimensions`] if the surface cannot be measured; the
    /// previous dimensions stay in effect.
    pub fn on_resize(&mut self) -> Result<(), Error> {
        let measured = self.remeasure();
        self.refresh_controls();
        self.redraw();
        measured.map_err(Error::from)
    }

    /// Time of the next pending timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Runs every timer that is due.
    ///
    /// Returns the report of the reconciliation pass, if one ran.
    pub fn poll(&mut self) -> Option<ReconcileReport> {
        let mut report = None;
        while let Some(timer) = self.timers.pop_due(self.clock.now()) {
            match timer {
                Timer::Refresh => {
                    if self.remeasure().is_ok() {
                        self.refresh_controls();
                    }
                    self.redraw();
                }
                Timer::Reconcile => report = Some(self.reconcile()),
            }
        }
        report
    }

    /// Reconciles tiles against the current view right away, cancelling any
    /// pending wait.
    pub fn reconcile(&mut self) -> ReconcileReport {
        self.timers.cancel(Timer::Reconcile);
        self.refresh_controls();
        self.surface.set_overlay(&self.view.overlay());
        let area = self.view.update_area();
        let zoom = self.view.transformation().zoom();
        let viewport = self.view.dimensions().viewport();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            zoom,
            pan_x = self.view.transformation().pan_x(),
            pan_y = self.view.transformation().pan_y(),
            left = area.left(),
            top = area.top(),
            right = area.right(),
            bottom = area.bottom(),
            "reconciling tiles"
        );
        self.tiles
            .reconcile(viewport, zoom, &area, &mut self.surface)
    }

    /// Returns a snapshot of the engine's state.
    #[must_use]
    pub fn debug_info(&self) -> EngineDebugInfo {
        EngineDebugInfo {
            view: self.view.debug_info(),
            tiles: self.tiles.debug_info(),
            reconcile_deadline: self.timers.deadline(Timer::Reconcile),
            transitioning: self.transitioning,
        }
    }

    fn refresh_controls(&mut self) {
        self.surface
            .set_zoom_controls(self.view.can_zoom_in(), self.view.can_zoom_out());
    }

    fn remeasure(&mut self) -> Result<(), DimensionsError> {
        let dimensions = match self.surface.measure() {
            Ok(d) => d,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "measurement failed, keeping previous dimensions");
                return Err(e);
            }
        };
        if dimensions.viewport() != self.view.dimensions().viewport() {
            let _evicted = self.tiles.clear(&mut self.surface);
            #[cfg(feature = "tracing")]
            tracing::debug!(evicted = _evicted, "container resized, tiles dropped");
        }
        self.view.set_dimensions(dimensions);
        Ok(())
    }
}

/// Maps gestures onto the transformation.
///
/// Positions are container pixels. Drags pan by the dragged distance at the
/// current zoom, pinches zoom proportionally to the current zoom, twists
/// rotate only when `allow_rotation` is set, and a double tap smoothly
/// centres and zooms on the tapped point.
impl<S: Surface, C: Clock> GestureHandler for TileEngine<S, C> {
    fn drag(&mut self, drag: &Drag) {
        let viewport = self.view.dimensions().viewport();
        let zoom = self.view.transformation().zoom();
        self.pan_by(
            -drag.delta.x / viewport.width / zoom,
            -drag.delta.y / viewport.height / zoom,
        );
    }

    fn pinch(&mut self, pinch: &Pinch) {
        let zoom = self.view.transformation().zoom();
        self.zoom_by(pinch.scale * zoom);
    }

    fn twist(&mut self, twist: &Twist) {
        if self.config.allow_rotation {
            self.rotate_by(twist.rotation);
        }
    }

    fn double_tap(&mut self, tap: &Tap) {
        let target = self.view.image_point_at(tap.position);
        let zoom = self.view.transformation().zoom() * self.config.double_tap_zoom_factor;
        self.transform(&TransformRequest::new().pan(target.x, target.y).zoom(zoom));
    }
}

/// Debug snapshot returned by [`TileEngine::debug_info`].
#[derive(Clone, Copy, Debug)]
pub struct EngineDebugInfo {
    /// View state.
    pub view: ViewStateDebugInfo,
    /// Tile registry bookkeeping.
    pub tiles: TileRegistryDebugInfo,
    /// When tiles will be reconciled, if a wait is running.
    pub reconcile_deadline: Option<u64>,
    /// Whether a smooth transition is active.
    pub transitioning: bool,
}
