// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::{Dimensions, Overlay, TransformRequest, Transformation, VisibleArea};

/// Mutable view state of one viewer: transformation, measured dimensions,
/// and the last computed visible area.
///
/// The visible area is **not** refreshed by pan/zoom/rotate; call
/// [`ViewState::update_area`] when the tile set is about to be reconciled.
/// This keeps high-rate input cheap.
#[derive(Clone, Debug)]
pub struct ViewState {
    transformation: Transformation,
    dimensions: Dimensions,
    area: VisibleArea,
}

impl ViewState {
    /// Creates a centered, unzoomed view over `dimensions`.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        let transformation = Transformation::default();
        Self {
            transformation,
            dimensions,
            area: VisibleArea::from_transformation(&transformation),
        }
    }

    /// Current transformation.
    #[must_use]
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// Current dimensions.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Visible area as of the last [`ViewState::update_area`].
    #[must_use]
    pub fn area(&self) -> &VisibleArea {
        &self.area
    }

    /// Maximum zoom for the current dimensions.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.dimensions.max_zoom()
    }

    /// Replaces the dimensions and re-clamps the zoom into the new range.
    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
        self.transformation.clamp_zoom(dimensions.max_zoom());
    }

    /// Moves the pan center to `(x, y)`.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        self.transformation.set_pan(x, y);
    }

    /// Moves the pan center by `(dx, dy)`.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let pan = self.transformation.pan();
        self.transformation.set_pan(pan.x + dx, pan.y + dy);
    }

    /// Sets the zoom factor.
    pub fn zoom_to(&mut self, zoom: f64) {
        self.transformation.set_zoom(zoom, self.max_zoom());
    }

    /// Adds `dz` to the zoom factor.
    pub fn zoom_by(&mut self, dz: f64) {
        self.zoom_to(self.transformation.zoom() + dz);
    }

    /// Multiplies the zoom factor by `factor`.
    pub fn zoom_by_factor(&mut self, factor: f64) {
        self.zoom_to(self.transformation.zoom() * factor);
    }

    /// Sets the rotation in degrees.
    pub fn rotate_to(&mut self, degrees: f64) {
        self.transformation.set_rotate(degrees);
    }

    /// Adds `dr` degrees to the rotation.
    pub fn rotate_by(&mut self, dr: f64) {
        self.rotate_to(self.transformation.rotate() + dr);
    }

    /// Applies a partial transformation.
    pub fn apply(&mut self, request: &TransformRequest) {
        let max_zoom = self.max_zoom();
        self.transformation.apply(request, max_zoom);
    }

    /// Recomputes the visible area from the current transformation.
    pub fn update_area(&mut self) -> VisibleArea {
        self.area = VisibleArea::from_transformation(&self.transformation);
        self.area
    }

    /// Visual backdrop transform for the current transformation.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        Overlay::from_transformation(&self.transformation)
    }

    /// Normalized image point under a container pixel.
    #[must_use]
    pub fn image_point_at(&self, view_pt: Point) -> Point {
        self.transformation
            .view_point_to_image(view_pt, self.dimensions.viewport())
    }

    /// `true` while the zoom can still grow.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.transformation.zoom() < self.max_zoom()
    }

    /// `true` while the zoom can still shrink.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.transformation.zoom() > 1.0
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewStateDebugInfo {
        ViewStateDebugInfo {
            transformation: self.transformation,
            dimensions: self.dimensions,
            area: self.area,
            max_zoom: self.max_zoom(),
        }
    }
}

/// Debug snapshot of a [`ViewState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewStateDebugInfo {
    /// Current transformation.
    pub transformation: Transformation,
    /// Current dimensions.
    pub dimensions: Dimensions,
    /// Last computed visible area.
    pub area: VisibleArea,
    /// Derived maximum zoom.
    pub max_zoom: f64,
}
