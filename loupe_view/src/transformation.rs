// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Upper bound for [`Transformation::rotate`], in degrees.
pub const MAX_ROTATE: f64 = 359.0;

/// Pan, zoom and rotation of a view over a normalized image.
///
/// Every field stays inside its range after any mutation:
/// - pan center in `[0, 1] × [0, 1]`,
/// - zoom in `[1, max_zoom]`,
/// - rotation in `[0, 359]` degrees.
///
/// Mutators clamp instead of rejecting. A non-finite argument is ignored and
/// the previous value is kept, since clamping NaN is meaningless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    pan: Point,
    zoom: f64,
    rotate: f64,
}

impl Default for Transformation {
    /// Centered, unzoomed, unrotated.
    fn default() -> Self {
        Self {
            pan: Point::new(0.5, 0.5),
            zoom: 1.0,
            rotate: 0.0,
        }
    }
}

impl Transformation {
    /// Returns the pan center in normalized image coordinates.
    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Horizontal pan center.
    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan.x
    }

    /// Vertical pan center.
    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan.y
    }

    /// Zoom factor; `1.0` shows the whole image.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Rotation in degrees.
    #[must_use]
    pub fn rotate(&self) -> f64 {
        self.rotate
    }

    /// Moves the pan center, clamping each axis to `[0, 1]`.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        if x.is_finite() {
            self.pan.x = x.clamp(0.0, 1.0);
        }
        if y.is_finite() {
            self.pan.y = y.clamp(0.0, 1.0);
        }
    }

    /// Sets the zoom, clamping to `[1, max_zoom]`.
    ///
    /// A `max_zoom` below one locks the zoom at one.
    pub fn set_zoom(&mut self, zoom: f64, max_zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(1.0, upper_zoom(max_zoom));
        }
    }

    /// Sets the rotation, clamping to `[0, 359]`.
    pub fn set_rotate(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.rotate = degrees.clamp(0.0, MAX_ROTATE);
        }
    }

    /// Re-applies the zoom bound, e.g. after the container was resized.
    pub fn clamp_zoom(&mut self, max_zoom: f64) {
        self.zoom = self.zoom.clamp(1.0, upper_zoom(max_zoom));
    }

    /// Applies every field present in `request`, with the usual clamping.
    pub fn apply(&mut self, request: &TransformRequest, max_zoom: f64) {
        self.set_pan(
            request.pan_x.unwrap_or(self.pan.x),
            request.pan_y.unwrap_or(self.pan.y),
        );
        if let Some(zoom) = request.zoom {
            self.set_zoom(zoom, max_zoom);
        }
        if let Some(rotate) = request.rotate {
            self.set_rotate(rotate);
        }
    }

    /// Maps a point in container pixels to the normalized image point under it.
    ///
    /// The container center shows the pan center; each container pixel spans
    /// `1 / (extent * zoom)` of the image. Rotation is not taken into account.
    #[must_use]
    pub fn view_point_to_image(&self, pt: Point, viewport: Size) -> Point {
        Point::new(
            (pt.x / viewport.width - 0.5) / self.zoom + self.pan.x,
            (pt.y / viewport.height - 0.5) / self.zoom + self.pan.y,
        )
    }
}

fn upper_zoom(max_zoom: f64) -> f64 {
    if max_zoom.is_finite() {
        max_zoom.max(1.0)
    } else {
        1.0
    }
}

/// A partial transformation: any subset of pan, zoom and rotation.
///
/// ```rust
/// use loupe_view::{TransformRequest, Transformation};
///
/// let mut t = Transformation::default();
/// t.apply(&TransformRequest::new().zoom(3.0).pan_x(0.2), 4.0);
/// assert_eq!(t.zoom(), 3.0);
/// assert_eq!(t.pan_x(), 0.2);
/// assert_eq!(t.pan_y(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformRequest {
    /// New horizontal pan center.
    pub pan_x: Option<f64>,
    /// New vertical pan center.
    pub pan_y: Option<f64>,
    /// New zoom factor.
    pub zoom: Option<f64>,
    /// New rotation in degrees.
    pub rotate: Option<f64>,
}

impl TransformRequest {
    /// An empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a horizontal pan center.
    #[must_use]
    pub fn pan_x(mut self, x: f64) -> Self {
        self.pan_x = Some(x);
        self
    }

    /// Requests a vertical pan center.
    #[must_use]
    pub fn pan_y(mut self, y: f64) -> Self {
        self.pan_y = Some(y);
        self
    }

    /// Requests both pan coordinates.
    #[must_use]
    pub fn pan(self, x: f64, y: f64) -> Self {
        self.pan_x(x).pan_y(y)
    }

    /// Requests a zoom factor.
    #[must_use]
    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Requests a rotation.
    #[must_use]
    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Returns `true` if no field is requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pan_x.is_none() && self.pan_y.is_none() && self.zoom.is_none() && self.rotate.is_none()
    }
}
