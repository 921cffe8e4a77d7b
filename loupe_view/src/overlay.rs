// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::Transformation;

/// Visual transform of the backdrop layer: scale and rotate about the pan
/// center.
///
/// This is what a renderer applies on every input event. It carries no tile
/// information and is cheap to recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    /// Uniform scale, equal to the zoom factor.
    pub scale: f64,
    /// Clockwise rotation in degrees.
    pub rotate_degrees: f64,
    /// Transform origin in normalized container coordinates.
    pub origin: Point,
}

impl Overlay {
    /// Builds the overlay for a transformation.
    #[must_use]
    pub fn from_transformation(t: &Transformation) -> Self {
        Self {
            scale: t.zoom(),
            rotate_degrees: t.rotate(),
            origin: t.pan(),
        }
    }

    /// Returns the overlay as an affine map in container pixels.
    ///
    /// The origin stays fixed; everything else is scaled then rotated around it.
    #[must_use]
    pub fn to_affine(&self, viewport: Size) -> Affine {
        let origin = Vec2::new(self.origin.x * viewport.width, self.origin.y * viewport.height);
        Affine::translate(origin)
            * Affine::rotate(self.rotate_degrees.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::Overlay;
    use crate::Transformation;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn origin_is_fixed_point() {
        let mut t = Transformation::default();
        t.set_zoom(3.0, 10.0);
        t.set_rotate(30.0);
        t.set_pan(0.25, 0.75);
        let overlay = Overlay::from_transformation(&t);
        let viewport = Size::new(800.0, 400.0);
        let origin = Point::new(200.0, 300.0);
        assert!(close(overlay.to_affine(viewport) * origin, origin));
    }

    #[test]
    fn scale_only_moves_points_away_from_origin() {
        let mut t = Transformation::default();
        t.set_zoom(2.0, 10.0);
        let overlay = Overlay::from_transformation(&t);
        let viewport = Size::new(100.0, 100.0);
        let p = overlay.to_affine(viewport) * Point::new(60.0, 50.0);
        assert!(close(p, Point::new(70.0, 50.0)));
    }

    #[test]
    fn identity_when_untransformed() {
        let overlay = Overlay::from_transformation(&Transformation::default());
        assert_eq!(overlay.scale, 1.0);
        assert_eq!(overlay.rotate_degrees, 0.0);
        let p = Point::new(12.0, 34.0);
        assert!(close(overlay.to_affine(Size::new(100.0, 100.0)) * p, p));
    }
}
