// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::Transformation;

/// The normalized rectangle of the image currently visible.
///
/// Always satisfies `0 <= left <= right <= 1` and `0 <= top <= bottom <= 1`.
/// Near the right/bottom edge the area is cut short rather than shifted, so
/// it may be smaller than [`VisibleArea::size`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleArea {
    size: f64,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Default for VisibleArea {
    /// The whole image.
    fn default() -> Self {
        Self::from_transformation(&Transformation::default())
    }
}

impl VisibleArea {
    /// Derives the visible area from a transformation.
    #[must_use]
    pub fn from_transformation(t: &Transformation) -> Self {
        let size = 1.0 / t.zoom();
        let left = (t.pan_x() - size / 2.0).clamp(0.0, 1.0);
        let top = (t.pan_y() - size / 2.0).clamp(0.0, 1.0);
        Self {
            size,
            left,
            top,
            right: (left + size).min(1.0),
            bottom: (top + size).min(1.0),
        }
    }

    /// Nominal extent on each axis, `1 / zoom`.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// The area as a rectangle in normalized image space.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::VisibleArea;
    use crate::Transformation;

    fn area(x: f64, y: f64, zoom: f64) -> VisibleArea {
        let mut t = Transformation::default();
        t.set_zoom(zoom, 100.0);
        t.set_pan(x, y);
        VisibleArea::from_transformation(&t)
    }

    #[test]
    fn unzoomed_area_is_whole_image() {
        let a = VisibleArea::default();
        assert_eq!(a.size(), 1.0);
        assert_eq!((a.left(), a.top(), a.right(), a.bottom()), (0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn centered_area_at_zoom_four() {
        let a = area(0.5, 0.5, 4.0);
        assert_eq!(a.size(), 0.25);
        assert_eq!(a.left(), 0.375);
        assert_eq!(a.right(), 0.625);
    }

    #[test]
    fn area_is_cut_at_far_edges() {
        let a = area(1.0, 1.0, 2.0);
        assert_eq!(a.left(), 0.75);
        assert_eq!(a.right(), 1.0);
        assert_eq!(a.top(), 0.75);
        assert_eq!(a.bottom(), 1.0);
    }

    #[test]
    fn area_is_cut_at_near_edges() {
        let a = area(0.0, 0.1, 2.0);
        assert_eq!(a.left(), 0.0);
        assert_eq!(a.right(), 0.5);
        assert_eq!(a.top(), 0.0);
    }

    #[test]
    fn rect_matches_edges() {
        let a = area(0.5, 0.5, 2.0);
        let r = a.to_rect();
        assert_eq!(r.x0, a.left());
        assert_eq!(r.y1, a.bottom());
    }
}
