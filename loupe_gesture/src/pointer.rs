// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer data and coordinate extraction.

use core::fmt;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Opaque identifier of the element an interaction started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Coordinates carried by one raw input event.
///
/// Platforms report positions in different places; a sample keeps all of
/// them and [`read_pointer_position`] picks the most specific one. Touch
/// points are listed in platform order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Active touch points, if the event came from a touch surface.
    pub touches: SmallVec<[Point; 2]>,
    /// Position relative to the page.
    pub page: Option<Point>,
    /// Position relative to the visible client area.
    pub client: Option<Point>,
    /// Offset added to `client` (accumulated ancestor offsets and scroll).
    pub client_offset: Vec2,
    /// Element the event was dispatched to.
    pub target: Option<TargetId>,
}

impl PointerSample {
    /// A mouse-like sample with a page position.
    #[must_use]
    pub fn at(page: Point) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// A touch sample with the given points.
    #[must_use]
    pub fn touches(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            touches: points.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A sample known only by client coordinates plus an offset.
    #[must_use]
    pub fn client(client: Point, offset: Vec2) -> Self {
        Self {
            client: Some(client),
            client_offset: offset,
            ..Self::default()
        }
    }

    /// Sets the target element.
    #[must_use]
    pub fn with_target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }
}

/// Reads the position of an event.
///
/// Preference order: the first touch point, then the page position, then
/// the client position shifted by `client_offset`.
///
/// # Errors
///
/// - [`InputError::MissingCoordinates`] if the sample has no position at all.
/// - [`InputError::NonFiniteCoordinates`] if the chosen position is NaN or
///   infinite.
pub fn read_pointer_position(sample: &PointerSample) -> Result<Point, InputError> {
    let pt = if let Some(first) = sample.touches.first() {
        *first
    } else if let Some(page) = sample.page {
        page
    } else if let Some(client) = sample.client {
        client + sample.client_offset
    } else {
        return Err(InputError::MissingCoordinates);
    };
    if pt.is_finite() {
        Ok(pt)
    } else {
        Err(InputError::NonFiniteCoordinates)
    }
}

/// Why an input event was skipped.
///
/// A rejected event leaves the recognizer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// The event carried no usable position.
    MissingCoordinates,
    /// A position or gesture value was NaN or infinite.
    NonFiniteCoordinates,
    /// A two-finger event carried fewer than two touch points.
    MissingTouches,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCoordinates => f.write_str("input event has no coordinates"),
            Self::NonFiniteCoordinates => f.write_str("input event has non-finite values"),
            Self::MissingTouches => f.write_str("two-finger event has fewer than two touches"),
        }
    }
}

impl core::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{InputError, PointerSample, TargetId, read_pointer_position};

    #[test]
    fn touches_win_over_page() {
        let mut sample = PointerSample::touches([Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        sample.page = Some(Point::new(9.0, 9.0));
        assert_eq!(read_pointer_position(&sample), Ok(Point::new(1.0, 2.0)));
    }

    #[test]
    fn page_wins_over_client() {
        let mut sample = PointerSample::at(Point::new(5.0, 6.0));
        sample.client = Some(Point::new(0.0, 0.0));
        assert_eq!(read_pointer_position(&sample), Ok(Point::new(5.0, 6.0)));
    }

    #[test]
    fn client_is_shifted_by_offset() {
        let sample = PointerSample::client(Point::new(10.0, 20.0), Vec2::new(100.0, 200.0));
        assert_eq!(read_pointer_position(&sample), Ok(Point::new(110.0, 220.0)));
    }

    #[test]
    fn empty_sample_is_rejected() {
        let sample = PointerSample::default().with_target(TargetId(3));
        assert_eq!(
            read_pointer_position(&sample),
            Err(InputError::MissingCoordinates)
        );
    }

    #[test]
    fn nan_is_rejected() {
        let sample = PointerSample::at(Point::new(f64::NAN, 0.0));
        assert_eq!(
            read_pointer_position(&sample),
            Err(InputError::NonFiniteCoordinates)
        );
    }
}
