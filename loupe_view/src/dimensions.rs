// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Measured sizes that bound a view.
///
/// Both sizes are in pixels: `viewport` is the on-screen container, `full`
/// the native resolution of the source image. Construction fails when the
/// derived maximum zoom would be NaN or infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    viewport: Size,
    full: Size,
}

impl Dimensions {
    /// Validates and stores a measurement.
    ///
    /// # Errors
    ///
    /// - [`DimensionsError::NonFinite`] if any extent is NaN or infinite.
    /// - [`DimensionsError::EmptyViewport`] if the container has no area.
    /// - [`DimensionsError::EmptyImage`] if the native image has no area.
    pub fn new(viewport: Size, full: Size) -> Result<Self, DimensionsError> {
        if !viewport.is_finite() || !full.is_finite() {
            return Err(DimensionsError::NonFinite);
        }
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(DimensionsError::EmptyViewport);
        }
        if full.width <= 0.0 || full.height <= 0.0 {
            return Err(DimensionsError::EmptyImage);
        }
        Ok(Self { viewport, full })
    }

    /// On-screen container size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Native image size.
    #[must_use]
    pub fn full(&self) -> Size {
        self.full
    }

    /// Magnification at which one container pixel shows one native pixel.
    ///
    /// Images narrower than their container cannot be zoomed; the result is
    /// never below one.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        (self.full.width / self.viewport.width).max(1.0)
    }

    /// Returns a copy with a new container size, keeping the image size.
    ///
    /// # Errors
    ///
    /// Same as [`Dimensions::new`].
    pub fn with_viewport(&self, viewport: Size) -> Result<Self, DimensionsError> {
        Self::new(viewport, self.full)
    }
}

/// Why a measurement cannot bound a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DimensionsError {
    /// The container has zero (or negative) width or height.
    EmptyViewport,
    /// The native image size is missing or zero.
    EmptyImage,
    /// A measured extent is NaN or infinite.
    NonFinite,
}

impl fmt::Display for DimensionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyViewport => f.write_str("viewport has no area"),
            Self::EmptyImage => f.write_str("native image size is missing or zero"),
            Self::NonFinite => f.write_str("measured size is not finite"),
        }
    }
}

impl core::error::Error for DimensionsError {}
