// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_tiles::TileSink;
use loupe_view::{Dimensions, DimensionsError, Overlay};

/// The host side of a viewer: measurement and rendering.
///
/// Tile lifecycle changes arrive through the [`TileSink`] supertrait. Every
/// method except [`Surface::measure`] defaults to a no-op.
pub trait Surface: TileSink {
    /// Reads the current container size and the native image size.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionsError`] when either size is unavailable.
    fn measure(&mut self) -> Result<Dimensions, DimensionsError>;

    /// Applies the backdrop transform.
    fn set_overlay(&mut self, _overlay: &Overlay) {}

    /// Turns smooth transitions of the backdrop on or off.
    fn set_transition(&mut self, _smooth: bool) {}

    /// Enables or disables the zoom controls.
    fn set_zoom_controls(&mut self, _can_zoom_in: bool, _can_zoom_out: bool) {}
}
