// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use crate::TileBounds;

/// Template used when none is configured; served by a cropping backend that
/// accepts normalized edges and a target pixel size.
pub const DEFAULT_TILE_SOURCE_TEMPLATE: &str = "php/imageslice.php?src={src}&left={left}&top={top}&right={right}&bottom={bottom}&width={width}&height={height}";

/// Builds the fetch URL of a tile.
///
/// Recognized placeholders: `{src}`, `{left}`, `{top}`, `{right}`,
/// `{bottom}` (normalized edges) and `{width}`, `{height}` (requested pixel
/// size after edge correction). Unknown placeholders are left as they are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSource {
    template: String,
    src: String,
}

impl Default for TileSource {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SOURCE_TEMPLATE, "")
    }
}

impl TileSource {
    /// Creates a source for the image at `src`.
    #[must_use]
    pub fn new(template: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            src: src.into(),
        }
    }

    /// The URL template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The source image reference substituted for `{src}`.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Fills the template for one tile.
    #[must_use]
    pub fn url(&self, bounds: &TileBounds, tile_size: u32) -> String {
        let (width, height) = bounds.pixel_size(tile_size);
        self.template
            .replace("{src}", &self.src)
            .replace("{left}", &format!("{}", bounds.left))
            .replace("{top}", &format!("{}", bounds.top))
            .replace("{right}", &format!("{}", bounds.right))
            .replace("{bottom}", &format!("{}", bounds.bottom))
            .replace("{width}", &format!("{width}"))
            .replace("{height}", &format!("{height}"))
    }
}

#[cfg(test)]
mod tests {
    use super::TileSource;
    use crate::TileBounds;

    #[test]
    fn fills_every_placeholder() {
        let source = TileSource::new(
            "/slice?src={src}&l={left}&t={top}&r={right}&b={bottom}&w={width}&h={height}",
            "photo.jpg",
        );
        let bounds = TileBounds::from_edges(0.5, 0.25, 0.75, 0.5);
        assert_eq!(
            source.url(&bounds, 128),
            "/slice?src=photo.jpg&l=0.5&t=0.25&r=0.75&b=0.5&w=128&h=128"
        );
    }

    #[test]
    fn edge_tiles_request_fewer_pixels() {
        let source = TileSource::new("{right}x{width}", "");
        let bounds = TileBounds::from_edges(0.9, 0.0, 1.2, 0.1);
        assert_eq!(source.url(&bounds, 128), "1x43");
    }

    #[test]
    fn default_template_targets_slicing_backend() {
        let source = TileSource::default();
        assert!(source.template().starts_with("php/imageslice.php?src={src}"));
        assert_eq!(source.src(), "");
    }
}
