// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from the visible area to grid cells.

use core::ops::Range;

use kurbo::{Rect, Size};
use loupe_view::VisibleArea;

use crate::TileKey;

/// Integer zoom level tiles are created at for a fractional `zoom`.
///
/// Non-finite or sub-unit zooms map to level 1.
#[must_use]
pub fn zoom_level(zoom: f64) -> u32 {
    let level = libm::ceil(zoom);
    if level.is_finite() && level >= 1.0 {
        to_index(level)
    } else {
        1
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "callers pass non-negative whole numbers; `as` saturates above u32::MAX"
)]
fn to_index(value: f64) -> u32 {
    value as u32
}

/// The tile grid covering the full image at one integer zoom level.
///
/// At level `n` the image is `viewport * n` pixels across, cut into squares
/// of `tile_size` pixels. The last column and row may be partial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileGrid {
    level: u32,
    cols: f64,
    rows: f64,
    tile_size: u32,
}

impl TileGrid {
    /// Builds the grid for `zoom` (rounded up to a level) in a container of
    /// size `viewport`.
    #[must_use]
    pub fn new(viewport: Size, zoom: f64, tile_size: u32) -> Self {
        let level = zoom_level(zoom);
        let scale = f64::from(level) / f64::from(tile_size.max(1));
        Self {
            level,
            cols: viewport.width * scale,
            rows: viewport.height * scale,
            tile_size: tile_size.max(1),
        }
    }

    /// Zoom level of every tile in this grid.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Fractional number of columns.
    #[must_use]
    pub fn cols(&self) -> f64 {
        self.cols
    }

    /// Fractional number of rows.
    #[must_use]
    pub fn rows(&self) -> f64 {
        self.rows
    }

    /// Nominal tile edge in pixels.
    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Cells covering `area`, widened by one cell on every side and clamped
    /// to the grid.
    #[must_use]
    pub fn range(&self, area: &VisibleArea) -> TileRange {
        TileRange {
            level: self.level,
            cols: span(area.left(), area.right(), self.cols),
            rows: span(area.top(), area.bottom(), self.rows),
        }
    }

    /// Key of the cell at `(col, row)`.
    #[must_use]
    pub fn key(&self, col: u32, row: u32) -> TileKey {
        TileKey::new(col, row, self.level)
    }

    /// Normalized bounds of the cell at `(col, row)`, with edge correction.
    #[must_use]
    pub fn bounds(&self, col: u32, row: u32) -> TileBounds {
        TileBounds::from_edges(
            f64::from(col) / self.cols,
            f64::from(row) / self.rows,
            f64::from(col + 1) / self.cols,
            f64::from(row + 1) / self.rows,
        )
    }
}

fn span(start: f64, end: f64, count: f64) -> Range<u32> {
    let first = (libm::floor(start * count) - 1.0).max(0.0);
    let last = (libm::ceil(end * count) + 1.0).min(libm::ceil(count)).max(0.0);
    to_index(first)..to_index(last)
}

/// A rectangular block of cells at one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileRange {
    /// Zoom level of the cells.
    pub level: u32,
    /// Column span, end exclusive.
    pub cols: Range<u32>,
    /// Row span, end exclusive.
    pub rows: Range<u32>,
}

impl TileRange {
    /// Number of cells in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cols.len() * self.rows.len()
    }

    /// `true` if the block holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty() || self.rows.is_empty()
    }

    /// `true` if `key` lies in the block.
    #[must_use]
    pub fn contains(&self, key: &TileKey) -> bool {
        key.level == self.level && self.cols.contains(&key.col) && self.rows.contains(&key.row)
    }

    /// Keys in row-major order.
    pub fn keys(&self) -> impl Iterator<Item = TileKey> + '_ {
        self.rows
            .clone()
            .flat_map(move |row| self.cols.clone().map(move |col| TileKey::new(col, row, self.level)))
    }
}

/// Normalized bounds of one tile plus the share of a full tile it covers.
///
/// Cells that would reach past the right or bottom edge of the image are cut
/// at 1; the matching factor shrinks the requested pixel size in proportion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileBounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge, at most 1.
    pub right: f64,
    /// Bottom edge, at most 1.
    pub bottom: f64,
    /// Fraction of the nominal width inside the image, in `(0, 1]`.
    pub width_factor: f64,
    /// Fraction of the nominal height inside the image, in `(0, 1]`.
    pub height_factor: f64,
}

impl TileBounds {
    /// Builds bounds from raw edges, cutting edges past 1.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let (right, width_factor) = cut(left, right);
        let (bottom, height_factor) = cut(top, bottom);
        Self {
            left,
            top,
            right,
            bottom,
            width_factor,
            height_factor,
        }
    }

    /// Pixel size to request for a tile of nominal edge `tile_size`.
    #[must_use]
    pub fn pixel_size(&self, tile_size: u32) -> (u32, u32) {
        let edge = f64::from(tile_size);
        (
            to_index(libm::round(edge * self.width_factor).max(0.0)),
            to_index(libm::round(edge * self.height_factor).max(0.0)),
        )
    }

    /// The bounds as a rectangle in normalized image space.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

fn cut(start: f64, end: f64) -> (f64, f64) {
    if end > 1.0 {
        (1.0, (1.0 - start) / (end - start))
    } else {
        (end, 1.0)
    }
}
