// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use loupe_view::VisibleArea;

use crate::{TileBounds, TileKey};

/// Whether a live tile should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    /// Rendered.
    Visible,
    /// Kept for a cheap return, not rendered.
    Hidden,
}

/// How a tile's bounds are tested against the visible area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityTest {
    /// Proper overlap: the tile and the area share a region of positive size
    /// on both axes.
    #[default]
    Strict,
    /// `right >= area.left || left <= area.right`, and the same vertically.
    ///
    /// Holds for every tile inside the image, so tiles are only ever retired
    /// by eviction.
    Inclusive,
}

impl VisibilityTest {
    /// Applies the test.
    #[must_use]
    pub fn is_visible(self, bounds: &TileBounds, area: &VisibleArea) -> bool {
        match self {
            Self::Strict => {
                bounds.right > area.left()
                    && bounds.left < area.right()
                    && bounds.bottom > area.top()
                    && bounds.top < area.bottom()
            }
            Self::Inclusive => {
                (bounds.right >= area.left() || bounds.left <= area.right())
                    && (bounds.bottom >= area.top() || bounds.top <= area.bottom())
            }
        }
    }
}

/// One live tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TileRecord {
    /// Grid identity.
    pub key: TileKey,
    /// Creation order; older tiles have smaller indices.
    pub index: u64,
    /// Normalized bounds.
    pub bounds: TileBounds,
    /// Where to fetch the image.
    pub url: String,
    /// Current rendering state.
    pub state: TileState,
}

impl TileRecord {
    /// Stacking order; finer levels are drawn above coarser ones.
    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.key.level
    }

    /// `true` if the tile is rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == TileState::Visible
    }
}
