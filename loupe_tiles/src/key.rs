// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Identity of one grid cell at one integer zoom level.
///
/// Columns and rows count from the top-left corner of the full image, so the
/// same key always names the same image region as long as the container size
/// does not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    /// Integer zoom level; ordered first so keys sort coarse to fine.
    pub level: u32,
    /// Row index.
    pub row: u32,
    /// Column index.
    pub col: u32,
}

impl TileKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(col: u32, row: u32, level: u32) -> Self {
        Self { level, row, col }
    }
}

impl fmt::Display for TileKey {
    /// Formats as `tile_{col}_{row}_{level}`, usable as an element id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile_{}_{}_{}", self.col, self.row, self.level)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::TileKey;

    #[test]
    fn display_is_element_id() {
        assert_eq!(format!("{}", TileKey::new(3, 7, 2)), "tile_3_7_2");
    }

    #[test]
    fn coarse_levels_sort_first() {
        let coarse = TileKey::new(9, 9, 1);
        let fine = TileKey::new(0, 0, 2);
        assert!(coarse < fine);
    }
}
