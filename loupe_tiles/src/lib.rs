// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_tiles --heading-base-level=0

//! Loupe Tiles: which image tiles a deep-zoom view needs, and when to drop them.
//!
//! The full image is covered by a grid of square tiles at every integer zoom
//! level. For a given [`VisibleArea`](loupe_view::VisibleArea) this crate
//! works out which cells are needed, hands out a [`TileRecord`] with a fetch
//! URL for each new one, and keeps the number of live records bounded.
//!
//! - [`TileGrid`]: cell addressing at one level, with a one-cell margin around
//!   the visible area and edge correction for partial cells.
//! - [`TileSource`]: fills a URL template with a tile's bounds and pixel size.
//! - [`TileRegistry`]: the live tiles. [`TileRegistry::reconcile`] shows,
//!   hides, creates and evicts tiles and reports each change to a
//!   [`TileSink`].
//!
//! Fractional zooms reuse the grid of the next integer level, so zooming
//! from 1.2 to 1.8 creates no new tiles.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use loupe_tiles::{TileConfig, TileKey, TileRegistry, TileSource};
//! use loupe_view::{Dimensions, ViewState};
//!
//! let dims = Dimensions::new(Size::new(800.0, 600.0), Size::new(4000.0, 3000.0)).unwrap();
//! let mut view = ViewState::new(dims);
//! view.zoom_to(2.5);
//! let area = view.update_area();
//!
//! let source = TileSource::new("/slice?src={src}&l={left}&t={top}&w={width}", "photo.jpg");
//! let mut tiles = TileRegistry::new(TileConfig::default(), source);
//! let report = tiles.reconcile(dims.viewport(), 2.5, &area, &mut ());
//!
//! assert_eq!(report.level, 3);
//! let centre = tiles.get(&TileKey::new(9, 7, 3)).unwrap();
//! assert!(centre.is_visible());
//! assert!(centre.url.starts_with("/slice?src=photo.jpg&l=0.48&"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod key;
mod record;
mod registry;
mod sink;
mod source;

pub use grid::{TileBounds, TileGrid, TileRange, zoom_level};
pub use key::TileKey;
pub use record::{TileRecord, TileState, VisibilityTest};
pub use registry::{ReconcileReport, TileConfig, TileRegistry, TileRegistryDebugInfo};
pub use sink::{TileAction, TileEvent, TileSink};
pub use source::{DEFAULT_TILE_SOURCE_TEMPLATE, TileSource};
