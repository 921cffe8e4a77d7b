// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounded tile registry and its reconciliation pass.

use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::Size;
use loupe_view::VisibleArea;

use crate::{
    TileGrid, TileKey, TileRange, TileRecord, TileSink, TileSource, TileState, VisibilityTest,
};

/// Fixed parameters of a [`TileRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileConfig {
    /// Nominal tile edge in pixels.
    pub tile_size: u32,
    /// Maximum number of live tiles.
    pub capacity: usize,
    /// Test deciding which live tiles are rendered.
    pub visibility: VisibilityTest,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_size: 128,
            capacity: 128,
            visibility: VisibilityTest::default(),
        }
    }
}

/// Counts from one [`TileRegistry::reconcile`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Level the pass populated.
    pub level: u32,
    /// Tiles created.
    pub created: usize,
    /// Hidden tiles that became visible.
    pub shown: usize,
    /// Visible tiles that became hidden.
    pub hidden: usize,
    /// Tiles evicted.
    pub evicted: usize,
    /// Live tiles after the pass.
    pub live: usize,
}

/// All live tiles, keyed by grid identity.
///
/// Tiles are created on demand for the cells around the visible area and
/// evicted by creation order: a tile is dropped once more than `capacity`
/// tiles have been created after it. Tiles in the range being reconciled are
/// never evicted by that pass, so when the range alone holds more than
/// `capacity` cells the registry grows to the range and repeated passes stay
/// idempotent. Live tiles never exceed `max(capacity, range.len())`; when
/// kept in-range tiles would push past that, the oldest tiles outside the
/// range go first.
/// Spatial visibility only toggles between [`TileState::Visible`] and
/// [`TileState::Hidden`].
///
/// # Example
///
/// ```
/// use kurbo::Size;
/// use loupe_tiles::{TileConfig, TileEvent, TileRegistry, TileSource};
/// use loupe_view::VisibleArea;
///
/// let mut tiles = TileRegistry::new(TileConfig::default(), TileSource::default());
/// let mut events: Vec<TileEvent> = Vec::new();
///
/// let report = tiles.reconcile(Size::new(800.0, 600.0), 1.0, &VisibleArea::default(), &mut events);
/// assert_eq!(report.created, 35);
/// assert_eq!(events.len(), 35);
///
/// // Nothing changed, nothing to do.
/// let again = tiles.reconcile(Size::new(800.0, 600.0), 1.0, &VisibleArea::default(), &mut events);
/// assert_eq!(again.created, 0);
/// ```
#[derive(Clone, Debug)]
pub struct TileRegistry {
    config: TileConfig,
    source: TileSource,
    tiles: HashMap<TileKey, TileRecord>,
    next_index: u64,
}

impl TileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(config: TileConfig, source: TileSource) -> Self {
        Self {
            config,
            source,
            tiles: HashMap::new(),
            next_index: 0,
        }
    }

    /// Fixed parameters.
    #[must_use]
    pub fn config(&self) -> &TileConfig {
        &self.config
    }

    /// URL builder used for new tiles.
    #[must_use]
    pub fn source(&self) -> &TileSource {
        &self.source
    }

    /// Number of live tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` if no tile is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Looks up a live tile.
    #[must_use]
    pub fn get(&self, key: &TileKey) -> Option<&TileRecord> {
        self.tiles.get(key)
    }

    /// Live tiles in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TileRecord> + '_ {
        self.tiles.values()
    }

    /// Index the next created tile will get.
    #[must_use]
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Tiles with a smaller index than this are due for eviction.
    #[must_use]
    pub fn eviction_floor(&self) -> u64 {
        let capacity = u64::try_from(self.config.capacity).unwrap_or(u64::MAX);
        self.next_index.saturating_sub(capacity)
    }

    /// Brings the registry in line with `area` at `zoom`.
    ///
    /// Runs three steps: existing tiles are evicted or shown/hidden, missing
    /// cells of the grid around `area` are created, and finally tiles pushed
    /// below the eviction floor by the new ones are evicted. Tiles inside the
    /// grid range of this pass are exempt from eviction.
    pub fn reconcile<S: TileSink + ?Sized>(
        &mut self,
        viewport: Size,
        zoom: f64,
        area: &VisibleArea,
        sink: &mut S,
    ) -> ReconcileReport {
        let grid = TileGrid::new(viewport, zoom, self.config.tile_size);
        let mut report = ReconcileReport {
            level: grid.level(),
            ..ReconcileReport::default()
        };
        let range = grid.range(area);
        self.clean(&range, area, sink, &mut report);
        report.created = self.populate(&grid, &range, area, sink);
        report.evicted += self.trim(&range, sink);
        report.live = self.tiles.len();

        #[cfg(feature = "tracing")]
        {
            if range.len() > self.config.capacity {
                tracing::warn!(
                    cells = range.len(),
                    capacity = self.config.capacity,
                    "tile range exceeds the cache capacity, keeping it whole"
                );
            }
            tracing::debug!(
                level = report.level,
                created = report.created,
                shown = report.shown,
                hidden = report.hidden,
                evicted = report.evicted,
                live = report.live,
                "tile reconciliation pass"
            );
        }
        report
    }

    fn clean<S: TileSink + ?Sized>(
        &mut self,
        range: &TileRange,
        area: &VisibleArea,
        sink: &mut S,
        report: &mut ReconcileReport,
    ) {
        let floor = self.eviction_floor();
        let visibility = self.config.visibility;
        self.tiles.retain(|key, tile| {
            if tile.index < floor && !range.contains(key) {
                #[cfg(feature = "tracing")]
                tracing::trace!(tile = %tile.key, index = tile.index, "tile evicted");
                sink.evict(tile);
                report.evicted += 1;
                return false;
            }
            match (tile.state, visibility.is_visible(&tile.bounds, area)) {
                (TileState::Hidden, true) => {
                    tile.state = TileState::Visible;
                    sink.show(tile);
                    report.shown += 1;
                }
                (TileState::Visible, false) => {
                    tile.state = TileState::Hidden;
                    sink.hide(tile);
                    report.hidden += 1;
                }
                _ => {}
            }
            true
        });
    }

    fn populate<S: TileSink + ?Sized>(
        &mut self,
        grid: &TileGrid,
        range: &TileRange,
        area: &VisibleArea,
        sink: &mut S,
    ) -> usize {
        let mut created = 0;
        for key in range.keys() {
            let Entry::Vacant(slot) = self.tiles.entry(key) else {
                continue;
            };
            let bounds = grid.bounds(key.col, key.row);
            let state = if self.config.visibility.is_visible(&bounds, area) {
                TileState::Visible
            } else {
                TileState::Hidden
            };
            let record = slot.insert(TileRecord {
                key,
                index: self.next_index,
                url: self.source.url(&bounds, grid.tile_size()),
                bounds,
                state,
            });
            self.next_index += 1;
            created += 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(tile = %record.key, index = record.index, "tile created");
            sink.create(record);
        }
        created
    }

    fn trim<S: TileSink + ?Sized>(&mut self, range: &TileRange, sink: &mut S) -> usize {
        let floor = self.eviction_floor();
        let before = self.tiles.len();
        self.tiles.retain(|key, tile| {
            if tile.index < floor && !range.contains(key) {
                sink.evict(tile);
                false
            } else {
                true
            }
        });

        // In-range tiles kept below the floor still count against the bound.
        let bound = self.config.capacity.max(range.len());
        if self.tiles.len() > bound {
            let excess = self.tiles.len() - bound;
            let mut stale: Vec<(u64, TileKey)> = self
                .tiles
                .values()
                .filter(|t| !range.contains(&t.key))
                .map(|t| (t.index, t.key))
                .collect();
            stale.sort_unstable();
            for (_, key) in stale.into_iter().take(excess) {
                if let Some(tile) = self.tiles.remove(&key) {
                    sink.evict(&tile);
                }
            }
        }
        before - self.tiles.len()
    }

    /// Evicts every tile, keeping the index counter running.
    ///
    /// Used when the container size changes, since the grid then maps keys to
    /// different image regions.
    pub fn clear<S: TileSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let evicted = self.tiles.len();
        for (_, tile) in self.tiles.drain() {
            sink.evict(&tile);
        }
        evicted
    }

    /// Evicts every tile and switches to a new URL builder.
    pub fn set_source<S: TileSink + ?Sized>(&mut self, source: TileSource, sink: &mut S) {
        self.clear(sink);
        self.source = source;
    }

    /// Returns a snapshot of the registry's bookkeeping.
    #[must_use]
    pub fn debug_info(&self) -> TileRegistryDebugInfo {
        let visible = self.tiles.values().filter(|t| t.is_visible()).count();
        TileRegistryDebugInfo {
            live: self.tiles.len(),
            visible,
            hidden: self.tiles.len() - visible,
            next_index: self.next_index,
            eviction_floor: self.eviction_floor(),
            capacity: self.config.capacity,
        }
    }
}

/// Debug snapshot returned by [`TileRegistry::debug_info`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRegistryDebugInfo {
    /// Live tiles.
    pub live: usize,
    /// Live tiles being rendered.
    pub visible: usize,
    /// Live tiles kept but not rendered.
    pub hidden: usize,
    /// Index the next tile will get.
    pub next_index: u64,
    /// Tiles below this index are evicted on the next pass unless that
    /// pass still needs them.
    pub eviction_floor: u64,
    /// Maximum number of live tiles.
    pub capacity: usize,
}
