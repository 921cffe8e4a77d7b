// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{TileKey, TileRecord};

/// Receiver of tile lifecycle changes.
///
/// A renderer implements this to create, show, hide and drop the visual
/// resource behind each tile. Every method defaults to a no-op.
pub trait TileSink {
    /// A tile entered the registry. `tile.state` tells whether to render it.
    fn create(&mut self, _tile: &TileRecord) {}
    /// A hidden tile became visible.
    fn show(&mut self, _tile: &TileRecord) {}
    /// A visible tile became hidden.
    fn hide(&mut self, _tile: &TileRecord) {}
    /// A tile left the registry for good.
    fn evict(&mut self, _tile: &TileRecord) {}
}

impl TileSink for () {}

/// Kind of lifecycle change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileAction {
    /// See [`TileSink::create`].
    Create,
    /// See [`TileSink::show`].
    Show,
    /// See [`TileSink::hide`].
    Hide,
    /// See [`TileSink::evict`].
    Evict,
}

/// A recorded lifecycle change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileEvent {
    /// What happened.
    pub action: TileAction,
    /// To which tile.
    pub key: TileKey,
}

/// Records every change, in order.
impl TileSink for Vec<TileEvent> {
    fn create(&mut self, tile: &TileRecord) {
        self.push(TileEvent {
            action: TileAction::Create,
            key: tile.key,
        });
    }

    fn show(&mut self, tile: &TileRecord) {
        self.push(TileEvent {
            action: TileAction::Show,
            key: tile.key,
        });
    }

    fn hide(&mut self, tile: &TileRecord) {
        self.push(TileEvent {
            action: TileAction::Hide,
            key: tile.key,
        });
    }

    fn evict(&mut self, tile: &TileRecord) {
        self.push(TileEvent {
            action: TileAction::Evict,
            key: tile.key,
        });
    }
}

impl<S: TileSink + ?Sized> TileSink for &mut S {
    fn create(&mut self, tile: &TileRecord) {
        (**self).create(tile);
    }

    fn show(&mut self, tile: &TileRecord) {
        (**self).show(tile);
    }

    fn hide(&mut self, tile: &TileRecord) {
        (**self).hide(tile);
    }

    fn evict(&mut self, tile: &TileRecord) {
        (**self).evict(tile);
    }
}
