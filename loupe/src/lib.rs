// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe --heading-base-level=0

//! Loupe: the core of a deep-zoom image viewer.
//!
//! A large photo is shown through a container that can be panned, zoomed and
//! optionally rotated. Only the visible part of the photo is fetched, as
//! square tiles cut by an external slicing backend at the resolution the
//! current zoom needs.
//!
//! - [`TileEngine`] owns the view state and the tile registry. Pan/zoom/rotate
//!   operations update a cheap backdrop transform right away (throttled) and
//!   reconcile tiles only once input has settled (debounced).
//! - [`Viewer`] pairs an engine with a gesture recognizer: drag pans, pinch
//!   and wheel zoom, twist rotates, double tap zooms in on a point.
//! - [`Surface`] is what the host implements: measurement, the backdrop
//!   transform and tile create/show/hide/evict.
//!
//! The engine never reads the wall clock or spawns timers. It is given a
//! [`Clock`](loupe_timing::Clock) and tells the host when to call
//! [`TileEngine::poll`] next, which makes every timing behavior reproducible
//! with a [`ManualClock`](loupe_timing::ManualClock).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe::{Config, Surface, Viewer};
//! use loupe_gesture::{InputEvent, PointerSample};
//! use loupe_tiles::{TileRecord, TileSink};
//! use loupe_timing::ManualClock;
//! use loupe_view::{Dimensions, DimensionsError};
//!
//! #[derive(Default)]
//! struct Page {
//!     urls: Vec<String>,
//! }
//!
//! impl TileSink for Page {
//!     fn create(&mut self, tile: &TileRecord) {
//!         self.urls.push(tile.url.clone());
//!     }
//! }
//!
//! impl Surface for Page {
//!     fn measure(&mut self) -> Result<Dimensions, DimensionsError> {
//!         Dimensions::new(Size::new(640.0, 480.0), Size::new(6400.0, 4800.0))
//!     }
//! }
//!
//! let clock = ManualClock::new(1_000);
//! let config = Config::default().with_image_source("photos/harbour.jpg");
//! let mut viewer = Viewer::new(config, Page::default(), &clock).unwrap();
//!
//! // Scroll the wheel up five notches.
//! for _ in 0..5 {
//!     let wheel = InputEvent::Wheel { delta: 1.0, pointer: PointerSample::at(Point::new(320.0, 240.0)) };
//!     viewer.handle(&wheel).unwrap();
//! }
//! assert!(viewer.engine().transformation().zoom() > 1.5);
//!
//! clock.advance(300);
//! viewer.poll();
//! assert!(viewer.engine().surface().urls[0].contains("src=photos/harbour.jpg"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod surface;
mod viewer;

pub use config::Config;
pub use engine::{EngineDebugInfo, TileEngine};
pub use error::Error;
pub use surface::Surface;
pub use viewer::{Viewer, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
