// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_view --heading-base-level=0

//! Loupe View: the continuous view state of a deep-zoom image viewer.
//!
//! All positions here are **normalized image fractions**: `(0, 0)` is the
//! top-left corner of the full source image and `(1, 1)` its bottom-right,
//! regardless of the image's native resolution. The crate provides:
//! - [`Transformation`]: pan center, zoom factor and rotation, always clamped
//!   into range.
//! - [`Dimensions`]: the measured container size and native image size, from
//!   which the maximum zoom is derived.
//! - [`VisibleArea`]: the normalized rectangle of the image currently shown.
//! - [`ViewState`]: the three of the above, owned together and mutated through
//!   pan/zoom/rotate operations.
//! - [`Overlay`]: the purely visual scale + rotate + origin transform a
//!   renderer applies to the low-resolution backdrop.
//!
//! It does **not** own tiles, timers, or input handling; those live in
//! sibling crates and drive a [`ViewState`] through its public operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use loupe_view::{Dimensions, ViewState};
//!
//! // A 4000px wide photo shown in an 800x600 container.
//! let dims = Dimensions::new(Size::new(800.0, 600.0), Size::new(4000.0, 3000.0)).unwrap();
//! let mut view = ViewState::new(dims);
//! assert_eq!(view.max_zoom(), 5.0);
//!
//! view.zoom_to(2.0);
//! view.pan_to(0.25, 0.25);
//! let area = view.update_area();
//! assert_eq!(area.left(), 0.0);
//! assert_eq!(area.right(), 0.5);
//!
//! // Out of range requests are clamped, never rejected.
//! view.zoom_to(100.0);
//! assert_eq!(view.transformation().zoom(), 5.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod area;
mod dimensions;
mod overlay;
mod state;
mod transformation;

pub use area::VisibleArea;
pub use dimensions::{Dimensions, DimensionsError};
pub use overlay::Overlay;
pub use state::{ViewState, ViewStateDebugInfo};
pub use transformation::{MAX_ROTATE, TransformRequest, Transformation};
