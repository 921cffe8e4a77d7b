// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Origin/progression tracking for one pointer interaction.
//!
//! ## Usage
//!
//! 1) Call [`PointerTrack::start`] when the pointer goes down.
//! 2) On each move, call [`PointerTrack::update`] to get the movement since
//!    the previous sample.
//! 3) On release, read [`PointerTrack::net_offset`] for the whole travel.
//! 4) Call [`PointerTrack::end`] to forget the interaction.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::PointerTrack;
//!
//! let mut track = PointerTrack::default();
//! track.start(Point::new(10.0, 20.0), None);
//! assert!(track.is_tracking());
//!
//! assert_eq!(track.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(track.update(Point::new(18.0, 25.0)), Some(Vec2::new(3.0, 0.0)));
//! assert_eq!(track.net_offset(), Some(Vec2::new(8.0, 5.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::TargetId;

/// Where an interaction started and where it was last seen.
#[derive(Debug, Clone, Default, Copy)]
pub struct PointerTrack {
    /// Position captured when the interaction started.
    pub origin: Option<Point>,
    /// Last position seen during the interaction.
    pub progression: Option<Point>,
    /// Element the interaction started on.
    pub target: Option<TargetId>,
}

impl PointerTrack {
    /// Starts tracking a new interaction at `pos`.
    pub fn start(&mut self, pos: Point, target: Option<TargetId>) {
        self.origin = Some(pos);
        self.progression = Some(pos);
        self.target = target;
    }

    /// Records a new position, returning the movement since the last one.
    ///
    /// Returns `None` when no interaction is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.origin?;
        let delta = self.progression.map(|last| pos - last);
        self.progression = Some(pos);
        delta
    }

    /// Net travel from the origin to the last seen position.
    #[must_use]
    pub fn net_offset(&self) -> Option<Vec2> {
        match (self.origin, self.progression) {
            (Some(origin), Some(last)) => Some(last - origin),
            _ => None,
        }
    }

    /// Forgets the current interaction.
    pub fn end(&mut self) {
        self.origin = None;
        self.progression = None;
        self.target = None;
    }

    /// Returns `true` while an interaction is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}
