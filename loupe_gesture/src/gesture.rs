// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::TargetId;

bitflags::bitflags! {
    /// Set of gestures a recognizer reports.
    ///
    /// Gestures outside the set are never emitted. Enabling any single-pointer
    /// kind turns on single-pointer tracking; enabling pinch or twist turns on
    /// wheel and two-finger tracking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GestureKinds: u8 {
        /// Upward swipe.
        const SWIPE_UP    = 0b0000_0001;
        /// Downward swipe.
        const SWIPE_DOWN  = 0b0000_0010;
        /// Leftward swipe.
        const SWIPE_LEFT  = 0b0000_0100;
        /// Rightward swipe.
        const SWIPE_RIGHT = 0b0000_1000;
        /// Incremental pointer movement.
        const DRAG        = 0b0001_0000;
        /// Two quick taps in the same place.
        const DOUBLE_TAP  = 0b0010_0000;
        /// Incremental scale change.
        const PINCH       = 0b0100_0000;
        /// Incremental rotation change.
        const TWIST       = 0b1000_0000;

        /// All four swipes.
        const SWIPES = Self::SWIPE_UP.bits()
            | Self::SWIPE_DOWN.bits()
            | Self::SWIPE_LEFT.bits()
            | Self::SWIPE_RIGHT.bits();
        /// Everything produced by single-pointer tracking.
        const SINGLE = Self::SWIPES.bits() | Self::DRAG.bits() | Self::DOUBLE_TAP.bits();
        /// Everything produced by multi-touch and wheel tracking.
        const MULTI = Self::PINCH.bits() | Self::TWIST.bits();
    }
}

impl Default for GestureKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// A completed swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    /// Where the pointer went down.
    pub origin: Point,
    /// Travel along the swipe direction; always positive.
    pub distance: f64,
    /// Element the interaction started on.
    pub target: Option<TargetId>,
}

/// Pointer movement since the previous move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    /// Where the pointer went down.
    pub origin: Point,
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Element the interaction started on.
    pub target: Option<TargetId>,
}

/// Scale change since the previous pinch sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pinch {
    /// Where the pinch happened.
    pub position: Point,
    /// Dimensionless growth; positive means zoom in.
    pub scale: f64,
    /// Element the interaction started on.
    pub target: Option<TargetId>,
}

/// Rotation change since the previous twist sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twist {
    /// Where the twist happened.
    pub position: Point,
    /// Rotation delta in degrees.
    pub rotation: f64,
    /// Element the interaction started on.
    pub target: Option<TargetId>,
}

/// A double tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    /// Where the second tap went down.
    pub position: Point,
    /// Element the second tap started on.
    pub target: Option<TargetId>,
}

/// A recognized gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Released after travelling up past the threshold.
    SwipeUp(Swipe),
    /// Released after travelling down past the threshold.
    SwipeDown(Swipe),
    /// Released after travelling left past the threshold.
    SwipeLeft(Swipe),
    /// Released after travelling right past the threshold.
    SwipeRight(Swipe),
    /// Moved while down.
    Drag(Drag),
    /// Scale changed.
    Pinch(Pinch),
    /// Rotation changed.
    Twist(Twist),
    /// Second quick tap in the same place.
    DoubleTap(Tap),
}

impl Gesture {
    /// The single kind flag of this gesture.
    #[must_use]
    pub fn kind(&self) -> GestureKinds {
        match self {
            Self::SwipeUp(_) => GestureKinds::SWIPE_UP,
            Self::SwipeDown(_) => GestureKinds::SWIPE_DOWN,
            Self::SwipeLeft(_) => GestureKinds::SWIPE_LEFT,
            Self::SwipeRight(_) => GestureKinds::SWIPE_RIGHT,
            Self::Drag(_) => GestureKinds::DRAG,
            Self::Pinch(_) => GestureKinds::PINCH,
            Self::Twist(_) => GestureKinds::TWIST,
            Self::DoubleTap(_) => GestureKinds::DOUBLE_TAP,
        }
    }

    /// Calls the matching method of `handler`.
    pub fn dispatch<H: GestureHandler + ?Sized>(&self, handler: &mut H) {
        match self {
            Self::SwipeUp(s) => handler.swipe_up(s),
            Self::SwipeDown(s) => handler.swipe_down(s),
            Self::SwipeLeft(s) => handler.swipe_left(s),
            Self::SwipeRight(s) => handler.swipe_right(s),
            Self::Drag(d) => handler.drag(d),
            Self::Pinch(p) => handler.pinch(p),
            Self::Twist(t) => handler.twist(t),
            Self::DoubleTap(t) => handler.double_tap(t),
        }
    }
}

/// Receiver of recognized gestures. Every method defaults to a no-op.
pub trait GestureHandler {
    /// See [`Gesture::SwipeUp`].
    fn swipe_up(&mut self, _swipe: &Swipe) {}
    /// See [`Gesture::SwipeDown`].
    fn swipe_down(&mut self, _swipe: &Swipe) {}
    /// See [`Gesture::SwipeLeft`].
    fn swipe_left(&mut self, _swipe: &Swipe) {}
    /// See [`Gesture::SwipeRight`].
    fn swipe_right(&mut self, _swipe: &Swipe) {}
    /// See [`Gesture::Drag`].
    fn drag(&mut self, _drag: &Drag) {}
    /// See [`Gesture::Pinch`].
    fn pinch(&mut self, _pinch: &Pinch) {}
    /// See [`Gesture::Twist`].
    fn twist(&mut self, _twist: &Twist) {}
    /// See [`Gesture::DoubleTap`].
    fn double_tap(&mut self, _tap: &Tap) {}
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Drag, Gesture, GestureHandler, GestureKinds, Pinch, Tap};

    #[derive(Default)]
    struct Counts {
        drags: u32,
        pinches: u32,
    }

    impl GestureHandler for Counts {
        fn drag(&mut self, _drag: &Drag) {
            self.drags += 1;
        }
        fn pinch(&mut self, _pinch: &Pinch) {
            self.pinches += 1;
        }
    }

    #[test]
    fn groups_partition_kinds() {
        assert_eq!(GestureKinds::SINGLE | GestureKinds::MULTI, GestureKinds::all());
        assert!(!GestureKinds::SINGLE.intersects(GestureKinds::MULTI));
        assert_eq!(GestureKinds::default(), GestureKinds::all());
    }

    #[test]
    fn dispatch_reaches_overridden_methods_only() {
        let mut counts = Counts::default();
        let drag = Gesture::Drag(Drag {
            origin: Point::ZERO,
            delta: Vec2::new(1.0, 0.0),
            target: None,
        });
        let tap = Gesture::DoubleTap(Tap {
            position: Point::ZERO,
            target: None,
        });
        drag.dispatch(&mut counts);
        drag.dispatch(&mut counts);
        tap.dispatch(&mut counts);
        assert_eq!(counts.drags, 2);
        assert_eq!(counts.pinches, 0);
        assert_eq!(drag.kind(), GestureKinds::DRAG);
        assert_eq!(tap.kind(), GestureKinds::DOUBLE_TAP);
    }
}
