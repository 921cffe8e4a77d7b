// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger state machine: pinch and twist, natively or from touch points.

use kurbo::Point;
use smallvec::SmallVec;

use crate::{Gesture, Pinch, TargetId, Twist};

#[derive(Clone, Copy, Debug)]
enum Progression {
    Native { scale: f64, rotation: f64 },
    Touches([Point; 2]),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MultiTouch {
    progression: Option<Progression>,
    target: Option<TargetId>,
}

impl MultiTouch {
    pub(crate) fn is_tracking(&self) -> bool {
        self.progression.is_some()
    }

    /// `true` while a pinch is being derived from two touch points.
    pub(crate) fn is_tracking_touches(&self) -> bool {
        matches!(self.progression, Some(Progression::Touches(_)))
    }

    pub(crate) fn start_native(&mut self, scale: f64, rotation: f64, target: Option<TargetId>) {
        self.progression = Some(Progression::Native { scale, rotation });
        self.target = target;
    }

    pub(crate) fn start_touches(&mut self, touches: [Point; 2], target: Option<TargetId>) {
        self.progression = Some(Progression::Touches(touches));
        self.target = target;
    }

    /// Pinch and twist deltas against the previous native sample.
    pub(crate) fn change_native(
        &mut self,
        scale: f64,
        rotation: f64,
        position: Point,
    ) -> SmallVec<[Gesture; 2]> {
        let mut out = SmallVec::new();
        if let Some(Progression::Native {
            scale: last_scale,
            rotation: last_rotation,
        }) = self.progression
        {
            out.push(Gesture::Pinch(Pinch {
                position,
                scale: scale - last_scale,
                target: self.target,
            }));
            out.push(Gesture::Twist(Twist {
                position,
                rotation: rotation - last_rotation,
                target: self.target,
            }));
            self.progression = Some(Progression::Native { scale, rotation });
        }
        out
    }

    /// Pinch delta from the change in spread of two touch points.
    pub(crate) fn change_touches(&mut self, touches: [Point; 2]) -> Option<Gesture> {
        let Some(Progression::Touches(last)) = self.progression else {
            return None;
        };
        let scale = touch_spread_growth(last, touches);
        self.progression = Some(Progression::Touches(touches));
        Some(Gesture::Pinch(Pinch {
            position: touches[0],
            scale,
            target: self.target,
        }))
    }

    pub(crate) fn end(&mut self) {
        self.progression = None;
        self.target = None;
    }
}

/// Relative growth of the spread between two touch points.
///
/// The spread is compared per axis; the result is the mean of the two axis
/// ratios minus one. An axis with no previous spread contributes a ratio of
/// one, i.e. no growth.
pub(crate) fn touch_spread_growth(last: [Point; 2], current: [Point; 2]) -> f64 {
    let ratio = |now: f64, before: f64| if before == 0.0 { 1.0 } else { now / before };
    let rx = ratio(current[0].x - current[1].x, last[0].x - last[1].x);
    let ry = ratio(current[0].y - current[1].y, last[0].y - last[1].y);
    (rx + ry) / 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::touch_spread_growth;

    #[test]
    fn spread_growth_along_one_axis() {
        let before = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let after = [Point::new(0.0, 0.0), Point::new(150.0, 0.0)];
        assert_eq!(touch_spread_growth(before, after), 0.25);
    }

    #[test]
    fn spread_growth_on_both_axes() {
        let before = [Point::new(0.0, 0.0), Point::new(100.0, 100.0)];
        let after = [Point::new(0.0, 0.0), Point::new(50.0, 50.0)];
        assert_eq!(touch_spread_growth(before, after), -0.5);
    }

    #[test]
    fn unchanged_spread_is_zero() {
        let pts = [Point::new(10.0, 20.0), Point::new(30.0, 60.0)];
        assert_eq!(touch_spread_growth(pts, pts), 0.0);
    }
}
