// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer state machine: drag, swipes and double tap.

use kurbo::Point;

use crate::{Drag, Gesture, GestureConfig, PointerTrack, Swipe, Tap, TargetId};

/// The last interaction that ran to completion.
#[derive(Clone, Copy, Debug)]
struct Completed {
    origin: Point,
    time: u64,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct SingleTouch {
    track: PointerTrack,
    last_completed: Option<Completed>,
}

impl SingleTouch {
    pub(crate) fn is_tracking(&self) -> bool {
        self.track.is_tracking()
    }

    pub(crate) fn start(&mut self, pos: Point, target: Option<TargetId>) {
        self.track.start(pos, target);
    }

    pub(crate) fn change(&mut self, pos: Point) -> Option<Gesture> {
        let origin = self.track.origin?;
        let delta = self.track.update(pos)?;
        Some(Gesture::Drag(Drag {
            origin,
            delta,
            target: self.track.target,
        }))
    }

    /// Classifies the finished interaction. Double tap takes precedence over
    /// any swipe.
    pub(crate) fn end(&mut self, now: u64, config: &GestureConfig) -> Option<Gesture> {
        let (Some(origin), Some(distance)) = (self.track.origin, self.track.net_offset()) else {
            self.track.end();
            return None;
        };
        let target = self.track.target;

        let gesture = if self.is_double_tap(origin, now, config) {
            Some(Gesture::DoubleTap(Tap {
                position: origin,
                target,
            }))
        } else {
            let threshold = config.swipe_threshold;
            let swipe = |distance: f64| Swipe {
                origin,
                distance,
                target,
            };
            if distance.x.abs() > distance.y.abs() {
                if distance.x > threshold {
                    Some(Gesture::SwipeRight(swipe(distance.x)))
                } else if distance.x < -threshold {
                    Some(Gesture::SwipeLeft(swipe(-distance.x)))
                } else {
                    None
                }
            } else if distance.y > threshold {
                Some(Gesture::SwipeDown(swipe(distance.y)))
            } else if distance.y < -threshold {
                Some(Gesture::SwipeUp(swipe(-distance.y)))
            } else {
                None
            }
        };

        self.last_completed = Some(Completed { origin, time: now });
        self.track.end();
        gesture
    }

    fn is_double_tap(&self, origin: Point, now: u64, config: &GestureConfig) -> bool {
        let Some(last) = self.last_completed else {
            return false;
        };
        let elapsed = now.saturating_sub(last.time);
        (origin.x - last.origin.x).abs() < config.double_tap_distance
            && (origin.y - last.origin.y).abs() < config.double_tap_distance
            && elapsed > config.double_tap_min_ms
            && elapsed < config.double_tap_max_ms
    }

    pub(crate) fn reset(&mut self) {
        self.track.end();
        self.last_completed = None;
    }
}
