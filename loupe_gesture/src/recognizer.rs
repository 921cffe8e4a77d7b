// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

use crate::multi::MultiTouch;
use crate::single::SingleTouch;
use crate::{
    Gesture, GestureConfig, GestureHandler, InputError, InputEvent, MultiTouchMode, Pinch,
    PointerSample, read_pointer_position,
};

/// Outcome of feeding one event to a [`GestureRecognizer`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    /// Gestures recognized from the event, in emission order.
    pub gestures: SmallVec<[Gesture; 2]>,
    /// Whether the host should suppress the platform's default handling of
    /// the event (page scroll, native zoom).
    pub prevent_default: bool,
}

/// Turns raw input into [`Gesture`]s.
///
/// Single-pointer tracking and two-finger tracking run side by side; which of
/// them is active follows from [`GestureConfig::kinds`]. While paused, new
/// interactions are ignored but ones already in progress run to completion.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    single: SingleTouch,
    multi: MultiTouch,
    paused: bool,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            single: SingleTouch::default(),
            multi: MultiTouch::default(),
            paused: false,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Ignore (or stop ignoring) new interactions.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// `true` while new interactions are ignored.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `true` while a single-pointer or two-finger interaction is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.single.is_tracking() || self.multi.is_tracking()
    }

    /// Drops all interaction state, including the double-tap history.
    pub fn reset(&mut self) {
        self.single.reset();
        self.multi.end();
    }

    /// Feeds one event recorded at `now` (milliseconds, any epoch).
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for events without usable coordinates or
    /// with non-finite values, and [`InputError::MissingTouches`] for a move
    /// that drops below two touches while a touch pinch is tracked. A
    /// rejected event changes no state.
    pub fn handle(&mut self, event: &InputEvent, now: u64) -> Result<Response, InputError> {
        let mut response = Response::default();
        match event {
            InputEvent::Down(sample) => {
                let pos = read_pointer_position(sample)?;
                let pair = self.fallback_pair(sample);
                if self.paused {
                    return Ok(response);
                }
                if self.config.tracks_single() {
                    self.single.start(pos, sample.target);
                }
                if let Some(pair) = pair {
                    self.multi.start_touches(pair, sample.target);
                }
            }
            InputEvent::Move(sample) => {
                let pos = read_pointer_position(sample)?;
                let pair = self.fallback_pair(sample);
                if pair.is_none() && self.multi.is_tracking_touches() {
                    return Err(InputError::MissingTouches);
                }
                if self.config.tracks_single() {
                    response.prevent_default |= self.config.cancel_default_touch_behavior;
                    if let Some(drag) = self.single.change(pos) {
                        response.gestures.push(drag);
                    }
                }
                if let Some(pair) = pair {
                    response.prevent_default |= self.config.cancel_default_gesture_behavior;
                    if let Some(pinch) = self.multi.change_touches(pair) {
                        response.gestures.push(pinch);
                    }
                }
            }
            InputEvent::Up => {
                if let Some(gesture) = self.single.end(now, &self.config) {
                    response.gestures.push(gesture);
                }
                if self.config.multi_touch_mode == MultiTouchMode::TouchFallback {
                    self.multi.end();
                }
            }
            InputEvent::Wheel { delta, pointer } => {
                if !delta.is_finite() {
                    return Err(InputError::NonFiniteCoordinates);
                }
                let position = read_pointer_position(pointer)?;
                if self.config.tracks_multi() {
                    response.prevent_default = self.config.cancel_default_gesture_behavior;
                    let increment = self.config.wheel_increment;
                    response.gestures.push(Gesture::Pinch(Pinch {
                        position,
                        scale: if *delta > 0.0 { increment } else { -increment },
                        target: pointer.target,
                    }));
                }
            }
            InputEvent::GestureStart {
                scale,
                rotation,
                pointer,
            } => {
                if !self.handles_native() {
                    return Ok(response);
                }
                check_finite(*scale, *rotation)?;
                response.prevent_default = self.config.cancel_default_gesture_behavior;
                if !self.paused {
                    self.multi.start_native(*scale, *rotation, pointer.target);
                }
            }
            InputEvent::GestureChange {
                scale,
                rotation,
                pointer,
            } => {
                if !self.handles_native() {
                    return Ok(response);
                }
                check_finite(*scale, *rotation)?;
                let position = read_pointer_position(pointer)?;
                response.prevent_default = self.config.cancel_default_gesture_behavior;
                response.gestures = self.multi.change_native(*scale, *rotation, position);
            }
            InputEvent::GestureEnd => {
                if self.handles_native() {
                    self.multi.end();
                }
            }
        }
        let kinds = self.config.kinds;
        response.gestures.retain(|g| kinds.contains(g.kind()));
        Ok(response)
    }

    /// Like [`handle`](Self::handle), then dispatches every recognized gesture
    /// to `handler`.
    ///
    /// # Errors
    ///
    /// See [`handle`](Self::handle).
    pub fn handle_with<H: GestureHandler + ?Sized>(
        &mut self,
        event: &InputEvent,
        now: u64,
        handler: &mut H,
    ) -> Result<bool, InputError> {
        let response = self.handle(event, now)?;
        for gesture in &response.gestures {
            gesture.dispatch(handler);
        }
        Ok(response.prevent_default)
    }

    fn handles_native(&self) -> bool {
        self.config.tracks_multi() && self.config.multi_touch_mode == MultiTouchMode::Native
    }

    /// The two touch points of a sample, when fallback pinch tracking applies.
    fn fallback_pair(&self, sample: &PointerSample) -> Option<[Point; 2]> {
        if !self.config.tracks_multi() || self.config.multi_touch_mode != MultiTouchMode::TouchFallback
        {
            return None;
        }
        match sample.touches.as_slice() {
            [a, b, ..] => Some([*a, *b]),
            _ => None,
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

fn check_finite(scale: f64, rotation: f64) -> Result<(), InputError> {
    if scale.is_finite() && rotation.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFiniteCoordinates)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::GestureRecognizer;
    use crate::{
        Gesture, GestureConfig, GestureHandler, GestureKinds, InputError, InputEvent,
        MultiTouchMode, PointerSample, Swipe, Tap,
    };

    fn down(x: f64, y: f64) -> InputEvent {
        InputEvent::Down(PointerSample::at(Point::new(x, y)))
    }

    fn moved(x: f64, y: f64) -> InputEvent {
        InputEvent::Move(PointerSample::at(Point::new(x, y)))
    }

    fn two(a: (f64, f64), b: (f64, f64)) -> PointerSample {
        PointerSample::touches([Point::new(a.0, a.1), Point::new(b.0, b.1)])
    }

    #[test]
    fn drag_reports_incremental_deltas() {
        let mut r = GestureRecognizer::default();
        r.handle(&down(10.0, 10.0), 0).unwrap();
        let first = r.handle(&moved(15.0, 12.0), 10).unwrap();
        let second = r.handle(&moved(25.0, 12.0), 20).unwrap();
        match (first.gestures.as_slice(), second.gestures.as_slice()) {
            ([Gesture::Drag(a)], [Gesture::Drag(b)]) => {
                assert_eq!(a.origin, Point::new(10.0, 10.0));
                assert_eq!(a.delta, Vec2::new(5.0, 2.0));
                assert_eq!(b.delta, Vec2::new(10.0, 0.0));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(first.prevent_default);
    }

    #[test]
    fn release_past_threshold_is_exactly_one_swipe_right() {
        let mut r = GestureRecognizer::default();
        r.handle(&down(100.0, 100.0), 0).unwrap();
        r.handle(&moved(160.0, 100.0), 16).unwrap();
        let up = r.handle(&InputEvent::Up, 32).unwrap();
        assert_eq!(
            up.gestures.as_slice(),
            &[Gesture::SwipeRight(Swipe {
                origin: Point::new(100.0, 100.0),
                distance: 60.0,
                target: None,
            })]
        );
        assert!(!r.is_tracking());
    }

    #[test]
    fn swipe_directions() {
        let cases = [
            ((0.0, 0.0), (-70.0, 10.0), "left"),
            ((0.0, 0.0), (5.0, 80.0), "down"),
            ((0.0, 0.0), (5.0, -80.0), "up"),
        ];
        for (from, to, dir) in cases {
            let mut r = GestureRecognizer::default();
            r.handle(&down(from.0, from.1), 0).unwrap();
            r.handle(&moved(to.0, to.1), 10).unwrap();
            let up = r.handle(&InputEvent::Up, 20).unwrap();
            let ok = match (dir, up.gestures.as_slice()) {
                ("left", [Gesture::SwipeLeft(s)]) => s.distance == 70.0,
                ("down", [Gesture::SwipeDown(s)]) => s.distance == 80.0,
                ("up", [Gesture::SwipeUp(s)]) => s.distance == 80.0,
                _ => false,
            };
            assert!(ok, "{dir}: {:?}", up.gestures);
        }
    }

    #[test]
    fn short_travel_is_no_swipe() {
        let mut r = GestureRecognizer::default();
        r.handle(&down(0.0, 0.0), 0).unwrap();
        r.handle(&moved(50.0, 0.0), 10).unwrap();
        assert!(r.handle(&InputEvent::Up, 20).unwrap().gestures.is_empty());
    }

    #[test]
    fn double_tap_suppresses_swipe() {
        let mut r = GestureRecognizer::default();
        r.handle(&down(200.0, 200.0), 0).unwrap();
        assert!(r.handle(&InputEvent::Up, 50).unwrap().gestures.is_empty());

        r.handle(&down(205.0, 203.0), 200).unwrap();
        r.handle(&moved(300.0, 203.0), 220).unwrap();
        let up = r.handle(&InputEvent::Up, 250).unwrap();
        assert_eq!(
            up.gestures.as_slice(),
            &[Gesture::DoubleTap(Tap {
                position: Point::new(205.0, 203.0),
                target: None,
            })]
        );
    }

    #[test]
    fn double_tap_window_is_open_interval() {
        for (gap, expect) in [(100, false), (101, true), (499, true), (500, false)] {
            let mut r = GestureRecognizer::default();
            r.handle(&down(0.0, 0.0), 0).unwrap();
            r.handle(&InputEvent::Up, 0).unwrap();
            r.handle(&down(0.0, 0.0), gap).unwrap();
            let up = r.handle(&InputEvent::Up, gap).unwrap();
            assert_eq!(
                matches!(up.gestures.as_slice(), [Gesture::DoubleTap(_)]),
                expect,
                "gap {gap}"
            );
        }
    }

    #[test]
    fn far_apart_taps_are_not_double() {
        let mut r = GestureRecognizer::default();
        r.handle(&down(0.0, 0.0), 0).unwrap();
        r.handle(&InputEvent::Up, 0).unwrap();
        r.handle(&down(10.0, 0.0), 200).unwrap();
        assert!(r.handle(&InputEvent::Up, 200).unwrap().gestures.is_empty());
    }

    #[test]
    fn fallback_pinch_averages_axis_ratios() {
        let mut r = GestureRecognizer::default();
        r.handle(&InputEvent::Down(two((0.0, 50.0), (100.0, 50.0))), 0)
            .unwrap();
        let resp = r
            .handle(&InputEvent::Move(two((0.0, 50.0), (150.0, 50.0))), 10)
            .unwrap();
        let pinch = resp
            .gestures
            .iter()
            .find_map(|g| match g {
                Gesture::Pinch(p) => Some(p.scale),
                _ => None,
            })
            .unwrap();
        assert_eq!(pinch, 0.25);
    }

    #[test]
    fn one_finger_move_during_pinch_is_rejected() {
        let mut r = GestureRecognizer::default();
        r.handle(&InputEvent::Down(two((0.0, 50.0), (100.0, 50.0))), 0)
            .unwrap();
        let lifted = InputEvent::Move(PointerSample::touches([Point::new(10.0, 50.0)]));
        assert_eq!(r.handle(&lifted, 5), Err(InputError::MissingTouches));

        // Both tracks still measure from the pair that went down.
        let resp = r
            .handle(&InputEvent::Move(two((0.0, 50.0), (150.0, 50.0))), 10)
            .unwrap();
        match resp.gestures.as_slice() {
            [Gesture::Drag(d), Gesture::Pinch(p)] => {
                assert_eq!(d.delta, Vec2::ZERO);
                assert_eq!(p.scale, 0.25);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn single_touch_moves_are_fine_without_a_pinch() {
        let mut r = GestureRecognizer::default();
        let one = |x: f64| PointerSample::touches([Point::new(x, 0.0)]);
        r.handle(&InputEvent::Down(one(0.0)), 0).unwrap();
        let resp = r.handle(&InputEvent::Move(one(4.0)), 10).unwrap();
        assert!(matches!(resp.gestures.as_slice(), [Gesture::Drag(d)] if d.delta == Vec2::new(4.0, 0.0)));
    }

    #[test]
    fn native_change_without_position_is_rejected() {
        let cfg = GestureConfig::default().with_multi_touch_mode(MultiTouchMode::Native);
        let mut r = GestureRecognizer::new(cfg);
        r.handle(
            &InputEvent::GestureStart {
                scale: 1.0,
                rotation: 0.0,
                pointer: PointerSample::at(Point::new(5.0, 5.0)),
            },
            0,
        )
        .unwrap();
        let blind = InputEvent::GestureChange {
            scale: 2.0,
            rotation: 20.0,
            pointer: PointerSample::default(),
        };
        assert_eq!(r.handle(&blind, 5), Err(InputError::MissingCoordinates));

        let resp = r
            .handle(
                &InputEvent::GestureChange {
                    scale: 1.5,
                    rotation: 10.0,
                    pointer: PointerSample::at(Point::new(5.0, 5.0)),
                },
                10,
            )
            .unwrap();
        assert!(matches!(resp.gestures.as_slice(), [Gesture::Pinch(p), _] if p.scale == 0.5));
    }

    #[test]
    fn native_gesture_reports_pinch_and_twist_deltas() {
        let cfg = GestureConfig::default().with_multi_touch_mode(MultiTouchMode::Native);
        let mut r = GestureRecognizer::new(cfg);
        let at = PointerSample::at(Point::new(5.0, 5.0));
        r.handle(
            &InputEvent::GestureStart {
                scale: 1.0,
                rotation: 0.0,
                pointer: at.clone(),
            },
            0,
        )
        .unwrap();
        let resp = r
            .handle(
                &InputEvent::GestureChange {
                    scale: 1.5,
                    rotation: 10.0,
                    pointer: at.clone(),
                },
                10,
            )
            .unwrap();
        match resp.gestures.as_slice() {
            [Gesture::Pinch(p), Gesture::Twist(t)] => {
                assert_eq!(p.scale, 0.5);
                assert_eq!(t.rotation, 10.0);
                assert_eq!(p.position, Point::new(5.0, 5.0));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(resp.prevent_default);
        r.handle(&InputEvent::GestureEnd, 20).unwrap();
        assert!(!r.is_tracking());
    }

    #[test]
    fn wheel_emits_signed_increment() {
        let mut r = GestureRecognizer::default();
        r.set_paused(true);
        let pointer = PointerSample::at(Point::new(1.0, 2.0));
        let zoom_in = r
            .handle(
                &InputEvent::Wheel {
                    delta: 3.0,
                    pointer: pointer.clone(),
                },
                0,
            )
            .unwrap();
        let zoom_out = r
            .handle(&InputEvent::Wheel { delta: -1.0, pointer }, 0)
            .unwrap();
        assert!(matches!(zoom_in.gestures.as_slice(), [Gesture::Pinch(p)] if p.scale == 0.1));
        assert!(matches!(zoom_out.gestures.as_slice(), [Gesture::Pinch(p)] if p.scale == -0.1));
        assert!(zoom_in.prevent_default);
    }

    #[test]
    fn paused_ignores_new_interactions() {
        let mut r = GestureRecognizer::default();
        r.set_paused(true);
        r.handle(&down(0.0, 0.0), 0).unwrap();
        assert!(!r.is_tracking());
        assert!(r.handle(&moved(100.0, 0.0), 10).unwrap().gestures.is_empty());
        assert!(r.handle(&InputEvent::Up, 20).unwrap().gestures.is_empty());
    }

    #[test]
    fn kinds_filter_output() {
        let cfg = GestureConfig::default().with_kinds(GestureKinds::SWIPES);
        let mut r = GestureRecognizer::new(cfg);
        r.handle(&down(0.0, 0.0), 0).unwrap();
        assert!(r.handle(&moved(80.0, 0.0), 10).unwrap().gestures.is_empty());
        let up = r.handle(&InputEvent::Up, 20).unwrap();
        assert!(matches!(up.gestures.as_slice(), [Gesture::SwipeRight(_)]));
    }

    #[test]
    fn malformed_events_leave_state_untouched() {
        let mut r = GestureRecognizer::default();
        assert_eq!(
            r.handle(&InputEvent::Down(PointerSample::default()), 0),
            Err(InputError::MissingCoordinates)
        );
        assert!(!r.is_tracking());

        r.handle(&down(0.0, 0.0), 0).unwrap();
        let nan = InputEvent::Move(PointerSample::at(Point::new(f64::NAN, 0.0)));
        assert_eq!(r.handle(&nan, 5), Err(InputError::NonFiniteCoordinates));
        let drag = r.handle(&moved(3.0, 0.0), 10).unwrap();
        assert!(matches!(drag.gestures.as_slice(), [Gesture::Drag(d)] if d.delta == Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn handler_receives_dispatched_gestures() {
        #[derive(Default)]
        struct Rights(u32);
        impl GestureHandler for Rights {
            fn swipe_right(&mut self, _swipe: &Swipe) {
                self.0 += 1;
            }
        }

        let mut r = GestureRecognizer::default();
        let mut rights = Rights::default();
        r.handle_with(&down(0.0, 0.0), 0, &mut rights).unwrap();
        r.handle_with(&moved(90.0, 0.0), 10, &mut rights).unwrap();
        let prevent = r.handle_with(&InputEvent::Up, 20, &mut rights).unwrap();
        assert_eq!(rights.0, 1);
        assert!(!prevent);
    }
}
