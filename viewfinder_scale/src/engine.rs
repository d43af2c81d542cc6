// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic multi-pointer scale recognition.
//!
//! [`ScaleEngine`] owns the pointer track — a map from contact id to last
//! known position — and derives the gesture stream from it: the focal point
//! is the centroid of all tracked positions, and the scale is the ratio of
//! the current span (mean distance of contacts from the focal point) to the
//! span at the last baseline. Rotation is ignored.
//!
//! The engine has no opinion on gesture arenas or event routing; it computes.
//! Arena policy lives in [`crate::boundary`].
//!
//! ## Usage
//!
//! Feed every pointer lifecycle event to [`ScaleEngine::apply`] and forward
//! the returned events:
//!
//! ```
//! use kurbo::Point;
//! use viewfinder_gesture::{PointerEvent, PointerPhase};
//! use viewfinder_scale::engine::ScaleEngine;
//!
//! let mut engine = ScaleEngine::new();
//!
//! let events = engine.apply(&PointerEvent::new(1, Point::new(10.0, 10.0), PointerPhase::Down));
//! assert!(events[0].is_start());
//!
//! let events = engine.apply(&PointerEvent::new(1, Point::new(15.0, 10.0), PointerPhase::Move));
//! assert!(events[0].is_update());
//!
//! let events = engine.apply(&PointerEvent::new(1, Point::new(15.0, 10.0), PointerPhase::Up));
//! assert!(events[0].is_end());
//! ```

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Vec2};

use viewfinder_gesture::{
    PointerEvent, PointerId, PointerPhase, ScaleEnd, ScaleEvent, ScaleStart, ScaleUpdate,
};

/// Spans below this are treated as degenerate; the scale holds its last
/// baseline instead of dividing by a vanishing span. A single contact always
/// has zero span, so single-pointer gestures pan without scaling.
const SPAN_EPSILON: f64 = 1e-9;

/// Multi-pointer scale-computation engine.
///
/// Tracks ≥ 1 contacts and emits `Start`/`Update`/`End` with the standard
/// semantics: focal point is the centroid of tracked positions, scale is
/// relative to gesture start (`1.0` at start), rotation is ignored, and the
/// reported pointer count is the live tracked count.
///
/// The scale baseline is re-anchored whenever the contact count changes, so
/// the reported scale stays continuous across pointer adds and removes.
#[derive(Clone, Debug)]
pub struct ScaleEngine {
    pointers: HashMap<PointerId, Point>,
    /// `true` while idle; the next admitted contact starts a fresh cycle
    /// with a cleared track.
    ready: bool,
    /// `true` between an emitted `Start` and its matching `End`.
    active: bool,
    focal: Point,
    base_span: f64,
    base_scale: f64,
    last_scale: f64,
}

impl Default for ScaleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleEngine {
    /// Creates an idle engine with no tracked contacts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointers: HashMap::new(),
            ready: true,
            active: false,
            focal: Point::ZERO,
            base_span: 0.0,
            base_scale: 1.0,
            last_scale: 1.0,
        }
    }

    /// Number of currently tracked contacts.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` while a gesture is open (`Start` emitted, `End` not).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current focal point: the centroid of all tracked positions, or the
    /// origin when no contacts are tracked.
    #[must_use]
    pub fn focal_point(&self) -> Point {
        self.focal
    }

    /// Returns `true` if the given contact is currently tracked.
    #[must_use]
    pub fn is_tracking(&self, id: PointerId) -> bool {
        self.pointers.contains_key(&id)
    }

    /// Applies one pointer event and returns the gesture events it produces.
    ///
    /// - `Down` inserts the contact; the first contact after idle clears any
    ///   residual track and opens the gesture.
    /// - `Move` overwrites the contact's position. Synthesized moves and
    ///   moves for untracked contacts are ignored entirely.
    /// - `Up`/`Cancel` removes the contact; removing the last one closes the
    ///   gesture.
    pub fn apply(&mut self, event: &PointerEvent) -> Vec<ScaleEvent> {
        match event.phase {
            PointerPhase::Down => {
                if self.ready {
                    self.pointers.clear();
                    self.ready = false;
                }
                self.pointers.insert(event.id, event.position);
            }
            PointerPhase::Move => {
                if event.synthesized || !self.pointers.contains_key(&event.id) {
                    return Vec::new();
                }
                self.pointers.insert(event.id, event.position);
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                if self.pointers.remove(&event.id).is_none() {
                    return Vec::new();
                }
                if self.pointers.is_empty() {
                    self.ready = true;
                }
            }
        }

        let previous_focal = self.focal;
        self.focal = self.centroid();
        let count = self.pointers.len();

        let mut events = Vec::with_capacity(1);
        match event.phase {
            PointerPhase::Down => {
                if self.active {
                    events.push(self.rebaseline(previous_focal, count));
                } else {
                    self.active = true;
                    self.base_scale = 1.0;
                    self.last_scale = 1.0;
                    self.base_span = self.span();
                    events.push(ScaleEvent::Start(ScaleStart {
                        focal_point: self.focal,
                        pointer_count: count,
                    }));
                }
            }
            PointerPhase::Move => {
                if self.active {
                    let span = self.span();
                    let scale = if self.base_span > SPAN_EPSILON {
                        self.base_scale * span / self.base_span
                    } else {
                        self.base_scale
                    };
                    self.last_scale = scale;
                    events.push(ScaleEvent::Update(ScaleUpdate {
                        focal_point: self.focal,
                        focal_delta: self.focal - previous_focal,
                        scale,
                        pointer_count: count,
                    }));
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                if self.active {
                    if count == 0 {
                        self.active = false;
                        events.push(ScaleEvent::End(ScaleEnd {
                            pointer_count: 0,
                            velocity: Vec2::ZERO,
                        }));
                    } else {
                        events.push(self.rebaseline(previous_focal, count));
                    }
                }
            }
        }
        events
    }

    /// Re-anchors the scale baseline after a contact-count change and emits
    /// an update at the unchanged scale, so consumers see a continuous value.
    fn rebaseline(&mut self, previous_focal: Point, count: usize) -> ScaleEvent {
        self.base_scale = self.last_scale;
        self.base_span = self.span();
        ScaleEvent::Update(ScaleUpdate {
            focal_point: self.focal,
            focal_delta: self.focal - previous_focal,
            scale: self.last_scale,
            pointer_count: count,
        })
    }

    fn centroid(&self) -> Point {
        let count = self.pointers.len();
        if count == 0 {
            return Point::ZERO;
        }
        let sum = self
            .pointers
            .values()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        (sum / count as f64).to_point()
    }

    fn span(&self) -> f64 {
        let count = self.pointers.len();
        if count == 0 {
            return 0.0;
        }
        let total: f64 = self
            .pointers
            .values()
            .map(|p| (*p - self.focal).hypot())
            .sum();
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(id: PointerId, x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(id, Point::new(x, y), PointerPhase::Down)
    }

    fn mv(id: PointerId, x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(id, Point::new(x, y), PointerPhase::Move)
    }

    fn up(id: PointerId, x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(id, Point::new(x, y), PointerPhase::Up)
    }

    #[test]
    fn first_down_opens_gesture() {
        let mut engine = ScaleEngine::new();
        let events = engine.apply(&down(1, 10.0, 20.0));

        assert_eq!(
            events,
            alloc::vec![ScaleEvent::Start(ScaleStart {
                focal_point: Point::new(10.0, 20.0),
                pointer_count: 1,
            })]
        );
        assert!(engine.is_active());
        assert_eq!(engine.pointer_count(), 1);
    }

    #[test]
    fn single_pointer_move_pans_without_scaling() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 10.0, 10.0));

        let events = engine.apply(&mv(1, 16.0, 13.0));
        let ScaleEvent::Update(update) = events[0] else {
            panic!("expected update, got {events:?}");
        };
        assert_eq!(update.focal_point, Point::new(16.0, 13.0));
        assert_eq!(update.focal_delta, Vec2::new(6.0, 3.0));
        assert_eq!(update.scale, 1.0);
        assert_eq!(update.pointer_count, 1);
    }

    #[test]
    fn last_up_closes_gesture() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 0.0, 0.0));

        let events = engine.apply(&up(1, 0.0, 0.0));
        assert_eq!(
            events,
            alloc::vec![ScaleEvent::End(ScaleEnd {
                pointer_count: 0,
                velocity: Vec2::ZERO,
            })]
        );
        assert!(!engine.is_active());
        assert_eq!(engine.pointer_count(), 0);
    }

    #[test]
    fn second_down_updates_at_continuous_scale() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 0.0, 0.0));

        let events = engine.apply(&down(2, 4.0, 0.0));
        let ScaleEvent::Update(update) = events[0] else {
            panic!("expected update, got {events:?}");
        };
        assert_eq!(update.focal_point, Point::new(2.0, 0.0));
        assert_eq!(update.scale, 1.0);
        assert_eq!(update.pointer_count, 2);
    }

    #[test]
    fn spreading_two_pointers_doubles_scale() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 0.0, 0.0));
        engine.apply(&down(2, 2.0, 0.0));

        // Span grows from 1.0 (contacts ±1 around the focal point) to 2.0.
        let events = engine.apply(&mv(2, 4.0, 0.0));
        let ScaleEvent::Update(update) = events[0] else {
            panic!("expected update, got {events:?}");
        };
        assert!((update.scale - 2.0).abs() < 1e-12);
        assert_eq!(update.focal_point, Point::new(2.0, 0.0));
    }

    #[test]
    fn scale_is_continuous_across_pointer_removal() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 0.0, 0.0));
        engine.apply(&down(2, 2.0, 0.0));
        engine.apply(&mv(2, 4.0, 0.0)); // scale 2.0

        // Lifting one finger must not snap the scale back.
        let events = engine.apply(&up(1, 0.0, 0.0));
        let ScaleEvent::Update(update) = events[0] else {
            panic!("expected update, got {events:?}");
        };
        assert!((update.scale - 2.0).abs() < 1e-12);
        assert_eq!(update.pointer_count, 1);

        // And further single-pointer movement holds it.
        let events = engine.apply(&mv(2, 10.0, 5.0));
        let ScaleEvent::Update(update) = events[0] else {
            panic!("expected update, got {events:?}");
        };
        assert!((update.scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn synthesized_moves_are_ignored() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 10.0, 10.0));

        let mut synthetic = mv(1, 500.0, 500.0);
        synthetic.synthesized = true;
        let events = engine.apply(&synthetic);

        assert!(events.is_empty());
        assert_eq!(engine.focal_point(), Point::new(10.0, 10.0));
    }

    #[test]
    fn moves_for_untracked_pointers_are_ignored() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 10.0, 10.0));

        let events = engine.apply(&mv(7, 0.0, 0.0));
        assert!(events.is_empty());
        assert_eq!(engine.pointer_count(), 1);
    }

    #[test]
    fn up_for_untracked_pointer_is_ignored() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 10.0, 10.0));

        let events = engine.apply(&up(9, 0.0, 0.0));
        assert!(events.is_empty());
        assert!(engine.is_active());
    }

    #[test]
    fn idle_reset_clears_residual_positions() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 0.0, 0.0));
        engine.apply(&down(2, 100.0, 100.0));
        engine.apply(&up(1, 0.0, 0.0));
        engine.apply(&up(2, 100.0, 100.0));

        // Fresh cycle: the old contacts must not influence the new focal point.
        let events = engine.apply(&down(3, 50.0, 60.0));
        assert_eq!(
            events,
            alloc::vec![ScaleEvent::Start(ScaleStart {
                focal_point: Point::new(50.0, 60.0),
                pointer_count: 1,
            })]
        );
        assert_eq!(engine.pointer_count(), 1);
    }

    #[test]
    fn centroid_averages_all_tracked_positions() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 0.0, 0.0));
        engine.apply(&down(2, 10.0, 0.0));
        engine.apply(&down(3, 5.0, 9.0));

        assert_eq!(engine.focal_point(), Point::new(5.0, 3.0));
    }

    #[test]
    fn cancel_behaves_like_up() {
        let mut engine = ScaleEngine::new();
        engine.apply(&down(1, 0.0, 0.0));

        let events = engine.apply(&PointerEvent::new(
            1,
            Point::new(0.0, 0.0),
            PointerPhase::Cancel,
        ));
        assert!(events[0].is_end());
        assert!(!engine.is_active());
    }

    #[test]
    fn every_emission_sequence_is_start_update_end() {
        let mut engine = ScaleEngine::new();
        let inputs = [
            down(1, 0.0, 0.0),
            mv(1, 5.0, 0.0),
            down(2, 10.0, 0.0),
            mv(2, 12.0, 2.0),
            up(1, 5.0, 0.0),
            mv(2, 14.0, 2.0),
            up(2, 14.0, 2.0),
        ];

        let mut open = false;
        for input in &inputs {
            for event in engine.apply(input) {
                match event {
                    ScaleEvent::Start(_) => {
                        assert!(!open, "start while a gesture is open");
                        open = true;
                    }
                    ScaleEvent::Update(update) => {
                        assert!(open, "update without an open gesture");
                        assert!(update.scale > 0.0 && update.scale.is_finite());
                    }
                    ScaleEvent::End(_) => {
                        assert!(open, "end without an open gesture");
                        open = false;
                    }
                }
            }
        }
        assert!(!open, "gesture left open at end of input");
    }
}
