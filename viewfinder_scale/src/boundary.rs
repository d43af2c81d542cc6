// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary-aware arena acceptance for scale gestures.
//!
//! A single-finger drag over a zoomable view is ambiguous: it could pan the
//! content, or it could scroll an ancestor (a horizontal pager, say). The
//! ambiguity is resolved by asking the content itself whether it can still
//! move in the constrained axis. [`BoundaryScaleRecognizer`] wraps a
//! [`ScaleEngine`] and, when configured with an [`Axis`], evaluates that
//! question on every real pointer move via a [`PanBoundary`] collaborator.
//!
//! The recognizer does not implement an arena; it reports a per-move claim
//! decision in [`PointerOutcome::claim`] and leaves enforcement to the host's
//! recognizer negotiation. Three rules:
//!
//! - No axis configured: never claim explicitly; behave as an unconstrained
//!   scale recognizer and compete normally.
//! - Axis configured, one contact: claim only when the collaborator reports
//!   that the content would still move — otherwise stay quiet and let the
//!   default negotiation (typically an ancestor scrollable) win.
//! - Axis configured, more than one contact: always claim. Multi-touch is
//!   never ambiguous with ancestor scrolling; the boundary test only
//!   arbitrates single-pointer pans.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use viewfinder_gesture::{Axis, PointerEvent, PointerPhase};
//! use viewfinder_scale::boundary::BoundaryScaleRecognizer;
//!
//! // Content reports it can still pan vertically.
//! let mut recognizer =
//!     BoundaryScaleRecognizer::new(Some(Axis::Vertical), |_displacement: Vec2, _axis: Axis| true);
//!
//! recognizer.on_pointer(&PointerEvent::new(1, Point::new(0.0, 0.0), PointerPhase::Down));
//! let outcome =
//!     recognizer.on_pointer(&PointerEvent::new(1, Point::new(0.0, 8.0), PointerPhase::Move));
//!
//! assert_eq!(outcome.claim, Some(1));
//! ```

use alloc::vec::Vec;

use kurbo::Vec2;

use viewfinder_gesture::{Axis, PointerEvent, PointerId, PointerPhase, ScaleEvent};

use crate::engine::ScaleEngine;

/// Content-side boundary hit test.
///
/// Answers, for a proposed displacement of the focal point, whether the
/// content would continue to scroll/pan along `axis` — or whether it has hit
/// an edge such that an ancestor should take over. Implemented by the
/// content-transform layer; also implemented for closures so tests and simple
/// hosts can pass `|displacement, axis| …`.
pub trait PanBoundary {
    /// Returns `true` if the content can still move by `displacement` along
    /// `axis`, i.e. the gesture should stay with this view.
    fn should_move(&self, displacement: Vec2, axis: Axis) -> bool;
}

impl<F> PanBoundary for F
where
    F: Fn(Vec2, Axis) -> bool,
{
    fn should_move(&self, displacement: Vec2, axis: Axis) -> bool {
        self(displacement, axis)
    }
}

/// Result of feeding one pointer event to a [`BoundaryScaleRecognizer`].
#[derive(Clone, Debug, PartialEq)]
pub struct PointerOutcome {
    /// Gesture events produced by the underlying engine, in emission order.
    pub events: Vec<ScaleEvent>,
    /// `Some(id)` when the recognizer should explicitly accept this contact
    /// in the host's gesture arena; `None` to leave resolution to the
    /// default negotiation.
    pub claim: Option<PointerId>,
}

/// A multi-pointer scale recognizer with boundary-gated arena acceptance.
///
/// Composition, not inheritance: the recognizer owns a [`ScaleEngine`] for
/// all tracking and scale computation and layers the acceptance policy on
/// top. Without an axis constraint it is exactly an unconstrained engine.
#[derive(Clone, Debug)]
pub struct BoundaryScaleRecognizer<P> {
    engine: ScaleEngine,
    axis: Option<Axis>,
    probe: P,
}

impl<P: PanBoundary> BoundaryScaleRecognizer<P> {
    /// Creates a recognizer with an optional axis constraint.
    ///
    /// The composition layer resolves the effective axis once and injects it
    /// here; there is no ambient configuration lookup inside the recognizer.
    /// `probe` is only consulted while an axis is configured.
    #[must_use]
    pub fn new(axis: Option<Axis>, probe: P) -> Self {
        Self {
            engine: ScaleEngine::new(),
            axis,
            probe,
        }
    }

    /// The configured axis constraint, if any.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Number of currently tracked contacts.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.engine.pointer_count()
    }

    /// Returns `true` while a gesture is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.engine.is_active()
    }

    /// Feeds one pointer event through tracking, scale computation, and the
    /// acceptance policy.
    ///
    /// The claim decision is evaluated only for real (non-synthesized) moves
    /// of tracked contacts while an axis is configured: the displacement is
    /// `previous_centroid - current_centroid` (the direction the content
    /// would scroll), and the contact is claimed when the [`PanBoundary`]
    /// approves that displacement or more than one contact is tracked.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> PointerOutcome {
        let arbitrate = self.axis.is_some()
            && event.phase == PointerPhase::Move
            && !event.synthesized
            && self.engine.is_tracking(event.id);
        let previous_focal = self.engine.focal_point();

        let events = self.engine.apply(event);

        let mut claim = None;
        if arbitrate {
            // `axis` checked above; re-match to keep the borrow local.
            if let Some(axis) = self.axis {
                let displacement = previous_focal - self.engine.focal_point();
                if self.engine.pointer_count() > 1
                    || self.probe.should_move(displacement, axis)
                {
                    claim = Some(event.id);
                }
            }
        }

        PointerOutcome { events, claim }
    }
}
