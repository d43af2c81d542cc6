// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input primitives delivered by the host input system.
//!
//! These are deliberately minimal: a pointer lifecycle event, a discrete
//! scroll signal, and the axis along which a recognizer may be constrained.
//! Hosts translate their platform events into these types; Viewfinder never
//! talks to a windowing system directly.

use kurbo::{Point, Vec2};

/// Identifier of an active pointer contact, unique among live contacts.
pub type PointerId = u64;

/// Lifecycle phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The contact was made.
    Down,
    /// The contact moved.
    Move,
    /// The contact was lifted.
    Up,
    /// The contact was cancelled by the platform (palm rejection, window
    /// loss, …). Treated like [`PointerPhase::Up`] for tracking purposes.
    Cancel,
}

/// A pointer lifecycle event from the host input system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which contact this event belongs to.
    pub id: PointerId,
    /// Position in view coordinates.
    pub position: Point,
    /// `true` for moves synthesized by the platform rather than produced by
    /// real input. Synthesized moves do not represent user intent and are
    /// ignored by the recognizers.
    pub synthesized: bool,
    /// Lifecycle phase.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// A real (non-synthesized) event with the given phase.
    #[must_use]
    pub fn new(id: PointerId, position: Point, phase: PointerPhase) -> Self {
        Self {
            id,
            position,
            synthesized: false,
            phase,
        }
    }
}

/// A discrete scroll/wheel signal.
///
/// Wheel hardware delivers no begin/end grouping; a burst of these signals is
/// what `viewfinder_scale`'s wheel synthesizer folds into one logical scale
/// gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSignal {
    /// Vertical scroll delta. Negative is "scroll up" and maps to zoom in.
    pub delta_y: f64,
    /// Cursor position at the time of the signal, in view coordinates.
    pub position: Point,
}

/// A view axis along which movement may be constrained or measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_component_projects_onto_axis() {
        let v = Vec2::new(3.0, -7.0);
        assert_eq!(Axis::Horizontal.component(v), 3.0);
        assert_eq!(Axis::Vertical.component(v), -7.0);
    }

    #[test]
    fn pointer_event_constructor_is_not_synthesized() {
        let ev = PointerEvent::new(4, Point::new(1.0, 2.0), PointerPhase::Down);
        assert!(!ev.synthesized);
        assert_eq!(ev.phase, PointerPhase::Down);
    }
}
