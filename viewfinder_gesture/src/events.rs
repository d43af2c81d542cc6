// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized scale-gesture event stream.
//!
//! Every gesture source in Viewfinder — the multi-pointer recognizer and the
//! wheel synthesizer alike — reports its output as a sequence of these
//! events. The sequence contract is: one [`ScaleStart`], then zero or more
//! [`ScaleUpdate`]s, then one [`ScaleEnd`]; no updates or ends outside an
//! open gesture, no overlapping gestures from the same source.

use kurbo::{Point, Vec2};

/// Opens a scale gesture.
///
/// Emitted exactly once per gesture, before any [`ScaleUpdate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleStart {
    /// Centroid of the contacts driving the gesture, in view coordinates.
    pub focal_point: Point,
    /// Number of contacts at gesture start. Synthesized gestures report the
    /// contact count they are imitating (a wheel zoom reports `2`).
    pub pointer_count: usize,
}

/// Reports progress of an open scale gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleUpdate {
    /// Current centroid of the tracked contacts.
    pub focal_point: Point,
    /// Movement of the focal point since the previous report.
    pub focal_delta: Vec2,
    /// Scale relative to gesture start (`1.0` at start). Always strictly
    /// positive and finite.
    pub scale: f64,
    /// Number of contacts currently driving the gesture.
    pub pointer_count: usize,
}

/// Terminates a scale gesture.
///
/// Emitted exactly once per gesture, after all of its updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleEnd {
    /// Number of contacts still tracked when the gesture ended.
    pub pointer_count: usize,
    /// Focal-point velocity at release, or zero if unknown. Viewfinder does
    /// not compute momentum; sources that cannot measure velocity report
    /// [`Vec2::ZERO`] and leave fling physics to the consumer.
    pub velocity: Vec2,
}

/// A single step of the scale-gesture stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleEvent {
    /// The gesture opened.
    Start(ScaleStart),
    /// The gesture progressed.
    Update(ScaleUpdate),
    /// The gesture terminated.
    End(ScaleEnd),
}

impl ScaleEvent {
    /// Returns `true` for a [`ScaleEvent::Start`].
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start(_))
    }

    /// Returns `true` for a [`ScaleEvent::Update`].
    #[must_use]
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    /// Returns `true` for a [`ScaleEvent::End`].
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End(_))
    }
}
