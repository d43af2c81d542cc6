// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewfinder_gesture --heading-base-level=0

//! Viewfinder Gesture: normalized scale-gesture and pointer input primitives.
//!
//! This crate defines the shared data model that Viewfinder's gesture state
//! machines consume and produce:
//!
//! - [`events`]: the normalized scale-gesture stream — [`ScaleStart`],
//!   [`ScaleUpdate`], and [`ScaleEnd`], multiplexed as [`ScaleEvent`]
//! - [`input`]: raw input primitives — [`PointerEvent`], [`ScrollSignal`],
//!   and the [`Axis`] along which a recognizer may be constrained
//!
//! ## The scale-gesture stream
//!
//! A scale gesture is a strictly ordered sequence: exactly one [`ScaleStart`],
//! zero or more [`ScaleUpdate`]s, exactly one [`ScaleEnd`]. Producers never
//! emit an update or end without an open gesture and never overlap gestures;
//! consumers may however receive a second `Start` after a prior `End`, since
//! independent gesture sources (multi-touch and synthesized wheel gestures)
//! are multiplexed onto the same stream.
//!
//! The reported [`ScaleUpdate::scale`] is relative to the gesture's start
//! (`1.0` at start) and is always strictly positive and finite.
//!
//! ```
//! use kurbo::Point;
//! use viewfinder_gesture::events::{ScaleEvent, ScaleStart};
//!
//! let start = ScaleEvent::Start(ScaleStart {
//!     focal_point: Point::new(100.0, 50.0),
//!     pointer_count: 2,
//! });
//! assert!(matches!(start, ScaleEvent::Start(_)));
//! ```
//!
//! This crate makes no assumptions about the host's event loop, windowing
//! system, or widget tree. It is `no_std` compatible.

#![no_std]

pub mod events;
pub mod input;

pub use events::{ScaleEnd, ScaleEvent, ScaleStart, ScaleUpdate};
pub use input::{Axis, PointerEvent, PointerId, PointerPhase, ScrollSignal};
