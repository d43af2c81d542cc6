// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewfinder_scale --heading-base-level=0

//! Viewfinder Scale: scale-gesture recognition for interactive image views.
//!
//! This crate turns raw pointer and scroll input into the normalized
//! scale-gesture stream defined by `viewfinder_gesture`. Three building
//! blocks, each a small host-agnostic state machine:
//!
//! - [`engine::ScaleEngine`]: plain multi-pointer scale recognition — tracks
//!   contact positions, computes their centroid (the focal point) and the
//!   span-ratio scale, and emits `Start`/`Update`/`End`.
//! - [`boundary::BoundaryScaleRecognizer`]: wraps a [`engine::ScaleEngine`]
//!   and adds an arena-acceptance policy. When constrained to an axis it
//!   asks a [`boundary::PanBoundary`] collaborator, move by move, whether an
//!   ambiguous single-pointer pan belongs to this view or to an ancestor
//!   scrollable.
//! - [`wheel::WheelScaleSynthesizer`]: folds a burst of discrete
//!   modifier-gated wheel signals into one synthetic continuous scale
//!   gesture, using a trailing debounce to detect the end of the burst.
//!
//! ## Design
//!
//! None of these components call back into the host. Every input-handling
//! method returns the [`ScaleEvent`](viewfinder_gesture::ScaleEvent)s it
//! emits, in order, and the host forwards them to its consumer. Time is
//! likewise host-driven: the wheel synthesizer exposes a deadline in
//! milliseconds instead of scheduling its own timer. This keeps the crate
//! free of event-loop assumptions and makes every state transition directly
//! testable.
//!
//! All state is mutated only from within these methods; the crate assumes a
//! single event-processing thread and uses no locking.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use viewfinder_gesture::ScrollSignal;
//! use viewfinder_scale::wheel::{END_DEBOUNCE_MS, WheelScaleSynthesizer};
//!
//! let mut wheel = WheelScaleSynthesizer::new();
//! wheel.set_modifier_pressed(true);
//!
//! // One wheel tick opens a gesture and reports the first scale step.
//! let events = wheel.on_scroll(
//!     ScrollSignal { delta_y: -100.0, position: Point::new(40.0, 30.0) },
//!     1_000,
//! );
//! assert!(events[0].is_start());
//! assert!(events[1].is_update());
//!
//! // The host wakes us at the armed deadline; the quiet period ends the
//! // gesture.
//! assert_eq!(wheel.deadline(), Some(1_000 + END_DEBOUNCE_MS));
//! let events = wheel.on_deadline(1_000 + END_DEBOUNCE_MS);
//! assert!(events[0].is_end());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`); one of the `std`
//! (default) or `libm` features must be enabled.

#![no_std]

extern crate alloc;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("viewfinder_scale requires either the `std` or `libm` feature");

pub mod boundary;
pub mod engine;
pub mod wheel;
