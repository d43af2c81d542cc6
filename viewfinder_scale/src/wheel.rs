// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthesizes a continuous scale gesture from discrete wheel signals.
//!
//! Wheel and trackpad hardware deliver scroll ticks with no begin/end
//! grouping, so [`WheelScaleSynthesizer`] has to invent the gesture
//! boundaries itself: a qualifying tick while idle opens a gesture, each tick
//! folds a multiplicative zoom factor into the accumulated scale, and a
//! trailing debounce closes the gesture once the burst goes quiet.
//!
//! Zoom is multiplicative with the existing value, so the tick delta maps to
//! a factor through `exp`: two small steps compose to the same factor as one
//! large step (`exp(d/2)² == exp(d)`), which matches how a pinch gesture's
//! scale composes.
//!
//! Time is host-driven. `on_scroll` arms [`WheelScaleSynthesizer::deadline`];
//! the host schedules a wakeup for that instant and calls
//! [`WheelScaleSynthesizer::on_deadline`]. A wakeup for a deadline that has
//! since been re-armed or cleared is a no-op, so cancel-and-reschedule and
//! double cancellation need no care on the host side.
//!
//! The synthesized gesture reports a pointer count of 2, imitating a
//! two-finger pinch for any downstream logic keyed on contact count.

use alloc::vec::Vec;

use kurbo::Vec2;

use viewfinder_gesture::{ScaleEnd, ScaleEvent, ScaleStart, ScaleUpdate, ScrollSignal};

/// Scroll delta per factor of `e`. Negative deltas (scroll up) zoom in.
pub const SCROLL_SENSITIVITY: f64 = 200.0;

/// Quiet period after the last qualifying tick before the gesture ends.
pub const END_DEBOUNCE_MS: u64 = 120;

/// Lower clamp on the accumulated scale. This only keeps the emitted scale
/// strictly positive; it is not a zoom limit, which belongs to the consumer.
/// The upper bound is deliberately unbounded.
pub const MIN_ACCUMULATED_SCALE: f64 = 0.01;

/// Contact count reported by synthesized wheel gestures.
const SYNTHETIC_POINTER_COUNT: usize = 2;

/// Folds modifier-gated scroll signals into one scale gesture per burst.
///
/// See the [module docs](self) for the synthesis model. The modifier key
/// state is ambient: the host mirrors it in with
/// [`WheelScaleSynthesizer::set_modifier_pressed`] and the synthesizer reads
/// it at [`WheelScaleSynthesizer::on_scroll`] time.
#[derive(Clone, Debug)]
pub struct WheelScaleSynthesizer {
    modifier_pressed: bool,
    /// `true` between a synthesized `Start` and its matching `End`.
    active: bool,
    accumulated_scale: f64,
    /// Instant (host milliseconds) at which the open gesture should end,
    /// unless another qualifying tick re-arms it first.
    deadline: Option<u64>,
}

impl Default for WheelScaleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelScaleSynthesizer {
    /// Creates an idle synthesizer with the modifier released.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modifier_pressed: false,
            active: false,
            accumulated_scale: 1.0,
            deadline: None,
        }
    }

    /// Mirrors the host's modifier-key state.
    ///
    /// This only records the state; an active gesture is closed by the next
    /// scroll signal that arrives with the modifier released, or by the
    /// debounce deadline, whichever comes first.
    pub fn set_modifier_pressed(&mut self, pressed: bool) {
        self.modifier_pressed = pressed;
    }

    /// Returns `true` between a synthesized `Start` and its matching `End`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The gesture-relative scale accumulated so far (`1.0` at start).
    #[must_use]
    pub fn accumulated_scale(&self) -> f64 {
        self.accumulated_scale
    }

    /// Instant at which the host should next call
    /// [`WheelScaleSynthesizer::on_deadline`], if a wakeup is armed.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Handles one scroll signal at host time `now` (milliseconds).
    ///
    /// With the modifier released this closes any open gesture immediately —
    /// releasing the key must never leave a gesture dangling. With the
    /// modifier held it opens a gesture if needed, folds the tick into the
    /// accumulated scale, reports an update, and re-arms the debounce
    /// deadline at `now + END_DEBOUNCE_MS`.
    pub fn on_scroll(&mut self, signal: ScrollSignal, now: u64) -> Vec<ScaleEvent> {
        if !self.modifier_pressed {
            return match self.finish() {
                Some(end) => alloc::vec![end],
                None => Vec::new(),
            };
        }

        let factor = libm::exp(-signal.delta_y / SCROLL_SENSITIVITY);

        let mut events = Vec::with_capacity(2);
        if !self.active {
            self.active = true;
            self.accumulated_scale = 1.0;
            events.push(ScaleEvent::Start(ScaleStart {
                focal_point: signal.position,
                pointer_count: SYNTHETIC_POINTER_COUNT,
            }));
        }

        self.accumulated_scale = (self.accumulated_scale * factor).max(MIN_ACCUMULATED_SCALE);
        events.push(ScaleEvent::Update(ScaleUpdate {
            focal_point: signal.position,
            focal_delta: Vec2::new(0.0, signal.delta_y),
            scale: self.accumulated_scale,
            pointer_count: SYNTHETIC_POINTER_COUNT,
        }));

        self.deadline = Some(now + END_DEBOUNCE_MS);
        events
    }

    /// Handles a host wakeup at time `now` (milliseconds).
    ///
    /// Ends the gesture if it is still open and the armed deadline has
    /// elapsed. Stale wakeups — the deadline was re-armed by a later tick or
    /// cleared by another end-of-gesture trigger — do nothing.
    pub fn on_deadline(&mut self, now: u64) -> Vec<ScaleEvent> {
        match self.deadline {
            Some(deadline) if now >= deadline => match self.finish() {
                Some(end) => alloc::vec![end],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Tears the synthesizer down: clears any armed deadline without
    /// emitting `End` (the owning view is going away; there is no consumer
    /// left to notify). Idempotent.
    pub fn cancel(&mut self) {
        self.active = false;
        self.deadline = None;
    }

    /// The single end-of-gesture transition, shared by every trigger
    /// (debounce fire, modifier release). Returns the `End` to emit, or
    /// `None` if no gesture is open.
    fn finish(&mut self) -> Option<ScaleEvent> {
        self.deadline = None;
        if !self.active {
            return None;
        }
        self.active = false;
        Some(ScaleEvent::End(ScaleEnd {
            pointer_count: SYNTHETIC_POINTER_COUNT,
            velocity: Vec2::ZERO,
        }))
    }
}
