//! Timed gate: a countdown that permits an action while it is open.
//!
//! Coyote time, jump buffering, invulnerability, patrol waits, alert decay and
//! camera shake are all the same shape: arm with a duration on some trigger,
//! subtract elapsed time every tick, and treat the gate as open while any
//! time remains. Pure data, no Bevy systems.

use bevy::prelude::*;

/// A non-negative countdown. Open while `remaining > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct TimedGate {
    remaining: f32,
}

impl TimedGate {
    /// A closed gate.
    pub const CLOSED: Self = Self { remaining: 0.0 };

    /// Creates a gate already armed with `duration`.
    #[must_use]
    pub fn armed(duration: f32) -> Self {
        let mut gate = Self::CLOSED;
        gate.arm(duration);
        gate
    }

    /// Opens the gate for `duration` seconds, replacing any time left.
    /// Negative or NaN durations close the gate instead.
    pub fn arm(&mut self, duration: f32) {
        self.remaining = if duration > 0.0 { duration } else { 0.0 };
    }

    /// Advances the countdown by `dt` seconds.
    ///
    /// Returns `true` only on the tick the gate goes from open to closed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        let dt = if dt > 0.0 { dt } else { 0.0 };
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining <= 0.0
    }

    /// Whether the gated action is currently permitted.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.remaining > 0.0
    }

    /// Closes the gate if it was open. Returns whether it was open.
    pub fn consume(&mut self) -> bool {
        let was_open = self.is_open();
        self.clear();
        was_open
    }

    /// Closes the gate.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    /// Seconds left before the gate closes.
    #[must_use]
    pub const fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Remaining time as a fraction of `duration`, in `[0, 1]`.
    #[must_use]
    pub fn fraction_of(&self, duration: f32) -> f32 {
        if duration <= 0.0 {
            return 0.0;
        }
        (self.remaining / duration).clamp(0.0, 1.0)
    }
}
