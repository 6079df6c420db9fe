#![forbid(unsafe_code)]

//! Timed interpolation between two values.
//!
//! # Invariants
//!
//! 1. `value()` always lies in the closed interval between `from` and `to`.
//! 2. Once complete, `value()` is exactly `to` (no floating-point residue).
//! 3. Progress is monotone: successive ticks never move the value back
//!    toward `from`.
//!
//! # Failure Modes
//!
//! - Zero duration: completes on the first tick, whatever its `dt`.

use std::time::Duration;

use super::{Animation, Easing};

/// A run from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    complete: bool,
}

impl Tween {
    /// Create a tween with the default easing curve.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
            complete: false,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Target value.
    #[inline]
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Linear time progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.complete {
            return 1.0;
        }
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        if self.complete {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.complete = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn value(&self) -> f64 {
        if self.complete {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }
}
