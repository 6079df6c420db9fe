#![forbid(unsafe_code)]

//! Spring motion used for the pan snap-back.
//!
//! The spring pulls its position toward a target with force
//! `-stiffness * (position - target) - damping * velocity`, integrated with
//! semi-implicit Euler in steps of at most 4ms. With the defaults
//! (170 / 26) it sits just under critical damping, so a snap-back may
//! overshoot its target by a fraction of a pixel.
//!
//! # Invariants
//!
//! 1. Once complete, the position equals the target and velocity is zero.
//! 2. A complete spring no longer moves.
//! 3. Stiffness is at least [`MIN_STIFFNESS`]; damping is at least 0.
//!
//! # Failure Modes
//!
//! - Zero damping never settles, so the run never completes.

use std::time::Duration;

use super::Animation;

/// Default stiffness.
pub const DEFAULT_STIFFNESS: f64 = 170.0;

/// Default damping.
pub const DEFAULT_DAMPING: f64 = 26.0;

/// Lower bound applied to stiffness.
pub const MIN_STIFFNESS: f64 = 0.1;

const STEP_SECS: f64 = 0.004;
const SETTLE_DISTANCE: f64 = 0.001;
const SETTLE_SPEED: f64 = 0.01;

/// A damped spring between a position and a target.
///
/// ```
/// use std::time::Duration;
/// use slideup_core::animation::{Animation, Spring};
///
/// let mut spring = Spring::new(80.0, 0.0);
/// for _ in 0..300 {
///     spring.tick(Duration::from_millis(16));
/// }
/// assert!(spring.is_complete());
/// assert_eq!(spring.position(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    settled: bool,
}

impl Spring {
    /// A spring at `position`, at rest velocity, pulling toward `target`.
    #[must_use]
    pub fn new(position: f64, target: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            settled: false,
        }
    }

    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness.max(MIN_STIFFNESS);
        self
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping.max(0.0);
        self
    }

    /// Same stiffness and damping, restarted at `position` toward `target`.
    #[must_use]
    pub fn retarget_from(&self, position: f64, target: f64) -> Self {
        Self {
            stiffness: self.stiffness,
            damping: self.damping,
            ..Self::new(position, target)
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    fn integrate(&mut self, secs: f64) {
        let pull = -self.stiffness * (self.position - self.target);
        let drag = -self.damping * self.velocity;
        self.velocity += (pull + drag) * secs;
        self.position += self.velocity * secs;
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        if self.settled {
            return;
        }
        let mut left = dt.as_secs_f64();
        while left > 0.0 {
            let secs = left.min(STEP_SECS);
            self.integrate(secs);
            left -= secs;
        }
        let near = (self.position - self.target).abs() < SETTLE_DISTANCE;
        if near && self.velocity.abs() < SETTLE_SPEED {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.settled
    }

    fn value(&self) -> f64 {
        self.position
    }
}
