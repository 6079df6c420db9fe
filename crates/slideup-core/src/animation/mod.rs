#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! Every animation in this module is advanced explicitly with
//! [`Animation::tick`]; nothing reads a wall clock. Hosts call `tick` once
//! per frame with the elapsed frame time, which keeps behavior
//! deterministic under test.
//!
//! - [`Tween`]: timed run between two values with an [`Easing`] curve.
//! - [`Spring`]: damped harmonic oscillator that may overshoot.
//! - [`AnimatedValue`]: a scalar that owns at most one in-flight run and
//!   reports its completion exactly once.

pub mod animated;
pub mod spring;
pub mod tween;

use std::time::Duration;

pub use animated::{AnimatedValue, Completion, RunId};
pub use spring::Spring;
pub use tween::Tween;

/// A time-driven animation.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its target and stopped.
    fn is_complete(&self) -> bool;

    /// Current absolute value.
    fn value(&self) -> f64;
}

/// Easing curve applied to tween progress.
///
/// All curves map `[0, 1]` onto `[0, 1]` monotonically, so a tween never
/// leaves the closed interval between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in (accelerating).
    EaseIn,
    /// Cubic ease-out (decelerating).
    EaseOut,
    /// Cubic S-curve.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value.
    ///
    /// Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}
