#![forbid(unsafe_code)]

//! A scalar value driven by at most one animation run at a time.
//!
//! [`AnimatedValue`] is the animator contract the widget layer relies on:
//!
//! - `run(to, duration, easing)` starts a timed run from the current value.
//! - `spring(to, spring)` starts a spring run from the current value.
//! - `tick(dt)` advances the active run and returns a [`Completion`] on the
//!   tick where it reaches its target.
//!
//! # Invariants
//!
//! 1. Each run completes at most once.
//! 2. Only the most recently started run can complete. Starting a run or
//!    calling `set_value` supersedes the active run, and a superseded run
//!    never reports completion.
//! 3. On completion the value equals the run target exactly.
//! 4. Run ids are unique per value and strictly increasing.

use std::time::Duration;

use super::{Animation, Easing, Spring, Tween};

/// Identifies one run started on an [`AnimatedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

impl RunId {
    /// Raw sequence number.
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Completion notification for a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    /// Run that finished.
    pub run: RunId,
    /// Final value (equal to the run's target).
    pub value: f64,
}

#[derive(Debug, Clone)]
enum Motion {
    Tween(Tween),
    Spring(Spring),
}

impl Motion {
    fn target(&self) -> f64 {
        match self {
            Self::Tween(tween) => tween.to(),
            Self::Spring(spring) => spring.target(),
        }
    }

    fn as_animation(&mut self) -> &mut dyn Animation {
        match self {
            Self::Tween(tween) => tween,
            Self::Spring(spring) => spring,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveRun {
    id: RunId,
    motion: Motion,
}

/// An animatable scalar owned by a single component.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f64,
    active: Option<ActiveRun>,
    next_run: u64,
}

impl AnimatedValue {
    /// Create a value at rest.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            active: None,
            next_run: 1,
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether a run is in flight.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the run in flight, if any.
    #[must_use]
    pub fn active_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|run| run.id)
    }

    /// Target of the run in flight, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(|run| run.motion.target())
    }

    /// Jump to `value`, superseding any run in flight.
    pub fn set_value(&mut self, value: f64) {
        self.active = None;
        self.value = value;
    }

    /// Start a timed run from the current value to `to`.
    pub fn run(&mut self, to: f64, duration: Duration, easing: Easing) -> RunId {
        let tween = Tween::new(self.value, to, duration).with_easing(easing);
        self.start(Motion::Tween(tween))
    }

    /// Start a spring run from the current value to `to`.
    ///
    /// `spring` supplies stiffness, damping and thresholds; its own
    /// position and target are replaced.
    pub fn spring(&mut self, to: f64, spring: &Spring) -> RunId {
        let spring = spring.retarget_from(self.value, to);
        self.start(Motion::Spring(spring))
    }

    fn start(&mut self, motion: Motion) -> RunId {
        let id = RunId(self.next_run);
        self.next_run += 1;
        self.active = Some(ActiveRun { id, motion });
        id
    }

    /// Advance the active run by `dt`.
    ///
    /// Returns the completion of the active run on the tick where it
    /// reaches its target, and `None` otherwise.
    pub fn tick(&mut self, dt: Duration) -> Option<Completion> {
        let active = self.active.as_mut()?;
        let animation = active.motion.as_animation();
        animation.tick(dt);
        self.value = animation.value();
        if !animation.is_complete() {
            return None;
        }

        let target = active.motion.target();
        let run = active.id;
        self.active = None;
        self.value = target;
        Some(Completion { run, value: target })
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
