#![forbid(unsafe_code)]

//! Drag recognition: transforms raw pointer events into vertical drag samples.
//!
//! [`DragRecognizer`] is a stateful processor that follows one pointer from
//! down to up and reports its cumulative vertical travel since the gesture
//! started. Horizontal travel is tracked for nothing and reported nowhere.
//!
//! # State Machine
//!
//! ```text
//! Idle --Down--> Pressed --Move--> Pressed   (emits Move)
//! Pressed --Up--> Idle                       (emits End)
//! Pressed --Cancel--> Idle                   (emits Cancel)
//! ```
//!
//! # Invariants
//!
//! 1. Every `Start` is followed by exactly one `End` or `Cancel`, unless
//!    `reset()` is called in between.
//! 2. `dy` is always measured from the position of the `Down` that started
//!    the gesture, never from the previous sample.
//! 3. A second `Down` while a gesture is active is ignored; only the first
//!    pointer is followed.
//! 4. After `reset()`, the recognizer is idle.
//!
//! # Failure Modes
//!
//! - Moves or ups without a prior down are dropped silently.
//! - If focus is lost mid-gesture the caller should call `cancel()`, which
//!   emits `Cancel` for an active gesture.

use crate::event::{HitRegion, PointerEvent, PointerEventKind};

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A recognized drag sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// A pointer went down; the gesture may be claimed.
    Start {
        /// Region the gesture began on.
        region: HitRegion,
    },
    /// The pointer moved. `dy` is cumulative, positive = downward.
    Move { dy: f64 },
    /// The pointer was released after travelling `dy`.
    End { dy: f64 },
    /// The gesture was taken away after travelling `dy`.
    Cancel { dy: f64 },
}

// ---------------------------------------------------------------------------
// DragRecognizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Press {
    start_y: f64,
    last_dy: f64,
}

/// Stateful single-pointer vertical drag recognizer.
#[derive(Debug, Clone, Default)]
pub struct DragRecognizer {
    press: Option<Press>,
}

impl DragRecognizer {
    /// Create an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event, returning the drag sample it produces.
    pub fn process(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match event.kind {
            PointerEventKind::Down => {
                if self.press.is_some() {
                    return None;
                }
                self.press = Some(Press {
                    start_y: event.y,
                    last_dy: 0.0,
                });
                Some(DragEvent::Start {
                    region: event.region,
                })
            }
            PointerEventKind::Move => {
                let press = self.press.as_mut()?;
                let dy = event.y - press.start_y;
                press.last_dy = dy;
                Some(DragEvent::Move { dy })
            }
            PointerEventKind::Up => {
                let press = self.press.take()?;
                Some(DragEvent::End {
                    dy: event.y - press.start_y,
                })
            }
            PointerEventKind::Cancel => {
                let press = self.press.take()?;
                Some(DragEvent::Cancel {
                    dy: event.y - press.start_y,
                })
            }
        }
    }

    /// Abort the active gesture at its last known travel.
    pub fn cancel(&mut self) -> Option<DragEvent> {
        let press = self.press.take()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "gesture.cancel", dy = press.last_dy);
        Some(DragEvent::Cancel { dy: press.last_dy })
    }

    /// Whether a pointer is currently down.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.press.is_some()
    }

    /// Drop any active gesture without emitting an event.
    pub fn reset(&mut self) {
        self.press = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
