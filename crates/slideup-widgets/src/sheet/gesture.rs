#![forbid(unsafe_code)]

//! Drag-to-dismiss tracking.
//!
//! [`GestureTracker`] consumes recognized [`DragEvent`]s and decides, on
//! release, whether the sheet closes or the panel springs back.
//!
//! A gesture is only considered while drag-to-dismiss is enabled and the
//! sheet is open, and only when it starts on the panel. Gestures starting on
//! the mask never move the panel. Once eligible a gesture is claimed by the
//! first downward sample; upward samples before that never claim.

use slideup_core::event::HitRegion;
use slideup_core::gesture::DragEvent;

use super::controller::VisibilityController;

/// Per-event inputs read live from the sheet configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPolicy {
    /// Drag-to-dismiss is enabled.
    pub enabled: bool,
    /// Only gestures starting on the handle are eligible.
    pub from_top_only: bool,
}

/// What the tracker did with a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The panel follows the finger at `pan`.
    Tracking { pan: f64 },
    /// Released past the threshold; the sheet is closing.
    CommitClose { dy: f64 },
    /// Released short of the threshold, or cancelled; the panel springs back.
    SnapBack { dy: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Eligible,
    Claimed,
}

/// Drag-to-dismiss state for one sheet.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    phase: Phase,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current gesture moves the panel.
    #[inline]
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.phase == Phase::Claimed
    }

    /// Forget the current gesture without touching the pan.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Apply one drag sample.
    pub fn handle(
        &mut self,
        event: DragEvent,
        policy: DragPolicy,
        controller: &mut VisibilityController,
    ) -> Option<DragOutcome> {
        if !policy.enabled || !controller.accepts_drag() {
            return self.handle_inactive(event, controller);
        }

        match event {
            DragEvent::Start { region } => {
                let eligible = match region {
                    HitRegion::Mask => false,
                    HitRegion::Content => !policy.from_top_only,
                    HitRegion::Handle => true,
                };
                self.phase = if eligible { Phase::Eligible } else { Phase::Idle };
                if !eligible {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(message = "sheet.input.ignored", reason = "outside_panel", region = ?region);
                }
                None
            }
            DragEvent::Move { dy } => {
                if self.phase == Phase::Idle || dy <= 0.0 {
                    return None;
                }
                self.phase = Phase::Claimed;
                controller.set_pan(dy);
                Some(DragOutcome::Tracking { pan: dy })
            }
            DragEvent::End { dy } => {
                // A release without an intervening move still counts when
                // it travelled downward.
                let claimed = match self.phase {
                    Phase::Claimed => true,
                    Phase::Eligible => dy > 0.0,
                    Phase::Idle => false,
                };
                self.phase = Phase::Idle;
                if !claimed {
                    return None;
                }
                if controller.close_threshold() - dy < 0.0 {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        message = "sheet.drag.commit",
                        dy,
                        threshold = controller.close_threshold()
                    );
                    controller.set_visibility(false);
                    Some(DragOutcome::CommitClose { dy })
                } else {
                    controller.snap_back();
                    Some(DragOutcome::SnapBack { dy })
                }
            }
            DragEvent::Cancel { dy } => {
                let claimed = self.phase == Phase::Claimed;
                self.phase = Phase::Idle;
                if !claimed {
                    return None;
                }
                controller.snap_back();
                Some(DragOutcome::SnapBack { dy })
            }
        }
    }

    /// Drag-to-dismiss is off or the sheet is not open.
    ///
    /// A claimed gesture is let go with a snap-back so the panel never stays
    /// displaced; anything else is dropped.
    fn handle_inactive(
        &mut self,
        event: DragEvent,
        controller: &mut VisibilityController,
    ) -> Option<DragOutcome> {
        let claimed = self.phase == Phase::Claimed;
        self.phase = Phase::Idle;
        match event {
            DragEvent::Move { dy } | DragEvent::End { dy } | DragEvent::Cancel { dy }
                if claimed && controller.is_visible() =>
            {
                controller.snap_back();
                Some(DragOutcome::SnapBack { dy })
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(message = "sheet.input.ignored", reason = "drag_inactive");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::config::SheetConfig;
    use crate::sheet::controller::SheetState;
    use std::time::Duration;

    const ENABLED: DragPolicy = DragPolicy {
        enabled: true,
        from_top_only: false,
    };

    fn open_controller(height: f64) -> VisibilityController {
        let mut ctl = VisibilityController::new(&SheetConfig::new().height(height));
        ctl.set_visibility(true);
        for _ in 0..100 {
            ctl.tick(Duration::from_millis(16));
        }
        ctl
    }

    fn drag(
        tracker: &mut GestureTracker,
        ctl: &mut VisibilityController,
        policy: DragPolicy,
        region: HitRegion,
        dy: f64,
    ) -> Option<DragOutcome> {
        tracker.handle(DragEvent::Start { region }, policy, ctl);
        tracker.handle(DragEvent::Move { dy }, policy, ctl);
        tracker.handle(DragEvent::End { dy }, policy, ctl)
    }

    #[test]
    fn downward_move_claims_and_pans() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        tracker.handle(DragEvent::Start { region: HitRegion::Content }, ENABLED, &mut ctl);
        assert!(!tracker.is_claimed());
        let out = tracker.handle(DragEvent::Move { dy: 42.0 }, ENABLED, &mut ctl);
        assert_eq!(out, Some(DragOutcome::Tracking { pan: 42.0 }));
        assert!(tracker.is_claimed());
        assert_eq!(ctl.pan().y, 42.0);
    }

    #[test]
    fn upward_move_leaves_pan_untouched() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        tracker.handle(DragEvent::Start { region: HitRegion::Content }, ENABLED, &mut ctl);
        tracker.handle(DragEvent::Move { dy: 30.0 }, ENABLED, &mut ctl);
        assert_eq!(tracker.handle(DragEvent::Move { dy: -5.0 }, ENABLED, &mut ctl), None);
        assert_eq!(ctl.pan().y, 30.0);
    }

    #[test]
    fn release_past_threshold_commits() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        let out = drag(&mut tracker, &mut ctl, ENABLED, HitRegion::Content, 100.0);
        assert_eq!(out, Some(DragOutcome::CommitClose { dy: 100.0 }));
        assert!(ctl.is_closing());
    }

    #[test]
    fn release_at_threshold_snaps_back() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        let out = drag(&mut tracker, &mut ctl, ENABLED, HitRegion::Content, 65.0);
        assert_eq!(out, Some(DragOutcome::SnapBack { dy: 65.0 }));
        assert!(!ctl.is_closing());
        assert_eq!(ctl.state(), SheetState::Open);
    }

    #[test]
    fn zero_height_commits_on_any_downward_drag() {
        let mut ctl = open_controller(0.0);
        let mut tracker = GestureTracker::new();
        let out = drag(&mut tracker, &mut ctl, ENABLED, HitRegion::Content, 1.0);
        assert_eq!(out, Some(DragOutcome::CommitClose { dy: 1.0 }));
    }

    #[test]
    fn release_without_move_uses_release_travel() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        tracker.handle(DragEvent::Start { region: HitRegion::Content }, ENABLED, &mut ctl);
        let out = tracker.handle(DragEvent::End { dy: 80.0 }, ENABLED, &mut ctl);
        assert_eq!(out, Some(DragOutcome::CommitClose { dy: 80.0 }));
    }

    #[test]
    fn tap_is_ignored() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        tracker.handle(DragEvent::Start { region: HitRegion::Content }, ENABLED, &mut ctl);
        assert_eq!(tracker.handle(DragEvent::End { dy: 0.0 }, ENABLED, &mut ctl), None);
        assert!(!ctl.is_animating());
    }

    #[test]
    fn disabled_policy_ignores_drags() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        let policy = DragPolicy {
            enabled: false,
            ..ENABLED
        };
        assert_eq!(drag(&mut tracker, &mut ctl, policy, HitRegion::Content, 200.0), None);
        assert!(ctl.pan().is_zero());
        assert!(!ctl.is_closing());
    }

    #[test]
    fn closed_sheet_ignores_drags() {
        let mut ctl = VisibilityController::new(&SheetConfig::default());
        let mut tracker = GestureTracker::new();
        assert_eq!(drag(&mut tracker, &mut ctl, ENABLED, HitRegion::Content, 200.0), None);
        assert_eq!(ctl.state(), SheetState::Closed);
        assert!(ctl.pan().is_zero());
    }

    #[test]
    fn top_only_requires_handle() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        let policy = DragPolicy {
            enabled: true,
            from_top_only: true,
        };
        assert_eq!(drag(&mut tracker, &mut ctl, policy, HitRegion::Content, 200.0), None);
        assert!(!ctl.is_closing());
        let out = drag(&mut tracker, &mut ctl, policy, HitRegion::Handle, 200.0);
        assert_eq!(out, Some(DragOutcome::CommitClose { dy: 200.0 }));
    }

    #[test]
    fn mask_drag_never_claims() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        tracker.handle(DragEvent::Start { region: HitRegion::Mask }, ENABLED, &mut ctl);
        assert_eq!(tracker.handle(DragEvent::Move { dy: 100.0 }, ENABLED, &mut ctl), None);
        assert!(!tracker.is_claimed());
        assert_eq!(tracker.handle(DragEvent::End { dy: 100.0 }, ENABLED, &mut ctl), None);
        assert!(ctl.pan().is_zero());
        assert!(!ctl.is_closing());
    }

    #[test]
    fn cancel_snaps_back() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        tracker.handle(DragEvent::Start { region: HitRegion::Content }, ENABLED, &mut ctl);
        tracker.handle(DragEvent::Move { dy: 150.0 }, ENABLED, &mut ctl);
        let out = tracker.handle(DragEvent::Cancel { dy: 150.0 }, ENABLED, &mut ctl);
        assert_eq!(out, Some(DragOutcome::SnapBack { dy: 150.0 }));
        assert!(!ctl.is_closing());
    }

    #[test]
    fn disabling_mid_drag_lets_go() {
        let mut ctl = open_controller(260.0);
        let mut tracker = GestureTracker::new();
        tracker.handle(DragEvent::Start { region: HitRegion::Content }, ENABLED, &mut ctl);
        tracker.handle(DragEvent::Move { dy: 150.0 }, ENABLED, &mut ctl);
        let off = DragPolicy {
            enabled: false,
            ..ENABLED
        };
        let out = tracker.handle(DragEvent::End { dy: 150.0 }, off, &mut ctl);
        assert_eq!(out, Some(DragOutcome::SnapBack { dy: 150.0 }));
        assert!(!ctl.is_closing());
    }
}
