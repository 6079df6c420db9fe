#![forbid(unsafe_code)]

//! Visibility state machine for the bottom sheet.
//!
//! The controller owns the animated panel height and the animated pan
//! offset. It never touches input; callers tell it what to do and tick it.
//!
//! # State Machine
//!
//! ```text
//! Closed --set_visibility(true)-->  Open     (mounted, height -> height)
//! Open   --set_visibility(false)--> Open     (closing, height -> min)
//! closing --height run completes--> Closed   (unmounted, pan reset)
//! ```
//!
//! # Invariants
//!
//! 1. `state` becomes `Open` when the open run is issued and `Closed` only
//!    when a close run completes.
//! 2. A completed open leaves the height at exactly `height`; a completed
//!    close leaves it at exactly `min_closing_height`.
//! 3. Each completed close is reported once. Superseded runs never report.
//! 4. The pan is zero whenever the sheet is closed at rest.

use std::fmt;
use std::time::Duration;

use slideup_core::animation::{AnimatedValue, Easing, RunId, Spring};
use slideup_core::geometry::Offset;

use super::config::SheetConfig;

/// Logical visibility state.
///
/// Opening and closing are transient and are not states of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetState {
    #[default]
    Closed,
    Open,
}

/// What a [`VisibilityController::tick`] observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerTick {
    /// Height or pan moved.
    pub changed: bool,
    /// An open run finished this tick.
    pub opened: bool,
    /// A close run finished this tick; the close notification is due.
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    height: f64,
    min_closing_height: f64,
    duration: Duration,
    easing: Easing,
}

/// Drives mount state, panel height and pan offset.
pub struct VisibilityController {
    geometry: Geometry,
    state: SheetState,
    visible: bool,
    height: AnimatedValue,
    pan: AnimatedValue,
    open_run: Option<RunId>,
    close_run: Option<RunId>,
    snap_run: Option<RunId>,
    on_close: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for VisibilityController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityController")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("visible", &self.visible)
            .field("height", &self.height)
            .field("pan", &self.pan)
            .field("open_run", &self.open_run)
            .field("close_run", &self.close_run)
            .field("snap_run", &self.snap_run)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl VisibilityController {
    /// Create a closed, unmounted controller with zero height.
    #[must_use]
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            geometry: Geometry {
                height: config.height,
                min_closing_height: config.min_closing_height,
                duration: config.duration,
                easing: config.easing,
            },
            state: SheetState::Closed,
            visible: false,
            height: AnimatedValue::new(0.0),
            pan: AnimatedValue::new(0.0),
            open_run: None,
            close_run: None,
            snap_run: None,
            on_close: None,
        }
    }

    /// Register the close notification, replacing any previous one.
    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Logical state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Whether the overlay is mounted.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a close run is in flight.
    #[inline]
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.close_run.is_some()
    }

    /// Open and not on the way out.
    #[must_use]
    pub fn accepts_drag(&self) -> bool {
        self.state == SheetState::Open && !self.is_closing()
    }

    /// Current panel height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.value()
    }

    /// Current pan offset; `x` is always zero.
    #[inline]
    #[must_use]
    pub fn pan(&self) -> Offset {
        Offset::vertical(self.pan.value())
    }

    /// Whether any run is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.height.is_running() || self.pan.is_running()
    }

    /// Release distance beyond which a drag closes the sheet.
    #[inline]
    #[must_use]
    pub fn close_threshold(&self) -> f64 {
        self.geometry.height / 4.0
    }

    /// Mount and open, or start closing.
    ///
    /// Opening while mounted is a no-op, including during a close. Closing
    /// while unmounted is a no-op. Closing while already closing restarts
    /// the close run from the current height; the superseded run never
    /// reports, so the close notification still fires once.
    pub fn set_visibility(&mut self, visible: bool) {
        if visible {
            self.open();
        } else {
            self.close();
        }
    }

    fn open(&mut self) {
        if self.visible {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "sheet.input.ignored", reason = "open_while_visible");
            return;
        }
        self.visible = true;
        self.state = SheetState::Open;
        self.snap_run = None;
        self.pan.set_value(0.0);
        let run = self
            .height
            .run(self.geometry.height, self.geometry.duration, self.geometry.easing);
        self.open_run = Some(run);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "sheet.open",
            from = self.height.value(),
            to = self.geometry.height,
            run = run.get()
        );
    }

    fn close(&mut self) {
        if !self.visible {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "sheet.input.ignored", reason = "close_while_closed");
            return;
        }
        self.open_run = None;
        let run = self.height.run(
            self.geometry.min_closing_height,
            self.geometry.duration,
            self.geometry.easing,
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "sheet.close",
            from = self.height.value(),
            to = self.geometry.min_closing_height,
            run = run.get(),
            restarted = self.close_run.is_some()
        );
        self.close_run = Some(run);
    }

    /// Follow the finger: set the pan to `dy`, superseding any snap-back.
    pub fn set_pan(&mut self, dy: f64) {
        self.snap_run = None;
        self.pan.set_value(dy);
    }

    /// Spring the pan back to zero, leaving the sheet open.
    pub fn snap_back(&mut self) {
        let run = self.pan.spring(0.0, &Spring::default());
        self.snap_run = Some(run);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "sheet.drag.snap_back",
            from = self.pan.value(),
            run = run.get()
        );
    }

    /// Advance height and pan by `dt` and apply any completions.
    ///
    /// Does not fire the close notification; call
    /// [`notify_closed`](Self::notify_closed) once the result has been
    /// published.
    pub fn tick(&mut self, dt: Duration) -> ControllerTick {
        let before = (self.height.value(), self.pan.value());
        let mut outcome = ControllerTick::default();

        if let Some(done) = self.height.tick(dt) {
            if self.close_run == Some(done.run) {
                self.close_run = None;
                self.snap_run = None;
                self.visible = false;
                self.pan.set_value(0.0);
                self.state = SheetState::Closed;
                outcome.closed = true;
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "sheet.closed", height = done.value);
            } else if self.open_run == Some(done.run) {
                self.open_run = None;
                outcome.opened = true;
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "sheet.opened", height = done.value);
            }
        }

        if let Some(done) = self.pan.tick(dt)
            && self.snap_run == Some(done.run)
        {
            self.snap_run = None;
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "sheet.drag.settled", pan = done.value);
        }

        outcome.changed = before != (self.height.value(), self.pan.value())
            || outcome.opened
            || outcome.closed;
        outcome
    }

    /// Invoke the close notification, if one is registered.
    pub fn notify_closed(&mut self) {
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const MS_16: Duration = Duration::from_millis(16);

    fn controller() -> VisibilityController {
        VisibilityController::new(&SheetConfig::default())
    }

    /// Tick until idle, firing notifications like the sheet does.
    fn settle(ctl: &mut VisibilityController) -> usize {
        let mut closes = 0;
        for _ in 0..600 {
            let tick = ctl.tick(MS_16);
            if tick.closed {
                closes += 1;
                ctl.notify_closed();
            }
            if !ctl.is_animating() {
                break;
            }
        }
        closes
    }

    #[test]
    fn starts_closed_and_unmounted() {
        let ctl = controller();
        assert_eq!(ctl.state(), SheetState::Closed);
        assert!(!ctl.is_visible());
        assert_eq!(ctl.height(), 0.0);
        assert!(ctl.pan().is_zero());
    }

    #[test]
    fn open_flips_state_immediately() {
        let mut ctl = controller();
        ctl.set_visibility(true);
        assert_eq!(ctl.state(), SheetState::Open);
        assert!(ctl.is_visible());
        assert_eq!(ctl.height(), 0.0);
        settle(&mut ctl);
        assert_eq!(ctl.height(), 260.0);
    }

    #[test]
    fn open_reports_opened_once() {
        let mut ctl = controller();
        ctl.set_visibility(true);
        let opened = (0..100).filter(|_| ctl.tick(MS_16).opened).count();
        assert_eq!(opened, 1);
    }

    #[test]
    fn close_completes_at_min_and_resets() {
        let config = SheetConfig::new().height(300.0).min_closing_height(40.0);
        let mut ctl = VisibilityController::new(&config);
        ctl.set_visibility(true);
        settle(&mut ctl);
        ctl.set_pan(30.0);
        ctl.set_visibility(false);
        assert_eq!(ctl.state(), SheetState::Open);
        assert!(ctl.is_closing());
        assert_eq!(settle(&mut ctl), 1);
        assert_eq!(ctl.height(), 40.0);
        assert_eq!(ctl.state(), SheetState::Closed);
        assert!(!ctl.is_visible());
        assert!(ctl.pan().is_zero());
    }

    #[test]
    fn close_while_closed_is_noop() {
        let mut ctl = controller();
        ctl.set_visibility(false);
        assert!(!ctl.is_closing());
        assert_eq!(settle(&mut ctl), 0);
    }

    #[test]
    fn repeated_close_reports_once() {
        let mut ctl = controller();
        ctl.set_visibility(true);
        settle(&mut ctl);
        ctl.set_visibility(false);
        ctl.tick(MS_16);
        ctl.set_visibility(false);
        ctl.tick(MS_16);
        ctl.set_visibility(false);
        assert_eq!(settle(&mut ctl), 1);
    }

    #[test]
    fn open_while_visible_is_noop() {
        let mut ctl = controller();
        ctl.set_visibility(true);
        ctl.tick(MS_16);
        let height = ctl.height();
        ctl.set_visibility(true);
        assert_eq!(ctl.height(), height);
        assert_eq!(ctl.state(), SheetState::Open);
    }

    #[test]
    fn close_during_open_supersedes() {
        let mut ctl = controller();
        ctl.set_visibility(true);
        for _ in 0..5 {
            ctl.tick(MS_16);
        }
        ctl.set_visibility(false);
        let mut opened = false;
        let mut closes = 0;
        for _ in 0..100 {
            let tick = ctl.tick(MS_16);
            opened |= tick.opened;
            closes += usize::from(tick.closed);
        }
        assert!(!opened);
        assert_eq!(closes, 1);
        assert_eq!(ctl.height(), 0.0);
    }

    #[test]
    fn snap_back_settles_at_zero_without_closing() {
        let mut ctl = controller();
        ctl.set_visibility(true);
        settle(&mut ctl);
        ctl.set_pan(50.0);
        ctl.snap_back();
        assert_eq!(settle(&mut ctl), 0);
        assert_eq!(ctl.pan(), Offset::ZERO);
        assert_eq!(ctl.state(), SheetState::Open);
    }

    #[test]
    fn notify_closed_invokes_callback() {
        let count = Rc::new(Cell::new(0));
        let mut ctl = controller();
        let seen = Rc::clone(&count);
        ctl.set_on_close(move || seen.set(seen.get() + 1));
        ctl.set_visibility(true);
        settle(&mut ctl);
        ctl.set_visibility(false);
        settle(&mut ctl);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn close_threshold_is_quarter_height() {
        assert_eq!(controller().close_threshold(), 65.0);
        let flat = VisibilityController::new(&SheetConfig::new().height(0.0));
        assert_eq!(flat.close_threshold(), 0.0);
    }

    #[test]
    fn accepts_drag_only_when_open_and_not_closing() {
        let mut ctl = controller();
        assert!(!ctl.accepts_drag());
        ctl.set_visibility(true);
        assert!(ctl.accepts_drag());
        ctl.set_visibility(false);
        assert!(!ctl.accepts_drag());
    }
}
