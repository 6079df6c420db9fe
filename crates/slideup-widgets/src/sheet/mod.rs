#![forbid(unsafe_code)]

//! Bottom sheet: configuration, state machine, drag-to-dismiss and the
//! published presentation frame.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use slideup_core::event::{Event, PointerEvent};
//! use slideup_widgets::{BottomSheet, SheetConfig, SheetHandle, SheetState};
//!
//! let config = SheetConfig::new().height(260.0).close_on_drag_down(true);
//! let mut sheet = BottomSheet::new(config).unwrap();
//! sheet.open();
//! sheet.tick(Duration::from_millis(400));
//!
//! sheet.handle_event(&Event::Pointer(PointerEvent::down(0.0, 500.0)));
//! sheet.handle_event(&Event::Pointer(PointerEvent::moved(0.0, 600.0)));
//! sheet.handle_event(&Event::Pointer(PointerEvent::up(0.0, 600.0)));
//! sheet.tick(Duration::from_millis(400));
//! assert_eq!(sheet.state(), SheetState::Closed);
//! ```
//!
//! # Ordering
//!
//! When a close run finishes inside [`BottomSheet::tick`], the frame with
//! the final height, a zero pan and `visible == false` is published before
//! the close callback runs.

pub mod config;
pub mod controller;
pub mod frame;
pub mod gesture;
pub mod handle;

use std::sync::Arc;
use std::time::Duration;

use slideup_core::event::{Event, PointerEvent};
use slideup_core::gesture::DragRecognizer;

pub use config::{AnimationType, Orientation, SheetConfig, SheetConfigError};
pub use controller::{ControllerTick, SheetState, VisibilityController};
pub use frame::{SheetFrame, SheetFrameStore};
pub use gesture::{DragOutcome, DragPolicy, GestureTracker};
pub use handle::SheetHandle;

/// Result of routing an input event through the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetAction {
    /// A drag moved the panel.
    Dragging { pan: f64 },
    /// A drag was released past the threshold; the sheet is closing.
    DragCommitted,
    /// A drag was released short of the threshold or cancelled.
    DragSnappedBack,
    /// The mask was pressed; the sheet is closing.
    MaskPressed,
    /// A back request was honoured; the sheet is closing.
    BackRequested,
}

impl From<DragOutcome> for SheetAction {
    fn from(outcome: DragOutcome) -> Self {
        match outcome {
            DragOutcome::Tracking { pan } => Self::Dragging { pan },
            DragOutcome::CommitClose { .. } => Self::DragCommitted,
            DragOutcome::SnapBack { .. } => Self::DragSnappedBack,
        }
    }
}

/// An animated bottom sheet.
///
/// Invariants:
/// - The published frame always reflects the latest `handle_event`, `open`,
///   `close` or `tick`.
/// - The close callback fires once per completed close, never on snap-back
///   and never while closed at rest.
///
/// Failure modes:
/// - Construction fails on an invalid [`SheetConfig`]; nothing fails after.
#[derive(Debug)]
pub struct BottomSheet {
    config: SheetConfig,
    orientations: Arc<[Orientation]>,
    controller: VisibilityController,
    recognizer: DragRecognizer,
    tracker: GestureTracker,
    frames: SheetFrameStore,
}

impl BottomSheet {
    /// Validate `config` and create a closed sheet.
    pub fn new(config: SheetConfig) -> Result<Self, SheetConfigError> {
        config.validate()?;
        let orientations: Arc<[Orientation]> = config.supported_orientations.as_slice().into();
        let frames = SheetFrameStore::new(SheetFrame::hidden(
            config.animation_type,
            Arc::clone(&orientations),
        ));
        let controller = VisibilityController::new(&config);
        let sheet = Self {
            config,
            orientations,
            controller,
            recognizer: DragRecognizer::new(),
            tracker: GestureTracker::new(),
            frames,
        };
        sheet.publish();
        Ok(sheet)
    }

    /// Register the owner's close notification, replacing any previous one.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.controller.set_on_close(callback);
        self
    }

    /// Register the owner's close notification on an existing sheet.
    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.controller.set_on_close(callback);
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> SheetState {
        self.controller.state()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// Whether a height or pan run is in flight.
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Enable or disable drag-to-dismiss, effective from the next event.
    pub fn set_close_on_drag_down(&mut self, enabled: bool) {
        self.config.close_on_drag_down = enabled;
        self.publish();
    }

    /// Enable or disable close on mask press, effective from the next event.
    pub fn set_close_on_press_mask(&mut self, enabled: bool) {
        self.config.close_on_press_mask = enabled;
    }

    /// Enable or disable close on back request, effective from the next event.
    pub fn set_close_on_press_back(&mut self, enabled: bool) {
        self.config.close_on_press_back = enabled;
    }

    /// Route one input event.
    pub fn handle_event(&mut self, event: &Event) -> Option<SheetAction> {
        let action = match event {
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::MaskPress if self.config.close_on_press_mask && self.is_visible() => {
                self.dismiss();
                Some(SheetAction::MaskPressed)
            }
            Event::BackRequest if self.config.close_on_press_back && self.is_visible() => {
                self.dismiss();
                Some(SheetAction::BackRequested)
            }
            Event::Focus(false) => {
                let policy = self.drag_policy();
                self.recognizer
                    .cancel()
                    .and_then(|drag| self.tracker.handle(drag, policy, &mut self.controller))
                    .map(SheetAction::from)
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(message = "sheet.input.ignored", event = ?event);
                None
            }
        };
        if action.is_some() {
            self.publish();
        }
        action
    }

    fn handle_pointer(&mut self, pointer: &PointerEvent) -> Option<SheetAction> {
        let drag = self.recognizer.process(pointer)?;
        let policy = self.drag_policy();
        self.tracker
            .handle(drag, policy, &mut self.controller)
            .map(SheetAction::from)
    }

    fn drag_policy(&self) -> DragPolicy {
        DragPolicy {
            enabled: self.config.close_on_drag_down,
            from_top_only: self.config.drag_from_top_only,
        }
    }

    /// Close, abandoning any drag in progress. Its release is ignored.
    fn dismiss(&mut self) {
        self.recognizer.reset();
        self.tracker.reset();
        self.controller.set_visibility(false);
    }

    /// Advance all animations by `dt`.
    ///
    /// Returns `true` when the frame changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let tick = self.controller.tick(dt);
        if tick.changed {
            self.publish();
        }
        if tick.closed {
            self.controller.notify_closed();
        }
        tick.changed
    }

    /// Snapshot of what should be drawn now.
    #[must_use]
    pub fn frame(&self) -> SheetFrame {
        SheetFrame {
            visible: self.controller.is_visible(),
            state: self.controller.state(),
            height: self.controller.height(),
            pan: self.controller.pan(),
            animation_type: self.config.animation_type,
            drag_handle_visible: self.config.close_on_drag_down,
            supported_orientations: Arc::clone(&self.orientations),
        }
    }

    /// Shared store that always holds the latest frame.
    #[must_use]
    pub fn frame_store(&self) -> SheetFrameStore {
        self.frames.clone()
    }

    fn publish(&self) {
        self.frames.publish(self.frame());
    }
}

impl SheetHandle for BottomSheet {
    fn open(&mut self) {
        self.controller.set_visibility(true);
        self.publish();
    }

    fn close(&mut self) {
        self.dismiss();
        self.publish();
    }
}
