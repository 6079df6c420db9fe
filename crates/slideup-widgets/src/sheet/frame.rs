#![forbid(unsafe_code)]

//! Published presentation snapshot.
//!
//! The sheet writes a [`SheetFrame`] after every state change; the
//! presentation layer reads it through a cloned [`SheetFrameStore`] without
//! borrowing the sheet. Reads are wait-free and never observe a partially
//! written frame.

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};
use slideup_core::geometry::Offset;

use super::config::{AnimationType, Orientation};
use super::controller::SheetState;

/// Everything the presentation layer needs to draw the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetFrame {
    /// Whether the overlay is mounted.
    pub visible: bool,
    /// Logical visibility state.
    pub state: SheetState,
    /// Current panel height.
    pub height: f64,
    /// Current drag translation of the panel.
    pub pan: Offset,
    /// Forwarded transition style.
    pub animation_type: AnimationType,
    /// Whether to draw the drag handle.
    pub drag_handle_visible: bool,
    /// Forwarded orientation list.
    pub supported_orientations: Arc<[Orientation]>,
}

impl SheetFrame {
    /// Frame of an unmounted sheet.
    #[must_use]
    pub fn hidden(animation_type: AnimationType, orientations: Arc<[Orientation]>) -> Self {
        Self {
            visible: false,
            state: SheetState::Closed,
            height: 0.0,
            pan: Offset::ZERO,
            animation_type,
            drag_handle_visible: false,
            supported_orientations: orientations,
        }
    }
}

/// Shared, read-optimized handle to the latest [`SheetFrame`].
///
/// Clones share the same slot. Only the owning sheet publishes.
#[derive(Debug, Clone)]
pub struct SheetFrameStore {
    inner: Arc<ArcSwap<SheetFrame>>,
}

impl SheetFrameStore {
    pub(crate) fn new(frame: SheetFrame) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(frame)),
        }
    }

    /// Clone out the latest frame.
    #[must_use]
    pub fn load(&self) -> SheetFrame {
        SheetFrame::clone(&self.inner.load())
    }

    /// Borrow the latest frame without cloning it.
    pub fn load_ref(&self) -> Guard<Arc<SheetFrame>> {
        self.inner.load()
    }

    pub(crate) fn publish(&self, frame: SheetFrame) {
        self.inner.store(Arc::new(frame));
    }
}
