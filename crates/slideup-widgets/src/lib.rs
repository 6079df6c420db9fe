#![forbid(unsafe_code)]

//! Bottom sheet widget for slideup.
//!
//! A [`BottomSheet`] slides a panel up from the bottom edge, animates its
//! height between zero and a configured height, and optionally closes when
//! the panel is dragged down far enough. It is tick-driven: the host feeds
//! [`Event`]s and elapsed time, then draws the published [`SheetFrame`].
//!
//! ```
//! use std::time::Duration;
//! use slideup_widgets::{BottomSheet, SheetConfig, SheetHandle, SheetState};
//!
//! let mut sheet = BottomSheet::new(SheetConfig::new().height(320.0)).unwrap();
//! sheet.open();
//! for _ in 0..30 {
//!     sheet.tick(Duration::from_millis(16));
//! }
//! assert_eq!(sheet.frame().height, 320.0);
//! assert_eq!(sheet.state(), SheetState::Open);
//! ```
//!
//! [`Event`]: slideup_core::event::Event

pub mod sheet;

pub use sheet::{
    AnimationType, BottomSheet, DragOutcome, Orientation, SheetAction, SheetConfig,
    SheetConfigError, SheetFrame, SheetFrameStore, SheetHandle, SheetState,
};
