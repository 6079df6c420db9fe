#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host presentation layer translates its platform input into these
//! events and feeds them to a sheet.
//!
//! # Design Notes
//!
//! - Pointer coordinates are logical pixels in screen space, `y` growing
//!   downward.
//! - Every pointer event carries the [`HitRegion`] it landed on, as
//!   resolved by the host from the last rendered frame.
//! - Mask presses and back requests arrive as single, already-recognized
//!   events; the host decides what counts as a press.

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A touch or mouse pointer event.
    Pointer(PointerEvent),

    /// The background mask outside the content container was pressed.
    MaskPress,

    /// The platform requested dismissal (hardware back, Escape).
    BackRequest,

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// Region of the overlay a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// The drag handle strip at the top of the panel.
    Handle,
    /// The panel content below the handle.
    #[default]
    Content,
    /// The mask outside the panel.
    Mask,
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Finger or button went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Finger or button was released.
    Up,
    /// The platform took the pointer away (e.g. a system gesture).
    Cancel,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The phase of the interaction.
    pub kind: PointerEventKind,

    /// Horizontal position.
    pub x: f64,

    /// Vertical position.
    pub y: f64,

    /// Region under the pointer.
    pub region: HitRegion,
}

impl PointerEvent {
    /// Create a pointer event over the panel content.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            region: HitRegion::Content,
        }
    }

    /// Set the hit region (builder pattern).
    #[must_use]
    pub const fn with_region(mut self, region: HitRegion) -> Self {
        self.region = region;
        self
    }

    /// Pointer down at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// Pointer move to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Pointer up at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// Pointer cancelled at `(x, y)`.
    #[must_use]
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Cancel, x, y)
    }
}

impl From<PointerEvent> for Event {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}
