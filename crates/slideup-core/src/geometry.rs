#![forbid(unsafe_code)]

//! Geometric primitives.

/// A 2D translation in logical pixels.
///
/// Positive `y` points down the screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// The zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new offset.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A purely vertical offset.
    #[inline]
    #[must_use]
    pub const fn vertical(y: f64) -> Self {
        Self { x: 0.0, y }
    }

    /// Whether both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}
