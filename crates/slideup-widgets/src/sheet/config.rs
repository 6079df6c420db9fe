#![forbid(unsafe_code)]

//! Bottom sheet configuration and validation.
//!
//! A [`SheetConfig`] is built with chained setters and validated once, when
//! the sheet is constructed. With the `config-file` feature it can also be
//! loaded from TOML or JSON:
//!
//! ```toml
//! height = 320.0
//! min_closing_height = 0.0
//! duration_ms = 250
//! close_on_drag_down = true
//! animation_type = "slide"
//! ```
//!
//! # Invariants
//!
//! A config that passed [`SheetConfig::validate`] satisfies:
//! - `height` and `min_closing_height` are finite and `>= 0`;
//! - `min_closing_height < height`, or both are zero.

use std::time::Duration;

#[cfg(feature = "config-file")]
use std::path::Path;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};

use slideup_core::animation::Easing;
use thiserror::Error;

/// Default fully-open height.
pub const DEFAULT_HEIGHT: f64 = 260.0;

/// Default open/close duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Presentation transition style, forwarded opaquely to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(rename_all = "snake_case"))]
pub enum AnimationType {
    #[default]
    None,
    Slide,
    Fade,
}

/// Screen orientation the host may allow while the sheet is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    Portrait,
    PortraitUpsideDown,
    Landscape,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    /// Every orientation, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Portrait,
        Self::PortraitUpsideDown,
        Self::Landscape,
        Self::LandscapeLeft,
        Self::LandscapeRight,
    ];
}

/// Bottom sheet configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Fully-open panel height.
    pub height: f64,
    /// Height reached at the end of the close animation, before unmount.
    pub min_closing_height: f64,
    /// Open/close animation duration.
    pub duration: Duration,
    /// Easing curve for height transitions.
    pub easing: Easing,
    /// Enables drag-to-dismiss. Read live on each pointer event.
    pub close_on_drag_down: bool,
    /// Only claim drags that begin on the drag handle.
    pub drag_from_top_only: bool,
    /// Pressing the mask closes the sheet. Read live on each mask press.
    pub close_on_press_mask: bool,
    /// A platform back request closes the sheet. Read live on each request.
    pub close_on_press_back: bool,
    /// Forwarded to the presentation layer.
    pub animation_type: AnimationType,
    /// Forwarded to the presentation layer; never interpreted.
    pub supported_orientations: Vec<Orientation>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            min_closing_height: 0.0,
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
            close_on_drag_down: false,
            drag_from_top_only: false,
            close_on_press_mask: true,
            close_on_press_back: true,
            animation_type: AnimationType::default(),
            supported_orientations: Orientation::ALL.to_vec(),
        }
    }
}

impl SheetConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fully-open height.
    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the height the close animation ends at.
    #[must_use]
    pub fn min_closing_height(mut self, height: f64) -> Self {
        self.min_closing_height = height;
        self
    }

    /// Set the open/close duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the height easing curve.
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Enable or disable drag-to-dismiss.
    #[must_use]
    pub fn close_on_drag_down(mut self, enabled: bool) -> Self {
        self.close_on_drag_down = enabled;
        self
    }

    /// Restrict drags to those starting on the handle.
    #[must_use]
    pub fn drag_from_top_only(mut self, enabled: bool) -> Self {
        self.drag_from_top_only = enabled;
        self
    }

    /// Enable or disable close on mask press.
    #[must_use]
    pub fn close_on_press_mask(mut self, enabled: bool) -> Self {
        self.close_on_press_mask = enabled;
        self
    }

    /// Enable or disable close on back request.
    #[must_use]
    pub fn close_on_press_back(mut self, enabled: bool) -> Self {
        self.close_on_press_back = enabled;
        self
    }

    /// Set the forwarded transition style.
    #[must_use]
    pub fn animation_type(mut self, animation_type: AnimationType) -> Self {
        self.animation_type = animation_type;
        self
    }

    /// Set the forwarded orientation list.
    #[must_use]
    pub fn supported_orientations(mut self, orientations: impl Into<Vec<Orientation>>) -> Self {
        self.supported_orientations = orientations.into();
        self
    }

    /// Check that the geometry is usable.
    ///
    /// A zero-height sheet with a zero closing height is accepted; any
    /// other `min_closing_height >= height` is rejected.
    pub fn validate(&self) -> Result<(), SheetConfigError> {
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(SheetConfigError::InvalidHeight {
                height: self.height,
            });
        }
        if !self.min_closing_height.is_finite() || self.min_closing_height < 0.0 {
            return Err(SheetConfigError::InvalidMinClosingHeight {
                min_closing_height: self.min_closing_height,
            });
        }
        let degenerate = self.height == 0.0 && self.min_closing_height == 0.0;
        if self.min_closing_height >= self.height && !degenerate {
            return Err(SheetConfigError::MinClosingHeightNotBelowHeight {
                height: self.height,
                min_closing_height: self.min_closing_height,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// On-disk form of [`SheetConfig`]. Durations are in milliseconds.
#[cfg(feature = "config-file")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfigFile {
    pub height: f64,
    pub min_closing_height: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub close_on_drag_down: bool,
    pub drag_from_top_only: bool,
    pub close_on_press_mask: bool,
    pub close_on_press_back: bool,
    pub animation_type: AnimationType,
    pub supported_orientations: Vec<Orientation>,
}

#[cfg(feature = "config-file")]
impl Default for SheetConfigFile {
    fn default() -> Self {
        SheetConfig::default().into()
    }
}

#[cfg(feature = "config-file")]
impl From<SheetConfig> for SheetConfigFile {
    fn from(config: SheetConfig) -> Self {
        Self {
            height: config.height,
            min_closing_height: config.min_closing_height,
            duration_ms: config.duration.as_secs_f64() * 1000.0,
            easing: config.easing,
            close_on_drag_down: config.close_on_drag_down,
            drag_from_top_only: config.drag_from_top_only,
            close_on_press_mask: config.close_on_press_mask,
            close_on_press_back: config.close_on_press_back,
            animation_type: config.animation_type,
            supported_orientations: config.supported_orientations,
        }
    }
}

/// Exclusive upper bound on file durations, `u64::MAX` nanoseconds as `f64`.
#[cfg(feature = "config-file")]
const MAX_DURATION_NANOS: f64 = 18_446_744_073_709_551_616.0;

#[cfg(feature = "config-file")]
impl TryFrom<SheetConfigFile> for SheetConfig {
    type Error = SheetConfigError;

    fn try_from(file: SheetConfigFile) -> Result<Self, Self::Error> {
        let nanos = (file.duration_ms * 1_000_000.0).round();
        if !nanos.is_finite() || nanos < 0.0 || nanos >= MAX_DURATION_NANOS {
            return Err(SheetConfigError::InvalidDuration {
                duration_ms: file.duration_ms,
            });
        }
        let config = Self {
            height: file.height,
            min_closing_height: file.min_closing_height,
            duration: Duration::from_nanos(nanos as u64),
            easing: file.easing,
            close_on_drag_down: file.close_on_drag_down,
            drag_from_top_only: file.drag_from_top_only,
            close_on_press_mask: file.close_on_press_mask,
            close_on_press_back: file.close_on_press_back,
            animation_type: file.animation_type,
            supported_orientations: file.supported_orientations,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "config-file")]
impl SheetConfig {
    /// Load and validate from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, SheetConfigError> {
        let file: SheetConfigFile = toml::from_str(s).map_err(|err| SheetConfigError::Parse {
            format: "TOML",
            message: err.to_string(),
        })?;
        file.try_into()
    }

    /// Load and validate from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SheetConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load and validate from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, SheetConfigError> {
        let file: SheetConfigFile =
            serde_json::from_str(s).map_err(|err| SheetConfigError::Parse {
                format: "JSON",
                message: err.to_string(),
            })?;
        file.try_into()
    }

    /// Load and validate from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SheetConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors raised while building or loading a sheet configuration.
#[derive(Debug, Error)]
pub enum SheetConfigError {
    #[error("height must be a finite number >= 0, got {height}")]
    InvalidHeight { height: f64 },

    #[error("min_closing_height must be a finite number >= 0, got {min_closing_height}")]
    InvalidMinClosingHeight { min_closing_height: f64 },

    #[error("min_closing_height ({min_closing_height}) must be below height ({height})")]
    MinClosingHeightNotBelowHeight { height: f64, min_closing_height: f64 },

    #[error("duration must be a finite number of milliseconds >= 0, got {duration_ms}")]
    InvalidDuration { duration_ms: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}
