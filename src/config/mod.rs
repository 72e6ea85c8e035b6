//! Configuration support for ghostline.
//!
//! This module defines the style configuration for an ink surface and
//! handles loading user settings from the configuration file located at
//! `~/.config/ghostline/config.toml`. Settings cover the bitmap size,
//! stroke appearance, and fade behavior.
//!
//! If no config file exists, sensible defaults are used automatically.
//! Unlike most of this crate's logging-and-continue error handling,
//! invalid values are rejected outright: a surface constructed from a bad
//! config would misrender every stroke, so construction fails fast with a
//! descriptive error instead of clamping silently.

pub mod enums;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, LineCap, LineJoin};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted bitmap dimension (Cairo's coordinate limit).
const MAX_BITMAP_DIM: u32 = 32_767;

/// Errors raised when a configuration fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {axis} {value}: must be between 1 and {MAX_BITMAP_DIM}")]
    Dimension { axis: &'static str, value: u32 },

    #[error("invalid stroke_width {0}: must be a positive, finite number")]
    StrokeWidth(f64),

    #[error("invalid fade_duration_ms {0}: must be a positive, finite number")]
    FadeDuration(f64),

    #[error("unrecognized color {0:?}: expected a named color, #RGB/#RRGGBB hex, or [r, g, b]")]
    Color(String),
}

/// Style configuration for one ink surface instance.
///
/// All fields have sensible defaults and will use those if not specified
/// in the config file. Values are fixed for the lifetime of the surface;
/// there is no runtime reconfiguration.
///
/// # Example TOML
/// ```toml
/// width = 640
/// height = 400
/// stroke_width = 5.0
/// color = "#FFF200"
/// fade_duration_ms = 850.0
/// line_cap = "round"
/// line_join = "round"
/// fade_enabled = true
/// responsive = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Bitmap width in internal pixels (ignored when `responsive` is set)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Bitmap height in internal pixels (ignored when `responsive` is set)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Stroke thickness in bitmap pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Ink color - named, `#RGB`/`#RRGGBB` hex, or `[r, g, b]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Shape of stroke segment ends
    #[serde(default = "default_line_cap")]
    pub line_cap: LineCap,

    /// Shape of stroke segment corners
    #[serde(default = "default_line_join")]
    pub line_join: LineJoin,

    /// How long the fade to transparent takes after the pointer lifts
    #[serde(default = "default_fade_duration_ms")]
    pub fade_duration_ms: f64,

    /// Whether finished strokes fade out (when false, pointer-up clears
    /// the bitmap immediately)
    #[serde(default = "default_fade_enabled")]
    pub fade_enabled: bool,

    /// Keep the bitmap resolution synchronized with the displayed size
    #[serde(default = "default_responsive")]
    pub responsive: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            stroke_width: default_stroke_width(),
            color: default_color(),
            line_cap: default_line_cap(),
            line_join: default_line_join(),
            fade_duration_ms: default_fade_duration_ms(),
            fade_enabled: default_fade_enabled(),
            responsive: default_responsive(),
        }
    }
}

impl SurfaceConfig {
    /// Checks every field against its accepted range.
    ///
    /// Called by `InkSurface::new`, so a surface can only be constructed
    /// from a valid configuration.
    ///
    /// # Errors
    /// Returns the first violation found:
    /// - `width`/`height` outside 1..=32767
    /// - non-positive or non-finite `stroke_width` or `fade_duration_ms`
    /// - a color that resolves to nothing
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.width == 0 || self.width > MAX_BITMAP_DIM {
            return Err(ConfigError::Dimension {
                axis: "width",
                value: self.width,
            });
        }
        if self.height == 0 || self.height > MAX_BITMAP_DIM {
            return Err(ConfigError::Dimension {
                axis: "height",
                value: self.height,
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::StrokeWidth(self.stroke_width));
        }
        if !self.fade_duration_ms.is_finite() || self.fade_duration_ms <= 0.0 {
            return Err(ConfigError::FadeDuration(self.fade_duration_ms));
        }
        if self.color.resolve().is_none() {
            let spec = match &self.color {
                ColorSpec::Named(name) => name.clone(),
                ColorSpec::Rgb(rgb) => format!("{rgb:?}"),
            };
            return Err(ConfigError::Color(spec));
        }
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/ghostline/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("ghostline");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the user config file, or returns defaults
    /// if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read or parsed
    /// - The parsed values fail validation
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or fails validation.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: SurfaceConfig = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Produces the JSON schema for the config file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SurfaceConfig)
    }
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    400
}

fn default_stroke_width() -> f64 {
    5.0
}

fn default_color() -> ColorSpec {
    ColorSpec::Named("#FFF200".to_string())
}

fn default_line_cap() -> LineCap {
    LineCap::Round
}

fn default_line_join() -> LineJoin {
    LineJoin::Round
}

fn default_fade_duration_ms() -> f64 {
    850.0
}

fn default_fade_enabled() -> bool {
    true
}

fn default_responsive() -> bool {
    false
}
