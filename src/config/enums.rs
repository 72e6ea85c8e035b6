//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::draw::Color;

/// Shape drawn at the open ends of a stroke segment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Segment ends exactly at the point
    Butt,
    /// Segment extends past the point by half the line width, squared off
    Square,
    /// Segment ends in a semicircle centered on the point
    Round,
}

impl LineCap {
    /// Converts to the Cairo equivalent.
    pub fn to_cairo(self) -> cairo::LineCap {
        match self {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Square => cairo::LineCap::Square,
            LineCap::Round => cairo::LineCap::Round,
        }
    }
}

/// Shape drawn where consecutive stroke segments meet.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Corners are cut flat
    Bevel,
    /// Corners are rounded with an arc
    Round,
    /// Corners extend to a sharp point
    Miter,
}

impl LineJoin {
    /// Converts to the Cairo equivalent.
    pub fn to_cairo(self) -> cairo::LineJoin {
        match self {
            LineJoin::Bevel => cairo::LineJoin::Bevel,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Miter => cairo::LineJoin::Miter,
        }
    }
}

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "yellow"
///
/// # CSS-style hex string
/// color = "#FFF200"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black)
    /// or a `#RGB`/`#RRGGBB` hex string
    Named(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification to a [`Color`].
    ///
    /// # Returns
    /// - `Some(Color)` for a known name, well-formed hex string, or RGB array
    /// - `None` for an unknown name or malformed hex string
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Named(value) => {
                if value.starts_with('#') {
                    Color::from_hex(value)
                } else {
                    crate::util::name_to_color(value)
                }
            }
            ColorSpec::Rgb([r, g, b]) => Some(Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            }),
        }
    }
}
