//! Shared geometry and color helpers.
//!
//! This module provides:
//! - [`Point`]: bitmap-internal coordinates used by the recorder and renderer
//! - Color name lookup for the configuration system

use crate::draw::{Color, color::*};
use serde::Serialize;

/// A position on the bitmap in internal pixel coordinates (post-scaling).
///
/// Points are immutable once recorded; the stroke recorder stores them in
/// arrival order and never rewrites them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate in bitmap pixels
    pub x: f64,
    /// Vertical coordinate in bitmap pixels
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config
/// file. Hex strings (`#RGB`, `#RRGGBB`) are handled separately by
/// [`Color::from_hex`].
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
