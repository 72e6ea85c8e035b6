//! RGBA color type and predefined color constants.

use serde::Serialize;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use ghostline::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a CSS-style hex color string (`#RGB` or `#RRGGBB`).
    ///
    /// Shorthand digits are expanded (`#FA0` → `#FFAA00`). The alpha
    /// channel is always fully opaque.
    ///
    /// # Returns
    /// - `Some(Color)` for a well-formed hex string
    /// - `None` for anything else (missing `#`, wrong length, bad digits)
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;

        let (r, g, b) = match digits.len() {
            3 => {
                let mut chars = digits.chars();
                let r = chars.next()?.to_digit(16)? as f64;
                let g = chars.next()?.to_digit(16)? as f64;
                let b = chars.next()?.to_digit(16)? as f64;
                // Expand shorthand: each digit doubles (0xF -> 0xFF)
                (r * 17.0, g * 17.0, b * 17.0)
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()? as f64;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()? as f64;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()? as f64;
                (r, g, b)
            }
            _ => return None,
        };

        Some(Self {
            r: r / 255.0,
            g: g / 255.0,
            b: b / 255.0,
            a: 1.0,
        })
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
