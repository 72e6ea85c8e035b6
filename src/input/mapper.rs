//! Client-to-bitmap coordinate mapping.
//!
//! The surface element's displayed size can differ from its bitmap
//! resolution (CSS-style scaling, pixel density), so every incoming
//! pointer position is rescaled into bitmap pixels before it is recorded
//! or drawn.

use log::debug;

use crate::input::events::ClientPosition;
use crate::util::Point;

/// The surface element's current bounding box in client coordinates.
///
/// Queried from the host per event rather than cached: the box can change
/// between events, e.g. during a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    /// Left edge in client coordinates
    pub left: f64,
    /// Top edge in client coordinates
    pub top: f64,
    /// Displayed width
    pub width: f64,
    /// Displayed height
    pub height: f64,
}

impl DisplayBounds {
    /// Creates a bounding box from its left/top corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Maps a client-space pointer position to bitmap-internal coordinates.
///
/// Scale factors are derived from the ratio of bitmap size to displayed
/// size, which also absorbs any pixel-density scaling baked into the
/// bitmap dimensions.
///
/// # Returns
/// - `Some(Point)` with the rescaled position
/// - `None` when the displayed box has no area (surface not laid out
///   yet); the caller must drop the sample entirely
pub fn map_to_bitmap(
    position: ClientPosition,
    bounds: &DisplayBounds,
    bitmap_width: i32,
    bitmap_height: i32,
) -> Option<Point> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        debug!("sample refused: surface has no displayed area yet");
        return None;
    }

    let scale_x = bitmap_width as f64 / bounds.width;
    let scale_y = bitmap_height as f64 / bounds.height;

    Some(Point {
        x: (position.x - bounds.left) * scale_x,
        y: (position.y - bounds.top) * scale_y,
    })
}
