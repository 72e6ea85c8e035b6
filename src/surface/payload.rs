//! Stroke lifecycle signals and their payload snapshots.

use serde::Serialize;

use crate::config::ColorSpec;
use crate::util::Point;

/// Which lifecycle point a stroke signal reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeSignal {
    /// First point of a new stroke, fired after the point is recorded
    StrokeStarted,
    /// A subsequent point, fired after its segment is drawn
    StrokeExtended,
    /// Pointer released, fired before the path is reset
    StrokeEnded,
}

/// Snapshot of the surface at the instant a signal fires.
///
/// This is a value copy, not a live view: `painted_pixels` is cloned from
/// the stroke path at emission time and never updates afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DrawPayload {
    /// Bitmap width in internal pixels (0 when the surface is inert)
    pub bitmap_width: i32,
    /// Bitmap height in internal pixels (0 when the surface is inert)
    pub bitmap_height: i32,
    /// Pixel density cached at mount
    pub pixel_density: f64,
    /// Configured ink color, as specified
    pub color: ColorSpec,
    /// Copy of the stroke path recorded so far, in drawing order
    pub painted_pixels: Vec<Point>,
}

/// A stroke signal together with its payload snapshot.
///
/// Delivered synchronously to every subscribed listener, within the same
/// event-processing turn that caused it.
#[derive(Debug, Clone, Serialize)]
pub struct StrokeEvent {
    /// Which lifecycle point fired
    pub signal: StrokeSignal,
    /// The surface snapshot at that instant
    #[serde(flatten)]
    pub payload: DrawPayload,
}

/// Callback invoked for every emitted stroke signal.
pub type StrokeListener = Box<dyn FnMut(&StrokeEvent)>;
