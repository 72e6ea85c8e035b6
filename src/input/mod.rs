//! Input handling: pointer events, coordinate mapping, and stroke
//! recording.
//!
//! This module translates shell pointer events into bitmap-space samples.
//! It provides the coordinate mapper that compensates for display scaling,
//! the recorder that accumulates the in-progress stroke, and the
//! process-wide broadcaster that catches pointer releases outside the
//! surface bounds.

pub mod broadcaster;
pub mod events;
pub mod mapper;
pub mod path;

// Re-export commonly used types at module level
pub use broadcaster::{PointerBroadcaster, PointerSubscription};
pub use events::{ClientPosition, PointerEvent, PointerEventKind};
pub use mapper::DisplayBounds;
pub use path::StrokePath;
