//! Generic pointer event types for cross-shell compatibility.
//!
//! Host shells map their native input events to these generic values
//! before feeding them to the surface.

/// A pointer position in client (display) coordinates, before any
/// scaling to bitmap pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientPosition {
    /// Horizontal client coordinate
    pub x: f64,
    /// Vertical client coordinate
    pub y: f64,
}

impl ClientPosition {
    /// Creates a new client-space position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The kind of pointer interaction an event reports.
///
/// `Cancel` and `Leave` terminate an in-progress stroke exactly like
/// `Up` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Pointer pressed on the surface
    Down,
    /// Pointer moved while pressed
    Move,
    /// Pointer released
    Up,
    /// Interaction aborted by the input system
    Cancel,
    /// Pointer left the surface bounds
    Leave,
}

/// A single pointer event delivered to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened
    pub kind: PointerEventKind,
    /// Where it happened, in client coordinates
    pub position: ClientPosition,
}

impl PointerEvent {
    /// Creates a new pointer event.
    pub fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: ClientPosition::new(x, y),
        }
    }
}
