//! The seam between the surface core and its hosting shell.
//!
//! The crate never talks to a real rendering engine directly. A component
//! front end implements [`SurfaceHost`] and forwards transition completions
//! back via [`TransitionEnd`]; everything else (state, drawing, timing
//! decisions) stays inside the core.

use crate::input::DisplayBounds;

/// Operations the hosting shell must provide for one mounted surface.
///
/// All methods are called from the surface's own event handlers, on the
/// single UI execution context. Hosts obey; they never decide.
pub trait SurfaceHost {
    /// Current bounding box of the surface element in client coordinates.
    ///
    /// Queried per pointer event, never cached by the core, because the
    /// displayed box can change between events.
    fn display_bounds(&self) -> DisplayBounds;

    /// Ratio of physical to logical pixels for the hosting display.
    fn pixel_density(&self) -> f64;

    /// Snaps the surface opacity instantly, with no animation.
    ///
    /// Any opacity transition currently running must be dropped.
    fn set_opacity(&mut self, opacity: f64);

    /// Starts an animated opacity transition from the current value to
    /// fully transparent over `duration_ms`.
    ///
    /// The host must report the transition's completion through
    /// [`InkSurface::on_transition_end`](crate::surface::InkSurface::on_transition_end),
    /// echoing `epoch` unchanged. The core always snaps opacity opaque
    /// immediately before calling this, so the transition re-triggers even
    /// when the previous one ended at the same value.
    fn fade_to_transparent(&mut self, duration_ms: f64, epoch: u64);
}

/// Which style property a completed transition animated.
///
/// Hosts that only ever animate opacity can always report `Opacity`;
/// shells that share one completion channel across properties use `Other`
/// for everything the surface should ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProperty {
    /// The surface-wide opacity fade
    Opacity,
    /// Any unrelated transition on the same element
    Other,
}

/// A transition-completion report delivered by the host.
///
/// The `epoch` must be the value the host received in
/// [`SurfaceHost::fade_to_transparent`]; reports from superseded fades
/// carry an old epoch and are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEnd {
    /// The property the finished transition animated
    pub property: TransitionProperty,
    /// The fade generation this report belongs to
    pub epoch: u64,
}
