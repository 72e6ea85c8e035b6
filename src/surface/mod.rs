//! The widget core: one surface instance tying together the coordinate
//! mapper, stroke recorder, incremental renderer, fade controller, and
//! resize adapter behind a host-shell seam.

mod fade;
mod host;
mod instance;
mod payload;
mod pointer;
mod resize;

pub use host::{SurfaceHost, TransitionEnd, TransitionProperty};
pub use instance::{InkSurface, SurfacePhase};
pub use payload::{DrawPayload, StrokeEvent, StrokeListener, StrokeSignal};
