//! Disappearing-ink stroke surface.
//!
//! Exposes the stroke-and-fade core alongside the supporting modules it
//! relies on, so host shells and tools (e.g. the replay binary) can share
//! configuration, rendering, and input plumbing with the library.

pub mod config;
pub mod draw;
pub mod input;
pub mod surface;
pub mod util;

pub use config::SurfaceConfig;
pub use surface::InkSurface;
