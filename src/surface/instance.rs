//! The ink surface instance: construction, mount/unmount lifecycle, and
//! shared state for the stroke-and-fade state machine.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use log::{debug, error, warn};

use super::host::SurfaceHost;
use super::payload::{DrawPayload, StrokeEvent, StrokeListener, StrokeSignal};
use crate::config::{ConfigError, SurfaceConfig};
use crate::draw::{Canvas, CanvasError, StrokeStyle};
use crate::input::{PointerBroadcaster, PointerEventKind, PointerSubscription, StrokePath};

/// Where one surface instance currently is in its stroke-and-fade cycle.
///
/// The cycle is `Idle → Drawing → Fading → Idle`, with no terminal state;
/// an instance runs many cycles over its mounted lifetime. Every mutation
/// happens inside a transition method, never ad hoc across handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePhase {
    /// Waiting for a pointer press; the bitmap may still hold a finished
    /// opaque stroke when fading is disabled
    Idle,
    /// Pointer held down, segments being committed as samples arrive
    Drawing,
    /// Stroke finished, opacity transitioning to transparent
    Fading {
        /// Generation counter identifying this fade against stale
        /// completion reports
        epoch: u64,
    },
}

/// A disappearing-ink stroke surface.
///
/// One instance owns one bitmap, one stroke path, and one immutable style
/// config for its entire mounted lifetime. It is single-threaded by
/// design: the hosting shell delivers pointer, transition, and resize
/// events strictly in arrival order, so no two handlers ever overlap.
///
/// Construction validates the config; `mount` attaches the instance to a
/// host shell and the process-wide pointer broadcaster. If the drawing
/// surface cannot be created at mount, the instance degrades to an inert
/// widget that swallows all input without crashing or emitting signals.
pub struct InkSurface {
    pub(super) config: SurfaceConfig,
    pub(super) style: StrokeStyle,
    pub(super) phase: SurfacePhase,
    pub(super) path: StrokePath,
    pub(super) canvas: Option<Canvas>,
    pub(super) host: Option<Box<dyn SurfaceHost>>,
    pub(super) pixel_density: f64,
    pub(super) fade_epoch: u64,
    pointer_subscription: Option<PointerSubscription>,
    listeners: Vec<StrokeListener>,
}

impl InkSurface {
    /// Creates an unmounted surface from a validated configuration.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found; an invalid config would
    /// misrender every stroke, so nothing is clamped silently.
    pub fn new(config: SurfaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let style = StrokeStyle::from_config(&config);

        Ok(Self {
            config,
            style,
            phase: SurfacePhase::Idle,
            path: StrokePath::new(),
            canvas: None,
            host: None,
            pixel_density: 1.0,
            fade_epoch: 0,
            pointer_subscription: None,
            listeners: Vec::new(),
        })
    }

    /// Attaches the surface to a host shell.
    ///
    /// Acquires the drawing bitmap, caches the pixel density, snaps
    /// opacity fully opaque, performs the initial responsive resize, and
    /// registers the process-wide pointer-release subscription. A second
    /// mount on an already-mounted instance is ignored with a warning.
    ///
    /// If the bitmap cannot be created the surface becomes inert: the
    /// host is kept so `unmount` stays meaningful, but no subscription is
    /// registered and every later event is swallowed.
    pub fn mount(
        this: &Rc<RefCell<Self>>,
        mut host: Box<dyn SurfaceHost>,
        pointers: &PointerBroadcaster,
    ) {
        let mut surface = this.borrow_mut();

        if surface.host.is_some() {
            warn!("mount ignored: surface is already mounted");
            return;
        }

        let density = host.pixel_density();
        surface.pixel_density = if density > 0.0 { density } else { 1.0 };

        let width = surface.config.width as i32;
        let height = surface.config.height as i32;
        match Canvas::new(width, height, surface.style) {
            Ok(canvas) => surface.canvas = Some(canvas),
            Err(err) => {
                error!("drawing surface unavailable, widget is inert: {err}");
                surface.host = Some(host);
                return;
            }
        }

        host.set_opacity(1.0);
        surface.host = Some(host);

        if surface.config.responsive {
            surface.apply_display_size();
        }

        // Releases must terminate a stroke even when the pointer has left
        // the element, so they arrive through the process-wide broadcaster.
        // Down/move events come through the element handler directly; a
        // release delivered twice is harmless because ending a stroke is
        // only honored while Drawing.
        let weak = Rc::downgrade(this);
        surface.pointer_subscription = Some(pointers.subscribe(Box::new(move |event| {
            if event.kind != PointerEventKind::Up {
                return;
            }
            if let Some(surface) = weak.upgrade() {
                surface.borrow_mut().handle_pointer(event);
            }
        })));

        debug!("surface mounted ({width}x{height} bitmap)");
    }

    /// Detaches the surface from its host and releases every registration.
    ///
    /// Idempotent: unmounting an unmounted surface does nothing. Dropping
    /// the pointer subscription guarantees no callback can reach this
    /// instance afterwards, even if the shell keeps dispatching events.
    pub fn unmount(&mut self) {
        if self.host.is_none() {
            return;
        }

        self.pointer_subscription = None;
        self.host = None;
        self.canvas = None;
        self.phase = SurfacePhase::Idle;
        self.path.reset();
        debug!("surface unmounted");
    }

    /// Registers a listener for stroke lifecycle signals.
    ///
    /// Listeners are called synchronously, in subscription order, within
    /// the event-processing turn that caused the signal.
    pub fn subscribe(&mut self, listener: StrokeListener) {
        self.listeners.push(listener);
    }

    /// The immutable style configuration this surface was built from.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Current position in the stroke-and-fade cycle.
    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    /// Read-only view of the in-progress stroke path.
    pub fn stroke_path(&self) -> &StrokePath {
        &self.path
    }

    /// Whether the surface is currently attached to a host.
    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    /// Whether the surface mounted without a usable drawing bitmap.
    pub fn is_inert(&self) -> bool {
        self.host.is_some() && self.canvas.is_none()
    }

    /// Current bitmap dimensions, if a bitmap exists.
    pub fn bitmap_size(&self) -> Option<(i32, i32)> {
        self.canvas.as_ref().map(|c| (c.width(), c.height()))
    }

    /// Returns whether any pixel on the bitmap is non-transparent.
    pub fn has_visible_ink(&mut self) -> bool {
        self.canvas
            .as_mut()
            .map(Canvas::has_visible_ink)
            .unwrap_or(false)
    }

    /// Writes the current bitmap to a PNG file.
    ///
    /// # Errors
    /// Returns [`CanvasError::Unavailable`] when the surface is unmounted
    /// or inert, or the underlying export error otherwise.
    pub fn export_png(&mut self, path: &Path) -> Result<(), CanvasError> {
        match &mut self.canvas {
            Some(canvas) => canvas.write_png(path),
            None => Err(CanvasError::Unavailable),
        }
    }

    /// Builds a payload snapshot and delivers it to every listener.
    pub(super) fn emit(&mut self, signal: StrokeSignal) {
        if self.listeners.is_empty() {
            return;
        }

        let (bitmap_width, bitmap_height) = self.bitmap_size().unwrap_or((0, 0));
        let event = StrokeEvent {
            signal,
            payload: DrawPayload {
                bitmap_width,
                bitmap_height,
                pixel_density: self.pixel_density,
                color: self.config.color.clone(),
                painted_pixels: self.path.points().to_vec(),
            },
        };

        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
