//! Pointer event handling: the `Idle → Drawing` and `Drawing → Drawing`
//! transitions, and stroke termination.

use log::debug;

use super::instance::{InkSurface, SurfacePhase};
use super::payload::StrokeSignal;
use crate::input::events::{ClientPosition, PointerEvent, PointerEventKind};
use crate::input::mapper::map_to_bitmap;
use crate::util::Point;

impl InkSurface {
    /// Processes one pointer event from the shell.
    ///
    /// Entry point for element-local events; pointer releases additionally
    /// arrive through the process-wide broadcaster registered at mount.
    /// Cancel and leave terminate an in-progress stroke exactly like a
    /// release. Events against an unmounted or inert surface are swallowed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        if self.host.is_none() || self.canvas.is_none() {
            debug!("pointer event ignored: surface not active");
            return;
        }

        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event.position),
            PointerEventKind::Move => self.on_pointer_move(event.position),
            PointerEventKind::Up | PointerEventKind::Cancel | PointerEventKind::Leave => {
                self.on_pointer_up()
            }
        }
    }

    /// `Idle → Drawing` (also `Fading → Drawing`, interrupting the fade).
    ///
    /// Opacity is snapped fully opaque before anything is drawn, so a
    /// partially faded previous stroke becomes instantly visible again
    /// under the new one. The interrupted fade's eventual completion
    /// report carries a superseded epoch and will be discarded.
    fn on_pointer_down(&mut self, position: ClientPosition) {
        if matches!(self.phase, SurfacePhase::Drawing) {
            debug!("pointer down ignored: stroke already in progress");
            return;
        }

        let Some(point) = self.map_position(position) else {
            return;
        };

        if let SurfacePhase::Fading { epoch } = self.phase {
            debug!("fade {epoch} interrupted by a new stroke");
        }
        if let Some(host) = &mut self.host {
            host.set_opacity(1.0);
        }

        self.phase = SurfacePhase::Drawing;
        self.path.reset();
        self.path.append(point);
        if let Some(canvas) = &mut self.canvas {
            canvas.begin_stroke(point);
        }

        self.emit(StrokeSignal::StrokeStarted);
    }

    /// `Drawing → Drawing`: commits one segment per sample.
    ///
    /// The point is appended before the signal fires, so the payload
    /// always contains the point just drawn.
    fn on_pointer_move(&mut self, position: ClientPosition) {
        if !matches!(self.phase, SurfacePhase::Drawing) {
            return;
        }

        let Some(point) = self.map_position(position) else {
            return;
        };

        if let Some(canvas) = &mut self.canvas {
            canvas.extend_stroke(point);
        }
        self.path.append(point);

        self.emit(StrokeSignal::StrokeExtended);
    }

    /// `Drawing → Fading` (or straight to `Idle` when fading is disabled).
    ///
    /// A release while not Drawing is a no-op; this also absorbs the
    /// duplicate delivery when a release reaches both the element handler
    /// and the process-wide broadcaster.
    fn on_pointer_up(&mut self) {
        if !matches!(self.phase, SurfacePhase::Drawing) {
            return;
        }

        self.emit(StrokeSignal::StrokeEnded);

        if self.config.fade_enabled {
            self.start_fade();
        } else {
            if let Some(canvas) = &mut self.canvas {
                canvas.clear();
            }
            self.path.reset();
            self.phase = SurfacePhase::Idle;
        }
    }

    /// Maps a client-space position into bitmap pixels.
    ///
    /// The display box is queried from the host per event, never cached.
    /// Returns `None` when the surface has no displayed area yet; the
    /// triggering event is then dropped entirely.
    fn map_position(&self, position: ClientPosition) -> Option<Point> {
        let host = self.host.as_ref()?;
        let canvas = self.canvas.as_ref()?;
        map_to_bitmap(
            position,
            &host.display_bounds(),
            canvas.width(),
            canvas.height(),
        )
    }
}
