//! Responsive bitmap resizing.

use log::{debug, error};

use super::instance::{InkSurface, SurfacePhase};

impl InkSurface {
    /// Entry point for display-size change reports from the shell.
    ///
    /// Only acts when `responsive` is enabled; a fixed-size surface keeps
    /// its bitmap regardless of how the element is displayed.
    pub fn on_display_resized(&mut self) {
        if !self.config.responsive {
            return;
        }
        self.apply_display_size();
    }

    /// Resizes the bitmap to the displayed size scaled by pixel density.
    ///
    /// Resizing discards the raster, so an in-progress stroke is abandoned:
    /// the path resets and the phase returns to Idle with no stroke-ended
    /// signal and no fade. A fade already in flight is left alone; its
    /// completion simply clears the fresh bitmap. When allocation of the
    /// new bitmap fails the old one is kept and the failure logged.
    pub(super) fn apply_display_size(&mut self) {
        let (Some(host), Some(canvas)) = (self.host.as_ref(), self.canvas.as_mut()) else {
            return;
        };

        let bounds = host.display_bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            debug!("resize skipped: surface has no displayed area yet");
            return;
        }

        let target_width = ((bounds.width * self.pixel_density).round() as i32).max(1);
        let target_height = ((bounds.height * self.pixel_density).round() as i32).max(1);
        if target_width == canvas.width() && target_height == canvas.height() {
            return;
        }

        if matches!(self.phase, SurfacePhase::Drawing) {
            self.path.reset();
            self.phase = SurfacePhase::Idle;
            debug!("in-progress stroke abandoned by resize");
        }

        match canvas.resize(target_width, target_height) {
            Ok(()) => debug!("bitmap resized to {target_width}x{target_height}"),
            Err(err) => error!("bitmap resize to {target_width}x{target_height} failed: {err}"),
        }
    }
}
