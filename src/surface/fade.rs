//! The timed fade: `Drawing → Fading` and `Fading → Idle` transitions.

use log::debug;

use super::host::{TransitionEnd, TransitionProperty};
use super::instance::{InkSurface, SurfacePhase};

impl InkSurface {
    /// `Drawing → Fading`: schedules the opacity transition.
    ///
    /// Each fade gets a fresh epoch, and the host is told to snap opaque
    /// before animating. The snap drops whatever transition the host may
    /// still be running, so the new one re-triggers even when the previous
    /// fade already reached the same target opacity.
    pub(super) fn start_fade(&mut self) {
        self.fade_epoch += 1;
        let epoch = self.fade_epoch;

        if let Some(host) = &mut self.host {
            host.set_opacity(1.0);
            host.fade_to_transparent(self.config.fade_duration_ms, epoch);
        }

        self.phase = SurfacePhase::Fading { epoch };
        debug!("fade {epoch} started ({} ms)", self.config.fade_duration_ms);
    }

    /// `Fading → Idle`: the host reports a finished transition.
    ///
    /// Honored only when a fade is actually in progress, the finished
    /// property is opacity, and the report's epoch matches the current
    /// fade generation. Anything else is a stale or unrelated completion
    /// (a cancelled fade settling late, some other property on the same
    /// element) and is discarded without touching the bitmap.
    ///
    /// On completion the bitmap is cleared, opacity snaps back to opaque
    /// (instantly and invisibly, the bitmap being empty), and the stroke
    /// path resets for the next cycle.
    pub fn on_transition_end(&mut self, report: TransitionEnd) {
        let SurfacePhase::Fading { epoch } = self.phase else {
            debug!("transition report ignored: no fade in progress");
            return;
        };

        if report.property != TransitionProperty::Opacity {
            debug!("transition report ignored: property is not opacity");
            return;
        }

        if report.epoch != epoch {
            debug!(
                "stale fade completion discarded (epoch {}, current {epoch})",
                report.epoch
            );
            return;
        }

        if let Some(canvas) = &mut self.canvas {
            canvas.clear();
        }
        if let Some(host) = &mut self.host {
            host.set_opacity(1.0);
        }
        self.path.reset();
        self.phase = SurfacePhase::Idle;
        debug!("fade {epoch} completed, surface reset");
    }
}
