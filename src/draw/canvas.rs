//! Cairo-backed bitmap surface with incremental stroke rendering.
//!
//! The canvas commits each stroke segment to the bitmap as soon as it
//! arrives, so a partially drawn stroke stays visible without a full
//! redraw. There is no batching or double buffering.

use std::fs::File;
use std::path::Path;

use log::debug;
use thiserror::Error;

use super::color::Color;
use crate::config::{LineCap, LineJoin, SurfaceConfig};
use crate::util::Point;

/// Errors raised while creating or exporting the drawing surface.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to allocate {width}x{height} image surface: {source}")]
    SurfaceCreation {
        width: i32,
        height: i32,
        source: cairo::Error,
    },

    #[error("failed to acquire drawing context: {0}")]
    ContextCreation(cairo::Error),

    #[error("failed to export bitmap: {0}")]
    PngExport(#[from] cairo::IoError),

    #[error("failed to write bitmap file: {0}")]
    Io(#[from] std::io::Error),

    #[error("no drawing surface available")]
    Unavailable,
}

/// Resolved stroke appearance applied to every drawn segment.
///
/// Built once from the validated [`SurfaceConfig`]; immutable for the
/// lifetime of the surface instance.
#[derive(Clone, Copy, Debug)]
pub struct StrokeStyle {
    /// Line thickness in bitmap pixels
    pub thickness: f64,
    /// Stroke color
    pub color: Color,
    /// Segment end-cap shape
    pub cap: LineCap,
    /// Segment corner join shape
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Resolves the stroke style from a validated config.
    ///
    /// The config must have passed validation; an unresolvable color here
    /// would have been rejected at construction, so this falls back to the
    /// default only as a safety net.
    pub fn from_config(config: &SurfaceConfig) -> Self {
        Self {
            thickness: config.stroke_width,
            color: config.color.resolve().unwrap_or(super::color::YELLOW),
            cap: config.line_cap,
            join: config.line_join,
        }
    }
}

/// The raster surface strokes are painted onto.
///
/// Wraps a [`cairo::ImageSurface`] and tracks the pen position between
/// segments. A short-lived Cairo context is created per operation and the
/// full stroke style applied each time, so resizing the surface never
/// loses configuration.
pub struct Canvas {
    surface: cairo::ImageSurface,
    style: StrokeStyle,
    last_point: Option<Point>,
}

impl Canvas {
    /// Creates a transparent bitmap of the given size.
    ///
    /// A context is constructed once up front so that an unusable surface
    /// is detected at mount time rather than on the first stroke.
    ///
    /// # Errors
    /// Returns an error if the image surface cannot be allocated or a
    /// drawing context cannot be created for it.
    pub fn new(width: i32, height: i32, style: StrokeStyle) -> Result<Self, CanvasError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).map_err(
            |source| CanvasError::SurfaceCreation {
                width,
                height,
                source,
            },
        )?;

        // Probe context creation so mount can degrade to inert mode early.
        cairo::Context::new(&surface).map_err(CanvasError::ContextCreation)?;

        Ok(Self {
            surface,
            style,
            last_point: None,
        })
    }

    /// Bitmap width in internal pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Bitmap height in internal pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Starts a new stroke at `point` without leaving a visible mark.
    pub fn begin_stroke(&mut self, point: Point) {
        self.last_point = Some(point);
    }

    /// Draws a straight segment from the previous point to `point` and
    /// commits it to the bitmap immediately.
    ///
    /// If no stroke is in progress the point is adopted as the start
    /// position instead of drawing.
    pub fn extend_stroke(&mut self, point: Point) {
        let Some(prev) = self.last_point else {
            self.last_point = Some(point);
            return;
        };

        let Ok(ctx) = cairo::Context::new(&self.surface) else {
            debug!("segment dropped: drawing context unavailable");
            return;
        };

        self.apply_style(&ctx);
        ctx.move_to(prev.x, prev.y);
        ctx.line_to(point.x, point.y);
        let _ = ctx.stroke();

        self.last_point = Some(point);
    }

    /// Erases the entire bitmap back to transparent.
    pub fn clear(&mut self) {
        if let Ok(ctx) = cairo::Context::new(&self.surface) {
            ctx.set_operator(cairo::Operator::Clear);
            let _ = ctx.paint();
        }
        self.last_point = None;
    }

    /// Replaces the bitmap with a fresh transparent surface of a new size.
    ///
    /// The old bitmap content is discarded. The previous surface is kept
    /// when allocation fails, so the canvas stays usable at its old size.
    ///
    /// # Errors
    /// Returns an error if the new surface cannot be allocated.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), CanvasError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).map_err(
            |source| CanvasError::SurfaceCreation {
                width,
                height,
                source,
            },
        )?;

        self.surface = surface;
        self.last_point = None;
        Ok(())
    }

    /// Returns whether any pixel on the bitmap is non-transparent.
    pub fn has_visible_ink(&mut self) -> bool {
        self.surface.flush();
        self.surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    /// Writes the bitmap to a PNG file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or the surface
    /// cannot be encoded.
    pub fn write_png(&mut self, path: &Path) -> Result<(), CanvasError> {
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        Ok(())
    }

    fn apply_style(&self, ctx: &cairo::Context) {
        let color = self.style.color;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_line_width(self.style.thickness);
        ctx.set_line_cap(self.style.cap.to_cairo());
        ctx.set_line_join(self.style.join.to_cairo());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;

    fn test_canvas(width: i32, height: i32) -> Canvas {
        let style = StrokeStyle::from_config(&SurfaceConfig::default());
        Canvas::new(width, height, style).expect("canvas creation")
    }

    #[test]
    fn begin_stroke_leaves_no_mark() {
        let mut canvas = test_canvas(64, 64);
        canvas.begin_stroke(Point::new(10.0, 10.0));
        assert!(!canvas.has_visible_ink());
    }

    #[test]
    fn extend_stroke_commits_pixels_immediately() {
        let mut canvas = test_canvas(64, 64);
        canvas.begin_stroke(Point::new(5.0, 5.0));
        canvas.extend_stroke(Point::new(40.0, 40.0));
        assert!(canvas.has_visible_ink());
    }

    #[test]
    fn clear_erases_everything() {
        let mut canvas = test_canvas(64, 64);
        canvas.begin_stroke(Point::new(5.0, 5.0));
        canvas.extend_stroke(Point::new(40.0, 40.0));
        canvas.clear();
        assert!(!canvas.has_visible_ink());
    }

    #[test]
    fn resize_changes_dimensions_and_drops_content() {
        let mut canvas = test_canvas(64, 64);
        canvas.begin_stroke(Point::new(5.0, 5.0));
        canvas.extend_stroke(Point::new(40.0, 40.0));

        canvas.resize(128, 96).expect("resize");
        assert_eq!(canvas.width(), 128);
        assert_eq!(canvas.height(), 96);
        assert!(!canvas.has_visible_ink());
    }

    #[test]
    fn drawing_still_works_after_resize() {
        let mut canvas = test_canvas(64, 64);
        canvas.resize(128, 96).expect("resize");
        canvas.begin_stroke(Point::new(10.0, 10.0));
        canvas.extend_stroke(Point::new(100.0, 80.0));
        assert!(canvas.has_visible_ink());
    }
}
