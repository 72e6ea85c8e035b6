use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use ghostline::config::SurfaceConfig;
use ghostline::input::{DisplayBounds, PointerBroadcaster, PointerEvent, PointerEventKind};
use ghostline::surface::{InkSurface, SurfaceHost, TransitionEnd, TransitionProperty};

#[derive(Parser, Debug)]
#[command(name = "ghostline")]
#[command(version, about = "Replay pointer scripts against a disappearing-ink stroke surface")]
#[command(after_help = "Scripts are JSON arrays of pointer events, e.g.\n  \
    [{\"kind\":\"down\",\"x\":10,\"y\":10},{\"kind\":\"move\",\"x\":50,\"y\":60},{\"kind\":\"up\"}]\n\
Stroke signals are printed to stdout as JSON lines.")]
struct Cli {
    /// JSON pointer script to replay
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Surface style config (TOML); falls back to the user config file
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the bitmap as PNG after the script has run
    #[arg(long, short = 'o', value_name = "FILE")]
    out: Option<PathBuf>,
}

/// One scripted pointer event.
///
/// Release-like events carry no coordinates; the surface ends a stroke
/// wherever the last sample left it.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Cancel,
    Leave,
}

/// Host without a real rendering engine: the surface is "displayed" at
/// its bitmap size, and fade requests are remembered instead of animated
/// so the run can settle them explicitly.
struct HeadlessHost {
    bounds: DisplayBounds,
    pending_fade: Rc<Cell<Option<u64>>>,
}

impl SurfaceHost for HeadlessHost {
    fn display_bounds(&self) -> DisplayBounds {
        self.bounds
    }

    fn pixel_density(&self) -> f64 {
        1.0
    }

    fn set_opacity(&mut self, _opacity: f64) {
        // A snap drops whatever transition would still be running.
        self.pending_fade.set(None);
    }

    fn fade_to_transparent(&mut self, duration_ms: f64, epoch: u64) {
        log::info!("fade {epoch} requested ({duration_ms} ms)");
        self.pending_fade.set(Some(epoch));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SurfaceConfig::load_from_path(path)?,
        None => SurfaceConfig::load()?,
    };

    let script = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script from {}", cli.script.display()))?;
    let events: Vec<ScriptEvent> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid pointer script in {}", cli.script.display()))?;

    let bounds = DisplayBounds::new(0.0, 0.0, config.width as f64, config.height as f64);
    let pending_fade = Rc::new(Cell::new(None));
    let host = HeadlessHost {
        bounds,
        pending_fade: Rc::clone(&pending_fade),
    };

    let surface = Rc::new(RefCell::new(InkSurface::new(config)?));
    surface.borrow_mut().subscribe(Box::new(|event| {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(err) => log::error!("Failed to encode stroke signal: {err}"),
        }
    }));

    let pointers = PointerBroadcaster::new();
    InkSurface::mount(&surface, Box::new(host), &pointers);

    log::info!("Replaying {} pointer events", events.len());
    for event in &events {
        match event {
            ScriptEvent::Down { x, y } => surface
                .borrow_mut()
                .handle_pointer(&PointerEvent::new(PointerEventKind::Down, *x, *y)),
            ScriptEvent::Move { x, y } => surface
                .borrow_mut()
                .handle_pointer(&PointerEvent::new(PointerEventKind::Move, *x, *y)),
            // Releases travel through the process-wide broadcaster, the
            // same path a real shell uses.
            ScriptEvent::Up => {
                pointers.dispatch(&PointerEvent::new(PointerEventKind::Up, 0.0, 0.0))
            }
            ScriptEvent::Cancel => surface
                .borrow_mut()
                .handle_pointer(&PointerEvent::new(PointerEventKind::Cancel, 0.0, 0.0)),
            ScriptEvent::Leave => surface
                .borrow_mut()
                .handle_pointer(&PointerEvent::new(PointerEventKind::Leave, 0.0, 0.0)),
        }
    }

    if let Some(out) = &cli.out {
        surface
            .borrow_mut()
            .export_png(out)
            .with_context(|| format!("Failed to export bitmap to {}", out.display()))?;
        log::info!("Bitmap written to {}", out.display());
    }

    // Settle a still-pending fade so the run ends with the surface reset.
    if let Some(epoch) = pending_fade.get() {
        surface.borrow_mut().on_transition_end(TransitionEnd {
            property: TransitionProperty::Opacity,
            epoch,
        });
    }

    surface.borrow_mut().unmount();
    Ok(())
}
