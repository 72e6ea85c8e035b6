use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ghostline::config::SurfaceConfig;
use ghostline::input::{DisplayBounds, PointerBroadcaster, PointerEvent, PointerEventKind};
use ghostline::surface::{
    InkSurface, StrokeSignal, SurfaceHost, SurfacePhase, TransitionEnd, TransitionProperty,
};

/// Minimal shell: fixed display box, remembers the most recent fade
/// request so tests can deliver its completion.
struct TestHost {
    bounds: Rc<Cell<DisplayBounds>>,
    pending_fade: Rc<Cell<Option<u64>>>,
}

impl SurfaceHost for TestHost {
    fn display_bounds(&self) -> DisplayBounds {
        self.bounds.get()
    }

    fn pixel_density(&self) -> f64 {
        2.0
    }

    fn set_opacity(&mut self, _opacity: f64) {
        self.pending_fade.set(None);
    }

    fn fade_to_transparent(&mut self, _duration_ms: f64, epoch: u64) {
        self.pending_fade.set(Some(epoch));
    }
}

struct Rig {
    surface: Rc<RefCell<InkSurface>>,
    pointers: PointerBroadcaster,
    bounds: Rc<Cell<DisplayBounds>>,
    pending_fade: Rc<Cell<Option<u64>>>,
    signals: Rc<RefCell<Vec<StrokeSignal>>>,
}

fn mount(config: SurfaceConfig) -> Rig {
    let bounds = Rc::new(Cell::new(DisplayBounds::new(0.0, 0.0, 640.0, 400.0)));
    let pending_fade = Rc::new(Cell::new(None));
    let signals = Rc::new(RefCell::new(Vec::new()));

    let surface = Rc::new(RefCell::new(InkSurface::new(config).expect("valid config")));
    {
        let signals = Rc::clone(&signals);
        surface
            .borrow_mut()
            .subscribe(Box::new(move |event| signals.borrow_mut().push(event.signal)));
    }

    let host = TestHost {
        bounds: Rc::clone(&bounds),
        pending_fade: Rc::clone(&pending_fade),
    };
    let pointers = PointerBroadcaster::new();
    InkSurface::mount(&surface, Box::new(host), &pointers);

    Rig {
        surface,
        pointers,
        bounds,
        pending_fade,
        signals,
    }
}

fn draw_stroke(rig: &Rig) {
    let mut surface = rig.surface.borrow_mut();
    surface.handle_pointer(&PointerEvent::new(PointerEventKind::Down, 20.0, 20.0));
    surface.handle_pointer(&PointerEvent::new(PointerEventKind::Move, 120.0, 80.0));
    surface.handle_pointer(&PointerEvent::new(PointerEventKind::Move, 240.0, 160.0));
    drop(surface);
    rig.pointers
        .dispatch(&PointerEvent::new(PointerEventKind::Up, 0.0, 0.0));
}

fn settle_fade(rig: &Rig) {
    let epoch = rig.pending_fade.get().expect("a fade is pending");
    rig.surface.borrow_mut().on_transition_end(TransitionEnd {
        property: TransitionProperty::Opacity,
        epoch,
    });
}

#[test]
fn surface_cycles_through_many_strokes() {
    let rig = mount(SurfaceConfig::default());

    for _ in 0..3 {
        draw_stroke(&rig);
        assert!(rig.surface.borrow_mut().has_visible_ink());
        assert!(matches!(
            rig.surface.borrow().phase(),
            SurfacePhase::Fading { .. }
        ));

        settle_fade(&rig);
        assert!(!rig.surface.borrow_mut().has_visible_ink());
        assert_eq!(rig.surface.borrow().phase(), SurfacePhase::Idle);
    }

    let signals = rig.signals.borrow();
    let cycle = [
        StrokeSignal::StrokeStarted,
        StrokeSignal::StrokeExtended,
        StrokeSignal::StrokeExtended,
        StrokeSignal::StrokeEnded,
    ];
    assert_eq!(signals.len(), cycle.len() * 3);
    for (i, signal) in signals.iter().enumerate() {
        assert_eq!(*signal, cycle[i % cycle.len()]);
    }
}

#[test]
fn restroke_during_fade_keeps_new_ink_through_stale_completion() {
    let rig = mount(SurfaceConfig::default());

    draw_stroke(&rig);
    let old_epoch = rig.pending_fade.get().expect("first fade pending");

    // New stroke lands while the fade is still running.
    rig.surface
        .borrow_mut()
        .handle_pointer(&PointerEvent::new(PointerEventKind::Down, 300.0, 300.0));
    rig.surface
        .borrow_mut()
        .handle_pointer(&PointerEvent::new(PointerEventKind::Move, 400.0, 350.0));
    assert_eq!(rig.surface.borrow().phase(), SurfacePhase::Drawing);
    assert_eq!(
        rig.pending_fade.get(),
        None,
        "the snap to opaque dropped the old fade on the host side"
    );

    // The superseded fade's completion still trickles in.
    rig.surface.borrow_mut().on_transition_end(TransitionEnd {
        property: TransitionProperty::Opacity,
        epoch: old_epoch,
    });
    assert!(rig.surface.borrow_mut().has_visible_ink());
    assert_eq!(rig.surface.borrow().phase(), SurfacePhase::Drawing);

    // Finishing the new stroke fades and clears normally.
    rig.pointers
        .dispatch(&PointerEvent::new(PointerEventKind::Up, 0.0, 0.0));
    settle_fade(&rig);
    assert!(!rig.surface.borrow_mut().has_visible_ink());
}

#[test]
fn disabled_fade_never_needs_a_transition_signal() {
    let config = SurfaceConfig {
        fade_enabled: false,
        ..SurfaceConfig::default()
    };
    let rig = mount(config);

    draw_stroke(&rig);

    assert_eq!(rig.pending_fade.get(), None);
    assert_eq!(rig.surface.borrow().phase(), SurfacePhase::Idle);
    assert!(!rig.surface.borrow_mut().has_visible_ink());
    assert_eq!(
        rig.signals.borrow().last(),
        Some(&StrokeSignal::StrokeEnded)
    );
}

#[test]
fn responsive_bitmap_follows_displayed_size_times_density() {
    let config = SurfaceConfig {
        responsive: true,
        ..SurfaceConfig::default()
    };
    let rig = mount(config);

    // TestHost reports density 2.0, so the mount resize already doubled
    // the 640x400 display box.
    assert_eq!(rig.surface.borrow().bitmap_size(), Some((1280, 800)));

    rig.bounds.set(DisplayBounds::new(0.0, 0.0, 300.0, 150.0));
    rig.surface.borrow_mut().on_display_resized();
    assert_eq!(rig.surface.borrow().bitmap_size(), Some((600, 300)));

    // Resizing with no stroke active leaves the machine usable.
    draw_stroke(&rig);
    assert!(rig.surface.borrow_mut().has_visible_ink());
}

#[test]
fn unmounted_surface_goes_silent() {
    let rig = mount(SurfaceConfig::default());

    rig.surface
        .borrow_mut()
        .handle_pointer(&PointerEvent::new(PointerEventKind::Down, 20.0, 20.0));
    rig.surface.borrow_mut().unmount();
    assert_eq!(rig.pointers.listener_count(), 0);

    let seen = rig.signals.borrow().len();
    rig.surface
        .borrow_mut()
        .handle_pointer(&PointerEvent::new(PointerEventKind::Down, 30.0, 30.0));
    rig.pointers
        .dispatch(&PointerEvent::new(PointerEventKind::Up, 0.0, 0.0));
    assert_eq!(rig.signals.borrow().len(), seen);
}
