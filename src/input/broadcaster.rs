//! Process-wide pointer event fan-out with scoped subscriptions.
//!
//! A stroke must terminate even when the pointer is released outside the
//! surface's bounds, so release events are observed at the level of the
//! whole input source rather than the element. Each mounted surface holds
//! a [`PointerSubscription`] guard; dropping the guard releases the
//! registration, so a torn-down instance can never be called back.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::events::PointerEvent;

/// Callback invoked for every broadcast pointer event.
pub type PointerHandler = Box<dyn FnMut(&PointerEvent)>;

struct Slot {
    alive: Rc<Cell<bool>>,
    handler: Rc<RefCell<PointerHandler>>,
}

/// Fans pointer events out to every live subscriber.
///
/// Single-threaded; events are dispatched synchronously in subscription
/// order. A subscription dropped during a dispatch stops receiving events
/// once the current dispatch finishes, and its slot is compacted away on
/// the next one.
#[derive(Default)]
pub struct PointerBroadcaster {
    slots: RefCell<Vec<Slot>>,
}

impl PointerBroadcaster {
    /// Creates a broadcaster with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler and returns the guard that keeps it alive.
    pub fn subscribe(&self, handler: PointerHandler) -> PointerSubscription {
        let alive = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(Slot {
            alive: Rc::clone(&alive),
            handler: Rc::new(RefCell::new(handler)),
        });
        PointerSubscription { alive }
    }

    /// Delivers an event to every live subscriber.
    pub fn dispatch(&self, event: &PointerEvent) {
        self.slots.borrow_mut().retain(|slot| slot.alive.get());

        // Handlers may subscribe or unsubscribe while running, so they are
        // called on a snapshot with the registry borrow released.
        let snapshot: Vec<(Rc<Cell<bool>>, Rc<RefCell<PointerHandler>>)> = self
            .slots
            .borrow()
            .iter()
            .map(|slot| (Rc::clone(&slot.alive), Rc::clone(&slot.handler)))
            .collect();

        for (alive, handler) in snapshot {
            if alive.get() {
                (handler.borrow_mut())(event);
            }
        }
    }

    /// Number of currently live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|slot| slot.alive.get())
            .count()
    }
}

/// Guard tying a broadcaster registration to an owner's lifetime.
///
/// Dropping the guard releases the registration.
pub struct PointerSubscription {
    alive: Rc<Cell<bool>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::PointerEventKind;
    use std::rc::Rc;

    #[test]
    fn dispatch_reaches_live_subscribers() {
        let broadcaster = PointerBroadcaster::new();
        let seen = Rc::new(Cell::new(0u32));

        let seen_clone = Rc::clone(&seen);
        let _subscription = broadcaster.subscribe(Box::new(move |_event| {
            seen_clone.set(seen_clone.get() + 1);
        }));

        broadcaster.dispatch(&PointerEvent::new(PointerEventKind::Up, 1.0, 1.0));
        broadcaster.dispatch(&PointerEvent::new(PointerEventKind::Up, 2.0, 2.0));

        assert_eq!(seen.get(), 2);
        assert_eq!(broadcaster.listener_count(), 1);
    }

    #[test]
    fn dropping_the_guard_releases_the_registration() {
        let broadcaster = PointerBroadcaster::new();
        let seen = Rc::new(Cell::new(0u32));

        let seen_clone = Rc::clone(&seen);
        let subscription = broadcaster.subscribe(Box::new(move |_event| {
            seen_clone.set(seen_clone.get() + 1);
        }));

        drop(subscription);
        broadcaster.dispatch(&PointerEvent::new(PointerEventKind::Up, 1.0, 1.0));

        assert_eq!(seen.get(), 0);
        assert_eq!(broadcaster.listener_count(), 0);
    }

    #[test]
    fn unsubscribing_during_dispatch_is_safe() {
        let broadcaster = PointerBroadcaster::new();
        let guard: Rc<RefCell<Option<PointerSubscription>>> = Rc::new(RefCell::new(None));

        let guard_clone = Rc::clone(&guard);
        let subscription = broadcaster.subscribe(Box::new(move |_event| {
            // Drop our own guard mid-dispatch.
            guard_clone.borrow_mut().take();
        }));
        *guard.borrow_mut() = Some(subscription);

        broadcaster.dispatch(&PointerEvent::new(PointerEventKind::Up, 0.0, 0.0));
        assert_eq!(broadcaster.listener_count(), 0);
    }
}
