use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::Weak;

/// The events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    MouseMove { x: i32, y: i32 },
    CanPlay,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    MouseMove,
    CanPlay,
    Click,
}

impl DomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomEvent::MouseMove { .. } => EventKind::MouseMove,
            DomEvent::CanPlay => EventKind::CanPlay,
            DomEvent::Click => EventKind::Click,
        }
    }
}

type Handler = Arc<dyn Fn(&DomEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: BTreeMap<u64, (EventKind, Handler)>,
}

fn lock(listeners: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    // a panicking handler runs outside the lock, so the map itself is never
    // left half-written
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Something listeners can be attached to, e.g. the window or the hero video.
///
/// Cloning yields another handle to the same target.
#[derive(Clone, Default)]
pub struct EventTarget {
    listeners: Arc<Mutex<Listeners>>,
}

impl EventTarget {
    pub fn new() -> Self { Self::default() }

    /// Attach `handler` for events of `kind`. The listener stays attached for
    /// as long as the returned guard is alive.
    #[must_use = "dropping the guard immediately detaches the listener"]
    pub fn listen(
        &self,
        kind: EventKind,
        handler: impl Fn(&DomEvent) + Send + Sync + 'static,
    ) -> ListenerGuard {
        let mut listeners = lock(&self.listeners);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.handlers.insert(id, (kind, Arc::new(handler)));
        ListenerGuard {
            target: Arc::downgrade(&self.listeners),
            id,
        }
    }

    /// Invoke every live listener for `event`, in registration order. Returns
    /// the number of listeners invoked.
    pub fn dispatch(
        &self,
        event: DomEvent,
    ) -> usize {
        // handlers are called without holding the lock, so they may attach or
        // detach listeners themselves
        let matching: Vec<Handler> = lock(&self.listeners)
            .handlers
            .values()
            .filter(|(kind, _)| *kind == event.kind())
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in &matching {
            handler(&event);
        }
        matching.len()
    }

    pub fn listener_count(&self) -> usize { lock(&self.listeners).handlers.len() }
}

/// Detaches its listener when dropped.
pub struct ListenerGuard {
    target: Weak<Mutex<Listeners>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // the target may already be gone, in which case there is nothing to
        // detach from
        if let Some(listeners) = self.target.upgrade() {
            lock(&listeners).handlers.remove(&self.id);
        }
    }
}
