use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, Weak},
};

use super::tracker::Viewport;

type Listener = Arc<dyn Fn(Viewport) + Send + Sync>;

#[derive(Default)]
struct HubState {
    viewport: Viewport,
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Single owner of page scroll state. The page binds one scroll and one resize handler
/// that publish into the hub; every tracked section subscribes here instead of adding its
/// own window listeners.
#[derive(Clone, Default)]
pub struct ScrollHub {
    state: Arc<Mutex<HubState>>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and immediately hands it the current viewport.
    /// The listener lives until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Viewport) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, viewport) = {
            let mut state = self.state.lock().expect("should be able to lock scroll hub");
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.insert(id, listener.clone());
            (id, state.viewport)
        };
        listener(viewport);
        Subscription {
            id,
            hub: Arc::downgrade(&self.state),
        }
    }

    /// Stores the latest viewport and fans it out. Earlier viewports that were never
    /// published are simply lost.
    pub fn publish(&self, viewport: Viewport) {
        // listeners run outside the lock so they may read the hub
        let listeners = {
            let mut state = self.state.lock().expect("should be able to lock scroll hub");
            state.viewport = viewport;
            state.listeners.values().cloned().collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(viewport);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.state
            .lock()
            .expect("should be able to lock scroll hub")
            .viewport
    }

    pub fn listener_count(&self) -> usize {
        self.state
            .lock()
            .expect("should be able to lock scroll hub")
            .listeners
            .len()
    }
}

/// Keeps a hub listener registered. Dropping it detaches the listener.
pub struct Subscription {
    id: u64,
    hub: Weak<Mutex<HubState>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.hub.upgrade() {
            if let Ok(mut state) = state.lock() {
                state.listeners.remove(&self.id);
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Coalesces bursts of scroll/resize events into at most one pending animation frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
    disposed: bool,
}

impl FrameGate {
    /// Returns true when the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending || self.disposed {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback. Returns false if the owner went away in between.
    pub fn take(&mut self) -> bool {
        let run = self.pending && !self.disposed;
        self.pending = false;
        run
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn vp(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: 600.0,
        }
    }

    #[test]
    fn test_subscribe_receives_current_and_later_viewports() {
        let hub = ScrollHub::new();
        hub.publish(vp(10.0));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            hub.subscribe(move |v| seen.lock().unwrap().push(v.scroll_y))
        };
        hub.publish(vp(20.0));
        hub.publish(vp(30.0));

        assert_eq!(*seen.lock().unwrap(), vec![10.0, 20.0, 30.0]);
        assert_eq!(hub.viewport(), vp(30.0));
    }

    #[test]
    fn test_dropping_subscriptions_leaves_no_listeners() {
        let hub = ScrollHub::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let subs = (0..5)
            .map(|_| {
                let calls = calls.clone();
                hub.subscribe(move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect::<Vec<_>>();
        assert_eq!(hub.listener_count(), 5);
        // initial delivery on subscribe
        assert_eq!(calls.load(Ordering::SeqCst), 5);

        drop(subs);
        assert_eq!(hub.listener_count(), 0);

        hub.publish(vp(100.0));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let hub = ScrollHub::new();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        // must not panic
        drop(sub);
    }

    #[test]
    fn test_listener_may_read_hub() {
        let hub = ScrollHub::new();
        let inner = hub.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let _sub = {
            let seen = seen.clone();
            hub.subscribe(move |_| {
                seen.store(inner.listener_count(), Ordering::SeqCst);
            })
        };
        hub.publish(vp(1.0));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        assert!(gate.take());
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_frame_gate_after_dispose() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        gate.dispose();
        // late frame callback is a no-op
        assert!(!gate.take());
        assert!(!gate.request());
    }
}
