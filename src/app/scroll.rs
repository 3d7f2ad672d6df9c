use leptos::{html, prelude::*};

use crate::motion::{
    ElementMetrics, OffsetPair, ProgressDomain, ScrollHub, ScrollProgress, ScrollTracker, Viewport,
};

#[cfg(feature = "hydrate")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "hydrate")]
use crate::motion::FrameGate;
#[cfg(feature = "hydrate")]
use leptos::ev::{resize, scroll};
#[cfg(feature = "hydrate")]
use leptos_use::{use_event_listener, use_window};

/// Creates the page-wide [`ScrollHub`] and makes it available to every section below.
/// In the browser this is the only place window scroll/resize listeners are bound.
pub fn provide_scroll_hub() -> ScrollHub {
    let hub = ScrollHub::new();
    provide_context(hub.clone());
    #[cfg(feature = "hydrate")]
    bind_window(hub.clone());
    hub
}

pub fn use_scroll_hub() -> ScrollHub {
    use_context::<ScrollHub>().unwrap_or_else(provide_scroll_hub)
}

#[cfg(feature = "hydrate")]
fn read_viewport() -> Viewport {
    let window = window();
    Viewport {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        height: window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
    }
}

#[cfg(feature = "hydrate")]
fn bind_window(hub: ScrollHub) {
    let gate = Arc::new(Mutex::new(FrameGate::default()));
    let pending = StoredValue::new_local(None::<AnimationFrameRequestHandle>);

    let schedule = {
        let gate = gate.clone();
        let hub = hub.clone();
        move || {
            if !gate.lock().map(|mut g| g.request()).unwrap_or(false) {
                return;
            }
            let gate = gate.clone();
            let hub = hub.clone();
            let handle = request_animation_frame_with_handle(move || {
                // only the latest viewport matters, read it now rather than at event time
                if gate.lock().map(|mut g| g.take()).unwrap_or(false) {
                    hub.publish(read_viewport());
                }
            });
            pending.set_value(handle.ok());
        }
    };

    let stop_scroll = use_event_listener(use_window(), scroll, {
        let schedule = schedule.clone();
        move |_| schedule()
    });
    let stop_resize = use_event_listener(use_window(), resize, move |_| schedule());

    on_cleanup(move || {
        if let Ok(mut g) = gate.lock() {
            g.dispose();
        }
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.cancel();
        }
        stop_scroll();
        stop_resize();
    });

    hub.publish(read_viewport());
}

/// Live progress of `target` through the viewport.
///
/// The subscription to the hub is released when the calling component is cleaned up, and
/// updates arriving after that are dropped.
pub fn use_scroll_progress(
    target: NodeRef<html::Section>,
    offsets: OffsetPair,
    domain: ProgressDomain,
) -> ReadSignal<ScrollProgress> {
    let hub = use_scroll_hub();
    let (progress, set_progress) = signal(ScrollProgress::ZERO);
    let tracker = StoredValue::new(ScrollTracker::new(offsets, domain));

    let measure = move |viewport: Viewport| {
        let metrics = target.try_get_untracked().flatten().map(|el| {
            let rect = el.get_bounding_client_rect();
            ElementMetrics::from_client_rect(rect.top(), rect.height(), viewport)
        });
        let next = tracker.try_update_value(|t| {
            match metrics {
                Some(m) => t.mount(m),
                None => t.unmount(),
            }
            t.set_viewport(viewport);
            t.progress()
        });
        if let Some(next) = next {
            if progress.try_get_untracked() != Some(next) {
                _ = set_progress.try_set(next);
            }
        }
    };

    let subscription = hub.subscribe(measure);
    // the element is only in the DOM once this runs
    Effect::new(move |_| measure(hub.viewport()));
    on_cleanup(move || drop(subscription));

    progress
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn track() -> ReadSignal<ScrollProgress> {
        use_scroll_progress(NodeRef::new(), OffsetPair::default(), ProgressDomain::Clamped)
    }

    #[test]
    fn test_cleanup_releases_hub_listener() {
        let owner = Owner::new();
        let hub = owner.with(provide_scroll_hub);

        let section = owner.child();
        section.with(track);
        let other = owner.child();
        other.with(track);
        assert_eq!(hub.listener_count(), 2);

        section.cleanup();
        assert_eq!(hub.listener_count(), 1);
        other.cleanup();
        assert_eq!(hub.listener_count(), 0);

        // late publishes reach no one and don't panic on the disposed signal
        hub.publish(Viewport {
            scroll_y: 500.0,
            height: 800.0,
        });
    }

    #[test]
    fn test_unmeasured_section_reports_zero() {
        let owner = Owner::new();
        let hub = owner.with(provide_scroll_hub);
        let progress = owner.with(track);
        hub.publish(Viewport {
            scroll_y: 1200.0,
            height: 800.0,
        });
        assert_eq!(progress.get_untracked(), ScrollProgress::ZERO);
    }
}
