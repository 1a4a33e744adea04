//! Redraw requests toward the browser.
//!
//! Whenever tracked state changes in a way that can invalidate previously
//! computed highlight decisions, the engine asks the browser to re-render
//! through this relay. Requests carry no payload and are safe to send
//! redundantly; the browser recomputes decisions row by row during its next
//! render pass.

use crate::signal::{ConnectionGuard, Signal};

/// Fan-out point for "recompute and redraw" requests.
#[derive(Default)]
pub struct RefreshRelay {
    refresh: Signal<()>,
}

impl RefreshRelay {
    /// Create a relay with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask subscribers to recompute and redraw.
    ///
    /// Idempotent: with no subscribers, or called twice for the same state
    /// change, nothing goes wrong beyond a spare redraw.
    pub fn request_refresh(&self) {
        tracing::trace!(target: "viewscope::refresh", "refresh requested");
        self.refresh.emit(());
    }

    /// Run `handler` on every refresh request, until the guard drops.
    pub fn on_refresh<F>(&self, handler: F) -> ConnectionGuard<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.refresh.connect_scoped(move |()| handler())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn delivers_to_all_subscribers() {
        let relay = RefreshRelay::new();
        let count = Arc::new(AtomicUsize::new(0));

        let a = count.clone();
        let _ga = relay.on_refresh(move || {
            a.fetch_add(1, Ordering::SeqCst);
        });
        let b = count.clone();
        let _gb = relay.on_refresh(move || {
            b.fetch_add(1, Ordering::SeqCst);
        });

        relay.request_refresh();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn request_without_subscribers_is_fine() {
        let relay = RefreshRelay::new();
        relay.request_refresh();
        relay.request_refresh();
    }
}
