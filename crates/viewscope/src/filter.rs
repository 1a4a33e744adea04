//! The assembled highlight engine.
//!
//! [`ViewpointFilter`] wires the parts of this crate to the three host
//! services — part lifecycle, configuration store, viewpoint registry — and
//! exposes the browser-facing surface: per-row [`query`], the
//! [`is_enabled`] fast path, the refresh subscription, and teardown.
//!
//! [`query`]: ViewpointFilter::query
//! [`is_enabled`]: ViewpointFilter::is_enabled

use std::sync::Arc;

use parking_lot::Mutex;

use crate::element::TreeEntry;
use crate::evaluate::{Highlight, evaluate};
use crate::gate::FilterGate;
use crate::refresh::RefreshRelay;
use crate::settings::ConfigStore;
use crate::signal::ConnectionGuard;
use crate::tracker::ContextTracker;
use crate::viewpoint::ViewpointRegistry;
use crate::workbench::{EditingContext, PartEvent, PartLifecycle};

/// The subscriptions taken out on host services, released as one unit.
struct Subscriptions {
    _parts: ConnectionGuard<PartEvent>,
    _config: ConnectionGuard<String>,
}

/// Viewpoint-aware highlight engine for one model tree browser.
///
/// Construction subscribes to the host's part lifecycle and configuration
/// store; [`dispose`](Self::dispose) (or drop) releases both exactly once.
/// Between the two, the engine follows editor activations and the filtering
/// preference, asks the browser to redraw when visible output may have
/// changed, and answers per-row highlight queries during rendering.
pub struct ViewpointFilter {
    tracker: Arc<ContextTracker>,
    gate: FilterGate,
    registry: Arc<dyn ViewpointRegistry>,
    relay: Arc<RefreshRelay>,
    subscriptions: Mutex<Option<Subscriptions>>,
}

impl ViewpointFilter {
    /// Create an engine wired to the given host services.
    pub fn new(
        host: Arc<dyn PartLifecycle>,
        store: Arc<dyn ConfigStore>,
        registry: Arc<dyn ViewpointRegistry>,
    ) -> Self {
        let gate = FilterGate::new(store);
        let relay = Arc::new(RefreshRelay::new());
        let tracker = Arc::new(ContextTracker::new(
            host.clone(),
            gate.clone(),
            relay.clone(),
        ));

        let parts = {
            let tracker = tracker.clone();
            host.part_events()
                .connect_scoped(move |event| tracker.handle(event))
        };
        // A flag flip always invalidates every visible decision.
        let config = {
            let relay = relay.clone();
            gate.on_change(move || relay.request_refresh())
        };

        Self {
            tracker,
            gate,
            registry,
            relay,
            subscriptions: Mutex::new(Some(Subscriptions {
                _parts: parts,
                _config: config,
            })),
        }
    }

    /// Highlight decision for one browser row.
    ///
    /// Total over its input; see [`evaluate`] for the decision procedure.
    pub fn query(&self, entry: &dyn TreeEntry) -> Highlight {
        evaluate(
            entry,
            self.tracker.current(),
            self.gate.is_enabled(),
            &*self.registry,
        )
    }

    /// Whether viewpoint filtering is enabled.
    ///
    /// Browsers may use this to skip per-row queries entirely; with it
    /// `false`, every query answers [`Highlight::Normal`].
    pub fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Run `handler` whenever previously computed decisions become stale
    /// and the browser should re-render.
    pub fn on_refresh<F>(&self, handler: F) -> ConnectionGuard<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.relay.on_refresh(handler)
    }

    /// The tracked editing context, or `None`.
    pub fn current_context(&self) -> Option<EditingContext> {
        self.tracker.current()
    }

    /// Release the lifecycle and configuration subscriptions.
    ///
    /// Idempotent; also runs on drop. After disposal the engine stops
    /// following host state, but `query` stays callable and keeps answering
    /// from the last tracked state.
    pub fn dispose(&self) {
        if self.subscriptions.lock().take().is_some() {
            tracing::debug!(target: "viewscope::filter", "subscriptions released");
        }
    }
}

impl Drop for ViewpointFilter {
    fn drop(&mut self) {
        self.dispose();
    }
}

static_assertions::assert_impl_all!(ViewpointFilter: Send, Sync);
