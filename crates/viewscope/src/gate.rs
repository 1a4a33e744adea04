//! The enable/disable gate over viewpoint filtering.
//!
//! Wraps the host's [`ConfigStore`] and narrows it to the one flag the
//! engine cares about. Reads are never cached: `is_enabled` asks the store
//! each time, so the engine always sees the live preference value.

use std::sync::Arc;

use crate::settings::{ConfigStore, keys};
use crate::signal::ConnectionGuard;

/// Read and watch the viewpoint-filtering flag.
#[derive(Clone)]
pub struct FilterGate {
    store: Arc<dyn ConfigStore>,
}

impl FilterGate {
    /// Create a gate over the given store.
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Whether viewpoint filtering is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.store.get_bool(keys::FILTER_MODEL_TREE)
    }

    /// Invoke `handler` whenever the filtering flag changes.
    ///
    /// Changes to other preference keys are filtered out. The subscription
    /// lives until the returned guard is dropped.
    pub fn on_change<F>(&self, handler: F) -> ConnectionGuard<String>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.store.changed().connect_scoped(move |key: &String| {
            if key == keys::FILTER_MODEL_TREE {
                handler();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettings;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn reads_live_value() {
        let settings = Arc::new(MemorySettings::new());
        let gate = FilterGate::new(settings.clone());

        assert!(!gate.is_enabled());
        settings.set_bool(keys::FILTER_MODEL_TREE, true);
        assert!(gate.is_enabled());
        settings.set_bool(keys::FILTER_MODEL_TREE, false);
        assert!(!gate.is_enabled());
    }

    #[test]
    fn change_handler_ignores_other_keys() {
        let settings = Arc::new(MemorySettings::new());
        let gate = FilterGate::new(settings.clone());
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        let _guard = gate.on_change(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        settings.set_bool("unrelated.key", true);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        settings.set_bool(keys::FILTER_MODEL_TREE, true);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_guard_unsubscribes() {
        let settings = Arc::new(MemorySettings::new());
        let gate = FilterGate::new(settings.clone());
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        let guard = gate.on_change(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });
        drop(guard);

        settings.set_bool(keys::FILTER_MODEL_TREE, true);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
