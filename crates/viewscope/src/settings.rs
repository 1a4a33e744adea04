//! Configuration store seam.
//!
//! The host owns preference persistence; the engine only reads one boolean
//! flag and subscribes to its changes. [`MemorySettings`] is an in-memory
//! store for hosts without their own preference system and for tests.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::signal::Signal;

/// Preference keys recognized by the engine.
pub mod keys {
    /// Whether the model tree de-emphasizes elements disallowed by the
    /// active viewpoint.
    pub const FILTER_MODEL_TREE: &str = "viewpoints.filter-model-tree";
}

/// A key-value preference store with change notification.
///
/// `get_bool` reads the live value; an absent key reads as `false`. The
/// `changed` signal carries the key that changed.
pub trait ConfigStore: Send + Sync {
    /// Current value of a boolean preference, `false` if unset.
    fn get_bool(&self, key: &str) -> bool;

    /// Change notification, emitting the changed key.
    fn changed(&self) -> &Signal<String>;
}

/// An in-memory [`ConfigStore`].
///
/// Setting a key to the value it already holds is a no-op and emits nothing.
#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, bool>>,
    changed: Signal<String>,
}

impl MemorySettings {
    /// Create an empty store; every key reads as `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean preference, notifying subscribers if the value changed.
    pub fn set_bool(&self, key: &str, value: bool) {
        {
            let mut values = self.values.write();
            if values.get(key).copied().unwrap_or(false) == value {
                return;
            }
            values.insert(key.to_string(), value);
        }
        tracing::debug!(target: "viewscope::settings", key, value, "preference changed");
        self.changed.emit(key.to_string());
    }
}

impl ConfigStore for MemorySettings {
    fn get_bool(&self, key: &str) -> bool {
        self.values.read().get(key).copied().unwrap_or(false)
    }

    fn changed(&self) -> &Signal<String> {
        &self.changed
    }
}

static_assertions::assert_impl_all!(MemorySettings: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn absent_key_reads_false() {
        let settings = MemorySettings::new();
        assert!(!settings.get_bool(keys::FILTER_MODEL_TREE));
    }

    #[test]
    fn set_notifies_with_key() {
        let settings = MemorySettings::new();
        let seen = Arc::new(RwLock::new(Vec::new()));

        let seen_clone = seen.clone();
        settings.changed().connect(move |key: &String| {
            seen_clone.write().push(key.clone());
        });

        settings.set_bool(keys::FILTER_MODEL_TREE, true);
        assert!(settings.get_bool(keys::FILTER_MODEL_TREE));
        assert_eq!(*seen.read(), vec![keys::FILTER_MODEL_TREE.to_string()]);
    }

    #[test]
    fn redundant_set_is_silent() {
        let settings = MemorySettings::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        settings.changed().connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        settings.set_bool("a", true);
        settings.set_bool("a", true);
        settings.set_bool("a", false);
        settings.set_bool("b", false);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
