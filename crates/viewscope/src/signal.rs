//! Signal/slot change notification.
//!
//! All change notification in this crate (configuration changes, part
//! lifecycle events, refresh requests) flows through [`Signal`]. Slots are
//! invoked directly on the emitting thread: the engine runs on the host's
//! single UI thread, so there is no queued or cross-thread delivery.
//!
//! # Example
//!
//! ```
//! use viewscope::signal::Signal;
//!
//! let changed = Signal::<String>::new();
//! let id = changed.connect(|key| println!("changed: {key}"));
//! changed.emit("viewpoints.filter-model-tree".to_string());
//! changed.disconnect(id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`]; pass it to [`Signal::disconnect`] to
    /// remove that connection. The ID remains valid until disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type ConnectionTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A signal with any number of connected slots.
///
/// Emitting the signal invokes every connected slot with a reference to the
/// emitted arguments, in connection order. Use `()` for signals that carry
/// no payload.
pub struct Signal<Args> {
    connections: Arc<ConnectionTable<Args>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(SlotMap::with_key())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] for later manual disconnection. Prefer
    /// [`connect_scoped`](Self::connect_scoped) when the connection should
    /// live exactly as long as the receiver.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot with automatic disconnection when the returned guard
    /// is dropped.
    ///
    /// The guard holds only a weak reference to this signal's connection
    /// table, so dropping it after the signal itself has gone away is fine.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            table: Arc::downgrade(&self.connections),
            id: self.connect(slot),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Number of currently connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block or unblock signal emission.
    ///
    /// While blocked, [`emit`](Self::emit) does nothing. Useful during batch
    /// updates to suppress cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// Slots run without the connection table lock held, so a slot may
    /// freely connect or disconnect while the emission is in progress;
    /// such changes take effect from the next emission.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "viewscope::signal", "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: "viewscope::signal", connections = slots.len(), "emitting signal");
        for slot in &slots {
            slot(&args);
        }
    }
}

/// A connection that disconnects itself when dropped.
///
/// Created via [`Signal::connect_scoped`]. The engine stores these for every
/// subscription it takes out on host services, which gives the deterministic
/// release-exactly-once teardown the synchronization logic requires.
pub struct ConnectionGuard<Args> {
    table: Weak<ConnectionTable<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// Disconnect now instead of waiting for drop.
    ///
    /// Returns `true` if the connection was still live.
    pub fn disconnect(self) -> bool {
        match self.table.upgrade() {
            Some(table) => table.lock().remove(self.id).is_some(),
            None => false,
        }
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.lock().remove(self.id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
static_assertions::assert_impl_all!(ConnectionGuard<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn disconnect_stops_delivery() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn blocked_emission_is_dropped() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn guard_disconnects_on_drop() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        {
            let received_clone = received.clone();
            let _guard = signal.connect_scoped(move |&value| {
                received_clone.lock().push(value);
            });
            assert_eq!(signal.connection_count(), 1);
            signal.emit(1);
        }

        assert_eq!(signal.connection_count(), 0);
        signal.emit(2);
        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn guard_outliving_signal_is_harmless() {
        let signal = Signal::<()>::new();
        let guard = signal.connect_scoped(|_| {});
        drop(signal);
        assert!(!guard.disconnect());
    }

    #[test]
    fn slot_may_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let handle = Arc::new(Mutex::new(None::<ConnectionId>));

        let signal_clone = signal.clone();
        let handle_clone = handle.clone();
        let id = signal.connect(move |_| {
            if let Some(id) = handle_clone.lock().take() {
                signal_clone.disconnect(id);
            }
        });
        *handle.lock() = Some(id);

        signal.emit(());
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn multiple_connections_all_fire() {
        let signal = Signal::<()>::new();
        let count = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let count_clone = count.clone();
            signal.connect(move |_| {
                *count_clone.lock() += 1;
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit(());
        assert_eq!(*count.lock(), 3);
    }
}
