//! Tracking of the active editing context.
//!
//! At most one editing context is active at any instant. This module owns
//! that single slot and mutates it through exactly two transitions, driven
//! by part lifecycle events; nothing else in the crate writes it.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::gate::FilterGate;
use crate::refresh::RefreshRelay;
use crate::workbench::{EditingContext, PartEvent, PartLifecycle};

/// Maintains the currently active editing context, if any.
pub struct ContextTracker {
    /// The single active-context slot. Written only by [`handle`].
    ///
    /// [`handle`]: ContextTracker::handle
    current: Mutex<Option<EditingContext>>,
    host: Arc<dyn PartLifecycle>,
    gate: FilterGate,
    relay: Arc<RefreshRelay>,
}

impl ContextTracker {
    /// Create a tracker with no active context.
    pub fn new(host: Arc<dyn PartLifecycle>, gate: FilterGate, relay: Arc<RefreshRelay>) -> Self {
        Self {
            current: Mutex::new(None),
            host,
            gate,
            relay,
        }
    }

    /// The active editing context, or `None`.
    pub fn current(&self) -> Option<EditingContext> {
        *self.current.lock()
    }

    /// Apply one part lifecycle notification.
    ///
    /// Activation of an editing surface sets or clears the context
    /// depending on whether the surface is diagram-bound; activation of an
    /// auxiliary panel is ignored. Closing an editing surface clears the
    /// context once the host reports no editor active anywhere in the
    /// window — deliberately without checking that the closed surface was
    /// the tracked one.
    ///
    /// A refresh is requested after either transition while filtering is
    /// enabled; while disabled every decision is `Normal` anyway, so the
    /// redraw is skipped.
    pub fn handle(&self, event: &PartEvent) {
        match event {
            PartEvent::Activated(part) => {
                let Some(editor) = part.as_editor() else {
                    return;
                };
                let next = editor.diagram();
                tracing::debug!(
                    target: "viewscope::tracker",
                    context = ?next,
                    "editor activated"
                );
                *self.current.lock() = next;
                if self.gate.is_enabled() {
                    self.relay.request_refresh();
                }
            }
            PartEvent::Closed(part) => {
                if part.as_editor().is_none() {
                    return;
                }
                // None: no window to ask, keep the last known state.
                if self.host.any_editor_active() == Some(false) {
                    tracing::debug!(
                        target: "viewscope::tracker",
                        "last editor closed, clearing context"
                    );
                    *self.current.lock() = None;
                    if self.gate.is_enabled() {
                        self.relay.request_refresh();
                    }
                }
            }
            PartEvent::BroughtToTop(_) | PartEvent::Deactivated(_) | PartEvent::Opened(_) => {}
        }
    }
}
