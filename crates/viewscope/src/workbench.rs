//! Part lifecycle seam to the host window system.
//!
//! The host owns windows, editors and panels; the engine only needs to hear
//! about part lifecycle changes and to ask one question ("is any editor
//! active right now?"). [`PartLifecycle`] is that seam. [`Workbench`] is an
//! in-memory host good enough for embedding in tools without a richer window
//! system, and for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::element::ModelId;
use crate::signal::Signal;
use crate::viewpoint::ViewpointId;

/// What a diagram-editing surface is bound to: the model it displays and
/// the viewpoint selected on it, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditingContext {
    /// The model the surface displays.
    pub model: ModelId,
    /// The viewpoint selected on the surface, `None` for unconstrained.
    pub viewpoint: Option<ViewpointId>,
}

/// Any open, user-facing part of the host UI.
pub trait Part: Send + Sync {
    /// This part as an editing surface, `None` for auxiliary panels.
    fn as_editor(&self) -> Option<&dyn EditorPart> {
        None
    }
}

/// An editing surface.
pub trait EditorPart {
    /// The diagram binding of this surface, `None` for non-diagram editors.
    fn diagram(&self) -> Option<EditingContext>;
}

/// Shared handle to a part.
pub type PartHandle = Arc<dyn Part>;

/// A part lifecycle notification.
#[derive(Clone)]
pub enum PartEvent {
    /// The part became the active part of the window.
    Activated(PartHandle),
    /// The part stopped being the active part.
    Deactivated(PartHandle),
    /// The part was raised above its siblings without activation.
    BroughtToTop(PartHandle),
    /// The part was opened.
    Opened(PartHandle),
    /// The part was closed.
    Closed(PartHandle),
}

/// The host's part lifecycle service.
pub trait PartLifecycle: Send + Sync {
    /// Lifecycle notifications, in UI-thread arrival order.
    fn part_events(&self) -> &Signal<PartEvent>;

    /// Whether any editor is currently active in the window.
    ///
    /// `None` means the host cannot answer (no active window, e.g. during
    /// shutdown); callers must skip rather than guess.
    fn any_editor_active(&self) -> Option<bool>;
}

/// An in-memory part lifecycle host.
///
/// Tracks open editors and the active editor the way a window system would,
/// and emits [`PartEvent`]s from its methods. State is updated before the
/// event fires, so listeners re-querying [`any_editor_active`] during
/// delivery see the post-event world.
///
/// [`any_editor_active`]: PartLifecycle::any_editor_active
#[derive(Default)]
pub struct Workbench {
    events: Signal<PartEvent>,
    open_editors: Mutex<Vec<PartHandle>>,
    active_editor: Mutex<Option<PartHandle>>,
    window_closed: AtomicBool,
}

impl Workbench {
    /// Create a workbench with no open parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a part, emitting [`PartEvent::Opened`].
    pub fn open(&self, part: PartHandle) {
        if part.as_editor().is_some() {
            self.open_editors.lock().push(part.clone());
        }
        self.events.emit(PartEvent::Opened(part));
    }

    /// Open a diagram editor bound to `model` and `viewpoint`.
    pub fn open_diagram(&self, model: ModelId, viewpoint: Option<ViewpointId>) -> PartHandle {
        let part: PartHandle = Arc::new(DiagramEditor::new(model, viewpoint));
        self.open(part.clone());
        part
    }

    /// Make a part the active part, emitting [`PartEvent::Activated`].
    ///
    /// Activating an auxiliary panel leaves the active editor unchanged,
    /// as window systems do.
    pub fn activate(&self, part: &PartHandle) {
        if part.as_editor().is_some() {
            *self.active_editor.lock() = Some(part.clone());
        }
        self.events.emit(PartEvent::Activated(part.clone()));
    }

    /// Emit [`PartEvent::Deactivated`] for a part.
    pub fn deactivate(&self, part: &PartHandle) {
        self.events.emit(PartEvent::Deactivated(part.clone()));
    }

    /// Emit [`PartEvent::BroughtToTop`] for a part.
    pub fn bring_to_top(&self, part: &PartHandle) {
        self.events.emit(PartEvent::BroughtToTop(part.clone()));
    }

    /// Close a part, emitting [`PartEvent::Closed`].
    ///
    /// Closing the active editor hands activation to the most recently
    /// opened editor still open, if any.
    pub fn close(&self, part: &PartHandle) {
        if part.as_editor().is_some() {
            let mut open = self.open_editors.lock();
            open.retain(|p| !Arc::ptr_eq(p, part));
            let mut active = self.active_editor.lock();
            if active.as_ref().is_some_and(|p| Arc::ptr_eq(p, part)) {
                *active = open.last().cloned();
            }
        }
        self.events.emit(PartEvent::Closed(part.clone()));
    }

    /// Simulate window teardown: [`any_editor_active`] answers `None` from
    /// now on.
    ///
    /// [`any_editor_active`]: PartLifecycle::any_editor_active
    pub fn close_window(&self) {
        self.window_closed.store(true, Ordering::SeqCst);
    }
}

impl PartLifecycle for Workbench {
    fn part_events(&self) -> &Signal<PartEvent> {
        &self.events
    }

    fn any_editor_active(&self) -> Option<bool> {
        if self.window_closed.load(Ordering::SeqCst) {
            return None;
        }
        Some(self.active_editor.lock().is_some())
    }
}

/// Reference editing surface bound to a diagram.
pub struct DiagramEditor {
    context: EditingContext,
}

impl DiagramEditor {
    /// Create a diagram editor showing `model` under `viewpoint`.
    pub fn new(model: ModelId, viewpoint: Option<ViewpointId>) -> Self {
        Self {
            context: EditingContext { model, viewpoint },
        }
    }
}

impl Part for DiagramEditor {
    fn as_editor(&self) -> Option<&dyn EditorPart> {
        Some(self)
    }
}

impl EditorPart for DiagramEditor {
    fn diagram(&self) -> Option<EditingContext> {
        Some(self.context)
    }
}

/// Reference editing surface with no diagram binding (e.g. a text editor).
#[derive(Default)]
pub struct PlainEditor;

impl PlainEditor {
    /// Create a plain editor.
    pub fn new() -> Self {
        Self
    }
}

impl Part for PlainEditor {
    fn as_editor(&self) -> Option<&dyn EditorPart> {
        Some(self)
    }
}

impl EditorPart for PlainEditor {
    fn diagram(&self) -> Option<EditingContext> {
        None
    }
}

/// Reference auxiliary panel (not an editing surface).
#[derive(Default)]
pub struct SidePanel;

impl SidePanel {
    /// Create a side panel.
    pub fn new() -> Self {
        Self
    }
}

impl Part for SidePanel {}

static_assertions::assert_impl_all!(Workbench: Send, Sync);
static_assertions::assert_impl_all!(PartEvent: Send, Sync);
