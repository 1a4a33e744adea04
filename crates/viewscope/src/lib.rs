//! Viewpoint-aware highlighting for model tree browsers.
//!
//! A modeling tool shows every element of every open model in one tree,
//! while each open diagram may be restricted to a *viewpoint* — a named
//! allow-list of element and relationship types. This crate keeps the tree
//! in sync with that: it follows which editing surface is active, watches
//! the global "filter the model tree" preference, and answers, per displayed
//! row, whether the row should be visually de-emphasized because its element
//! is disallowed under the active diagram's viewpoint.
//!
//! The crate contains only the synchronization logic. The tree widget, the
//! viewpoint registry, the preference store and the window system stay with
//! the host and are reached through narrow traits ([`PartLifecycle`],
//! [`ConfigStore`], [`ViewpointRegistry`]); in-memory implementations of
//! each ship alongside the traits for hosts that need nothing richer.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use viewscope::{
//!     Element, ElementType, Highlight, MemorySettings, ModelId, StaticRegistry,
//!     TypeSetViewpoint, ViewpointFilter, ViewpointId, Workbench, keys,
//! };
//!
//! let workbench = Arc::new(Workbench::new());
//! let settings = Arc::new(MemorySettings::new());
//!
//! let business = ViewpointId(1);
//! let mut registry = StaticRegistry::new();
//! registry.insert(
//!     business,
//!     TypeSetViewpoint::new("Business", [ElementType::new("BusinessActor")]),
//! );
//!
//! let filter = ViewpointFilter::new(workbench.clone(), settings.clone(), Arc::new(registry));
//! let _redraw = filter.on_refresh(|| {
//!     // viewer.refresh()
//! });
//!
//! settings.set_bool(keys::FILTER_MODEL_TREE, true);
//!
//! let model = ModelId(1);
//! let diagram = workbench.open_diagram(model, Some(business));
//! workbench.activate(&diagram);
//!
//! let actor = Element::new(ElementType::new("BusinessActor"), model);
//! let node = Element::new(ElementType::new("Node"), model);
//! assert_eq!(filter.query(&actor), Highlight::Normal);
//! assert_eq!(filter.query(&node), Highlight::Disallowed);
//! ```
//!
//! # Threading
//!
//! Everything here is built for the host's single UI thread: lifecycle
//! events, preference changes and render-time queries arrive in order on
//! one logical thread, and no call blocks. The shared types are
//! nevertheless `Send + Sync`, so an `Arc<ViewpointFilter>` can be handed
//! around freely.
//!
//! # Logging
//!
//! Instrumented with the `tracing` crate under `viewscope::*` targets;
//! install a subscriber (e.g. `tracing_subscriber::fmt::init()`) to see
//! state transitions at debug level and per-emission detail at trace level.

mod element;
mod evaluate;
mod filter;
mod gate;
mod refresh;
mod settings;
pub mod signal;
mod tracker;
mod viewpoint;
mod workbench;

pub use element::{Element, ElementType, ModelElement, ModelId, Relationship, TreeEntry};
pub use evaluate::{Highlight, evaluate};
pub use filter::ViewpointFilter;
pub use gate::FilterGate;
pub use refresh::RefreshRelay;
pub use settings::{ConfigStore, MemorySettings, keys};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use tracker::ContextTracker;
pub use viewpoint::{StaticRegistry, TypeSetViewpoint, Viewpoint, ViewpointId, ViewpointRegistry};
pub use workbench::{
    DiagramEditor, EditingContext, EditorPart, Part, PartEvent, PartHandle, PartLifecycle,
    PlainEditor, SidePanel, Workbench,
};
