//! Viewpoints and the registry that resolves them.
//!
//! A viewpoint is a named allow-list of element and relationship types. The
//! registry that maps ids to viewpoints is owned by the host; the engine
//! re-resolves the active id through [`ViewpointRegistry::lookup`] on every
//! query, since registry contents may change independently of context
//! changes. [`TypeSetViewpoint`] and [`StaticRegistry`] are reference
//! implementations for hosts and tests.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::element::ElementType;

/// Identifier of a viewpoint, as stored on a diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewpointId(pub u32);

impl fmt::Display for ViewpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewpoint#{}", self.0)
    }
}

/// A named filter over element and relationship types.
pub trait Viewpoint: Send + Sync {
    /// Human-readable name of the viewpoint.
    fn name(&self) -> &str;

    /// Whether the given type is relevant under this viewpoint.
    fn is_allowed_type(&self, ty: ElementType) -> bool;
}

/// Resolves viewpoint ids to viewpoints.
///
/// Resolution may fail (unknown id); the engine treats that as "no
/// constraint", never as an error.
pub trait ViewpointRegistry: Send + Sync {
    /// Look up a viewpoint by id.
    fn lookup(&self, id: ViewpointId) -> Option<Arc<dyn Viewpoint>>;
}

/// A viewpoint defined by an explicit set of allowed types.
pub struct TypeSetViewpoint {
    name: String,
    allowed: HashSet<ElementType>,
}

impl TypeSetViewpoint {
    /// Create a viewpoint allowing exactly the given types.
    pub fn new(name: impl Into<String>, allowed: impl IntoIterator<Item = ElementType>) -> Self {
        Self {
            name: name.into(),
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl Viewpoint for TypeSetViewpoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_allowed_type(&self, ty: ElementType) -> bool {
        self.allowed.contains(&ty)
    }
}

/// An in-memory registry with a fixed set of viewpoints.
#[derive(Default)]
pub struct StaticRegistry {
    entries: HashMap<ViewpointId, Arc<dyn Viewpoint>>,
}

impl StaticRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a viewpoint under the given id, replacing any previous one.
    pub fn insert(&mut self, id: ViewpointId, viewpoint: impl Viewpoint + 'static) {
        self.entries.insert(id, Arc::new(viewpoint));
    }
}

impl ViewpointRegistry for StaticRegistry {
    fn lookup(&self, id: ViewpointId) -> Option<Arc<dyn Viewpoint>> {
        self.entries.get(&id).cloned()
    }
}
