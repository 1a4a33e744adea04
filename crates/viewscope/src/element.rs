//! Domain-model data types and the seam between the browser and the engine.
//!
//! The engine never owns model data. It sees the browser's rows through
//! [`TreeEntry`] and, for rows that are model elements, inspects them through
//! [`ModelElement`]. Hosts with their own model layer implement these traits;
//! [`Element`] and [`Relationship`] are ready-made value types for hosts (and
//! tests) without one.

use std::fmt;

/// Identity of a model within the host application.
///
/// Elements are only ever judged against a viewpoint from their own model,
/// so the engine compares these for equality and nothing more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelId(pub u64);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model#{}", self.0)
    }
}

/// Type tag of a model element, e.g. `"BusinessActor"`.
///
/// Metamodels are fixed at compile time in practice, so the tag is a static
/// string and the type is `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementType(&'static str);

impl ElementType {
    /// Create a type tag from its metamodel name.
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// The metamodel name of this type.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A node of a domain model: either a plain element or a relationship
/// between two elements.
///
/// Relationships report `true` from [`is_relationship`] and expose their
/// endpoints through [`source`] and [`target`]. A malformed relationship may
/// return `None` for an endpoint; the engine treats such nodes as
/// unevaluable rather than erroring.
///
/// [`is_relationship`]: ModelElement::is_relationship
/// [`source`]: ModelElement::source
/// [`target`]: ModelElement::target
pub trait ModelElement {
    /// The element's type tag.
    fn element_type(&self) -> ElementType;

    /// The model this element belongs to.
    fn model(&self) -> ModelId;

    /// Whether this element is a relationship.
    fn is_relationship(&self) -> bool {
        false
    }

    /// Source endpoint, for relationships.
    fn source(&self) -> Option<&dyn ModelElement> {
        None
    }

    /// Target endpoint, for relationships.
    fn target(&self) -> Option<&dyn ModelElement> {
        None
    }
}

/// One displayed row of the browser.
///
/// Structural rows (folders, section headers) return `None` and are never
/// de-emphasized. Every [`ModelElement`] is a `TreeEntry` via the blanket
/// impl.
pub trait TreeEntry {
    /// The model element behind this row, if it is one.
    fn as_model_element(&self) -> Option<&dyn ModelElement>;
}

impl<T: ModelElement> TreeEntry for T {
    fn as_model_element(&self) -> Option<&dyn ModelElement> {
        Some(self)
    }
}

/// A plain (non-relationship) model element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    ty: ElementType,
    model: ModelId,
}

impl Element {
    /// Create an element of the given type in the given model.
    pub const fn new(ty: ElementType, model: ModelId) -> Self {
        Self { ty, model }
    }
}

impl ModelElement for Element {
    fn element_type(&self) -> ElementType {
        self.ty
    }

    fn model(&self) -> ModelId {
        self.model
    }
}

/// A relationship between two elements.
///
/// The endpoints are owned copies; the owning model recorded here is the
/// relationship's own, which may in principle differ from its endpoints'.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relationship {
    ty: ElementType,
    model: ModelId,
    source: Element,
    target: Element,
}

impl Relationship {
    /// Create a relationship of the given type between `source` and `target`.
    pub const fn new(ty: ElementType, model: ModelId, source: Element, target: Element) -> Self {
        Self { ty, model, source, target }
    }
}

impl ModelElement for Relationship {
    fn element_type(&self) -> ElementType {
        self.ty
    }

    fn model(&self) -> ModelId {
        self.model
    }

    fn is_relationship(&self) -> bool {
        true
    }

    fn source(&self) -> Option<&dyn ModelElement> {
        Some(&self.source)
    }

    fn target(&self) -> Option<&dyn ModelElement> {
        Some(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_is_a_tree_entry() {
        let e = Element::new(ElementType::new("Actor"), ModelId(1));
        let entry: &dyn TreeEntry = &e;
        let el = entry.as_model_element().unwrap();
        assert_eq!(el.element_type(), ElementType::new("Actor"));
        assert_eq!(el.model(), ModelId(1));
        assert!(!el.is_relationship());
        assert!(el.source().is_none());
    }

    #[test]
    fn relationship_exposes_endpoints() {
        let m = ModelId(7);
        let a = Element::new(ElementType::new("Actor"), m);
        let b = Element::new(ElementType::new("Role"), m);
        let r = Relationship::new(ElementType::new("Assignment"), m, a, b);

        assert!(r.is_relationship());
        assert_eq!(r.source().unwrap().element_type(), ElementType::new("Actor"));
        assert_eq!(r.target().unwrap().element_type(), ElementType::new("Role"));
    }

    #[test]
    fn display_formats() {
        assert_eq!(ModelId(3).to_string(), "model#3");
        assert_eq!(ElementType::new("Node").to_string(), "Node");
    }
}
