//! The per-element highlight decision.
//!
//! A pure, synchronous function of the browser row, the tracked context,
//! the gate reading and the registry. Decisions are never stored; the
//! browser asks again for every row on every render pass.

use crate::element::TreeEntry;
use crate::viewpoint::ViewpointRegistry;
use crate::workbench::EditingContext;

/// Whether a row renders normally or visually de-emphasized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// Render normally.
    Normal,
    /// De-emphasize: the element is disallowed under the active viewpoint.
    Disallowed,
}

/// Decide the highlight for one browser row.
///
/// Returns [`Highlight::Disallowed`] only when all of these hold: filtering
/// is enabled, a context is active, the row is a model element from the
/// context's own model, the context's viewpoint id resolves, and the
/// resolved viewpoint rejects the element's type — for relationships, either
/// endpoint's type. Everything else, including unresolvable viewpoints,
/// structural rows, foreign-model elements and relationships with missing
/// endpoints, is [`Highlight::Normal`]. Total over its input; never panics.
///
/// The viewpoint is resolved from the registry here, on every call: registry
/// contents may change without any context change, and a cached resolution
/// would go stale.
pub fn evaluate(
    entry: &dyn TreeEntry,
    context: Option<EditingContext>,
    enabled: bool,
    registry: &dyn ViewpointRegistry,
) -> Highlight {
    if !enabled {
        return Highlight::Normal;
    }
    let Some(context) = context else {
        return Highlight::Normal;
    };
    let Some(viewpoint) = context.viewpoint.and_then(|id| registry.lookup(id)) else {
        return Highlight::Normal;
    };
    let Some(element) = entry.as_model_element() else {
        return Highlight::Normal;
    };
    // Cross-model isolation: judged by the element's own model only.
    if element.model() != context.model {
        return Highlight::Normal;
    }

    let disallowed = if element.is_relationship() {
        match (element.source(), element.target()) {
            (Some(source), Some(target)) => {
                !viewpoint.is_allowed_type(source.element_type())
                    || !viewpoint.is_allowed_type(target.element_type())
            }
            // Endpoint missing: cannot evaluate.
            _ => false,
        }
    } else {
        !viewpoint.is_allowed_type(element.element_type())
    };

    if disallowed {
        tracing::trace!(
            target: "viewscope::evaluate",
            element_type = %element.element_type(),
            viewpoint = viewpoint.name(),
            "element disallowed under active viewpoint"
        );
        Highlight::Disallowed
    } else {
        Highlight::Normal
    }
}
