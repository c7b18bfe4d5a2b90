//! # Selection Tracker
//!
//! Tracks which step and which element within it was last interacted with,
//! for property-panel binding. The tracker caches a clone of the element so
//! the panel can render without re-querying the store; [`SelectionTracker::sync`]
//! keeps that cache honest against the authoritative snapshot.

use flowloom_components::Component;
use flowloom_graph::{GraphState, NodeId};

/// The currently focused step/element pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Step owning the element.
    pub node: NodeId,
    /// Cached clone of the last-interacted element.
    pub element: Component,
}

/// Session-scoped selection state. Two states: unselected, or selected with
/// a cached element. A new interaction overwrites; `clear` resets.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    current: Option<Selection>,
}

impl SelectionTracker {
    /// Records the current focus, overwriting any prior selection.
    pub fn set_last_interacted(&mut self, node: NodeId, element: Component) {
        self.current = Some(Selection { node, element });
    }

    /// Resets to the unselected state.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Reconciles the selection with the authoritative snapshot.
    ///
    /// If the referenced step/element still exists, the cached element is
    /// refreshed from the store; if it is gone (deleted, undone, replaced by
    /// a load), the selection is cleared rather than left dangling.
    pub fn sync(&mut self, graph: &GraphState) {
        let refreshed = match &self.current {
            Some(selection) => match graph.find_component(selection.node, selection.element.id) {
                Ok(found) => Some(Selection {
                    node: selection.node,
                    element: found.clone(),
                }),
                Err(_) => {
                    tracing::debug!("clearing selection: element no longer in the graph");
                    None
                }
            },
            None => return,
        };
        self.current = refreshed;
    }
}
