use crate::model::{Edge, GraphState, Node, NodeFlags, NodeId};
use flowloom_components::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A serializable representation of a transition.
///
/// Instead of transient `NodeId`s, endpoints are stable UUIDs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedEdge {
    pub source: Uuid,
    pub target: Uuid,
    #[serde(default)]
    pub label: Option<String>,
}

/// A serializable representation of a step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedNode {
    pub uuid: Uuid,
    pub label: String,
    pub position: Vec2,
    pub size: Vec2,
    pub flags: NodeFlags,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// A serializable snapshot of the flow graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedGraph {
    pub nodes: Vec<SavedNode>,
    pub edges: Vec<SavedEdge>,
}

impl GraphState {
    /// Serializes the graph state into a `SavedGraph` payload.
    ///
    /// Steps are written in draw order so z-order survives a round trip.
    pub fn save(&self) -> SavedGraph {
        let mut saved_nodes = Vec::with_capacity(self.nodes.len());
        for &id in &self.draw_order {
            if let Some(node) = self.nodes.get(id) {
                saved_nodes.push(SavedNode {
                    uuid: node.uuid,
                    label: node.label.clone(),
                    position: node.position,
                    size: node.size,
                    flags: node.flags,
                    components: node.components.clone(),
                });
            }
        }

        let mut saved_edges = Vec::with_capacity(self.edges.len());
        for (_id, edge) in &self.edges {
            let (Some(source), Some(target)) =
                (self.nodes.get(edge.source), self.nodes.get(edge.target))
            else {
                // unreachable while the no-dangling invariant holds
                tracing::warn!("skipping transition with missing endpoint");
                continue;
            };
            saved_edges.push(SavedEdge {
                source: source.uuid,
                target: target.uuid,
                label: edge.label.clone(),
            });
        }

        SavedGraph {
            nodes: saved_nodes,
            edges: saved_edges,
        }
    }

    /// Rebuilds a graph state from a `SavedGraph` payload.
    ///
    /// Transitions whose endpoint UUIDs are unknown are dropped (with a
    /// warning); the loaded graph never contains dangling edges.
    pub fn from_saved(saved: SavedGraph) -> GraphState {
        let mut state = GraphState::default();
        let mut uuid_to_id: HashMap<Uuid, NodeId> = HashMap::new();

        for saved_node in saved.nodes {
            let uuid = saved_node.uuid;
            let id = state.nodes.insert_with_key(|key| Node {
                id: key,
                uuid,
                label: saved_node.label,
                position: saved_node.position,
                size: saved_node.size,
                components: saved_node.components,
                flags: saved_node.flags,
            });
            state.draw_order.push(id);
            state.uuid_index.insert(uuid, id);
            uuid_to_id.insert(uuid, id);
        }

        for saved_edge in saved.edges {
            match (
                uuid_to_id.get(&saved_edge.source),
                uuid_to_id.get(&saved_edge.target),
            ) {
                (Some(&source), Some(&target)) => {
                    state.edges.insert(Edge {
                        source,
                        target,
                        label: saved_edge.label,
                    });
                }
                _ => {
                    tracing::warn!(
                        source = %saved_edge.source,
                        target = %saved_edge.target,
                        "dropping transition with unknown endpoint"
                    );
                }
            }
        }

        state
    }
}
