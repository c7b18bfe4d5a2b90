//! # Core Data Model
//!
//! This module defines the flow graph: steps stored in flat `SlotMap` arenas,
//! directed transitions between them, and the ordered component list each
//! step renders.
//!
//! Every mutation is pure: it takes `&self`, returns a fresh
//! [`GraphState`] snapshot on success, and leaves the input untouched on
//! failure. Callers hold ids, never references into a snapshot, so a stale
//! closure can never observe partial state.

use crate::error::GraphError;
use flowloom_components::{Component, Registry};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slotmap::SlotMap;
use slotmap::new_key_type;
use std::collections::HashMap;

new_key_type! {
    /// Unique identifier for a step.
    pub struct NodeId;
    /// Unique identifier for a transition.
    pub struct EdgeId;
}

use bitflags::bitflags;

bitflags! {
    /// Boolean states of a step.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// The step cannot be removed.
        const LOCKED = 1 << 0;
        /// The step is not rendered.
        const HIDDEN = 1 << 1;
    }
}

// Manual Serialize/Deserialize implementation for bitflags to be friendly
impl Serialize for NodeFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for NodeFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

pub use uuid::Uuid;

/// One step of the flow.
///
/// Steps are the primary entities: a labelled box on the canvas carrying an
/// ordered list of components. Component order is render/tab order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    /// Self-reference ID.
    pub id: NodeId,
    /// Stable UUID for persistence.
    pub uuid: Uuid,
    /// Human-readable step name.
    pub label: String,
    /// World-space position of the top-left corner.
    pub position: Vec2,
    /// Size of the step layout.
    pub size: Vec2,
    /// Components rendered within the step, in order.
    pub components: Vec<Component>,
    /// State flags.
    pub flags: NodeFlags,
}

impl Node {
    /// Creates a step with a fresh UUID and no components. The slotmap key
    /// is assigned on insertion.
    pub fn new(label: impl Into<String>, position: Vec2, size: Vec2) -> Self {
        Self {
            id: NodeId::default(),
            uuid: Uuid::new_v4(),
            label: label.into(),
            position,
            size,
            components: Vec::new(),
            flags: NodeFlags::default(),
        }
    }
}

/// A directed transition between two steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source step ID.
    pub source: NodeId,
    /// Target step ID.
    pub target: NodeId,
    /// Branch tag (e.g. "success", "failure").
    #[serde(default)]
    pub label: Option<String>,
}

/// The entire state of the flow graph.
///
/// Entities live in flat arenas (`SlotMap`). `Clone` is the snapshot
/// primitive: mutations clone, adjust, and hand back the result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphState {
    /// Arena for steps.
    pub nodes: SlotMap<NodeId, Node>,
    /// Arena for transitions.
    pub edges: SlotMap<EdgeId, Edge>,
    /// Draw order cache.
    /// Lower index = Background/Bottom.
    /// Higher index = Foreground/Top.
    pub draw_order: Vec<NodeId>,
    /// Index for O(1) UUID to NodeId lookup.
    #[serde(default, skip)]
    pub uuid_index: HashMap<Uuid, NodeId>,
}

impl Default for GraphState {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            draw_order: Vec::new(),
            uuid_index: HashMap::new(),
        }
    }
}

impl GraphState {
    /// Read access to a step.
    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(id).ok_or(GraphError::NodeNotFound(id))
    }

    /// O(1) lookup of a step by its stable UUID.
    pub fn node_by_uuid(&self, uuid: &Uuid) -> Option<NodeId> {
        self.uuid_index.get(uuid).copied()
    }

    /// Read access to one component of a step.
    pub fn find_component(
        &self,
        node_id: NodeId,
        component_id: Uuid,
    ) -> Result<&Component, GraphError> {
        self.node(node_id)?
            .components
            .iter()
            .find(|c| c.id == component_id)
            .ok_or(GraphError::ComponentNotFound {
                node: node_id,
                component: component_id,
            })
    }

    fn component_mut(
        &mut self,
        node_id: NodeId,
        component_id: Uuid,
    ) -> Result<&mut Component, GraphError> {
        self.nodes
            .get_mut(node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?
            .components
            .iter_mut()
            .find(|c| c.id == component_id)
            .ok_or(GraphError::ComponentNotFound {
                node: node_id,
                component: component_id,
            })
    }

    /// Inserts a step, assigning its arena key and indexing the UUID.
    pub fn insert_node(&self, mut node: Node) -> (GraphState, NodeId) {
        let mut next = self.clone();
        let uuid = node.uuid;
        let id = next.nodes.insert_with_key(|key| {
            node.id = key;
            node
        });
        next.uuid_index.insert(uuid, id);
        next.draw_order.push(id);
        (next, id)
    }

    /// Removes a step and every transition touching it.
    ///
    /// The cascade keeps the no-dangling-edges invariant: after this returns,
    /// no edge references the removed step.
    pub fn remove_node(&self, id: NodeId) -> Result<GraphState, GraphError> {
        let node = self.node(id)?;
        if node.flags.contains(NodeFlags::LOCKED) {
            return Err(GraphError::NodeLocked(id));
        }
        let mut next = self.clone();
        let removed = next.nodes.remove(id).ok_or(GraphError::NodeNotFound(id))?;
        next.uuid_index.remove(&removed.uuid);
        next.draw_order.retain(|&n| n != id);
        next.edges.retain(|_, e| e.source != id && e.target != id);
        Ok(next)
    }

    /// Adds a transition. Both endpoints must exist.
    pub fn connect(
        &self,
        source: NodeId,
        target: NodeId,
        label: Option<String>,
    ) -> Result<(GraphState, EdgeId), GraphError> {
        if !self.nodes.contains_key(source) {
            return Err(GraphError::NodeNotFound(source));
        }
        if !self.nodes.contains_key(target) {
            return Err(GraphError::NodeNotFound(target));
        }
        let mut next = self.clone();
        let id = next.edges.insert(Edge {
            source,
            target,
            label,
        });
        Ok((next, id))
    }

    /// Removes a transition.
    pub fn disconnect(&self, id: EdgeId) -> Result<GraphState, GraphError> {
        if !self.edges.contains_key(id) {
            return Err(GraphError::EdgeNotFound(id));
        }
        let mut next = self.clone();
        next.edges.remove(id);
        Ok(next)
    }

    /// Appends a component to a step's sequence.
    pub fn add_component(
        &self,
        node_id: NodeId,
        component: Component,
    ) -> Result<GraphState, GraphError> {
        let node = self.node(node_id)?;
        if node.components.iter().any(|c| c.id == component.id) {
            return Err(GraphError::DuplicateComponent {
                node: node_id,
                component: component.id,
            });
        }
        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(node_id) {
            node.components.push(component);
        }
        Ok(next)
    }

    /// Replaces one `config.field` entry of a component.
    ///
    /// Writing the value a field already holds is a no-op success: the
    /// returned snapshot is observably identical to the input.
    pub fn update_component_field(
        &self,
        node_id: NodeId,
        component_id: Uuid,
        key: &str,
        value: Value,
    ) -> Result<GraphState, GraphError> {
        let current = self.find_component(node_id, component_id)?;
        if current.config.field.get(key) == Some(&value) {
            return Ok(self.clone());
        }
        let mut next = self.clone();
        let component = next.component_mut(node_id, component_id)?;
        component.config.field.insert(key.to_string(), value);
        Ok(next)
    }

    /// Merges a declared variant preset over a component, preserving its id.
    ///
    /// The tag must be declared for the component's kind in the registry.
    /// Idempotent: applying the same tag twice equals applying it once.
    pub fn replace_component_variant(
        &self,
        registry: &Registry,
        node_id: NodeId,
        component_id: Uuid,
        tag: &str,
    ) -> Result<GraphState, GraphError> {
        let kind = self.find_component(node_id, component_id)?.kind;
        let variant = registry.variant(kind, tag)?;
        let mut next = self.clone();
        let component = next.component_mut(node_id, component_id)?;
        variant.apply(component);
        Ok(next)
    }

    /// Removes a component from a step's sequence.
    ///
    /// Selection is NOT touched here; callers that track a selection must
    /// clear it themselves when it referenced the removed component.
    pub fn remove_component(
        &self,
        node_id: NodeId,
        component_id: Uuid,
    ) -> Result<GraphState, GraphError> {
        // existence check up front so the error names the right entity
        self.find_component(node_id, component_id)?;
        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(node_id) {
            node.components.retain(|c| c.id != component_id);
        }
        Ok(next)
    }

    /// Moves a step to the end of the draw order (foreground).
    pub fn bring_to_front(&self, node_id: NodeId) -> Result<GraphState, GraphError> {
        self.node(node_id)?;
        let mut next = self.clone();
        next.draw_order.retain(|&n| n != node_id);
        next.draw_order.push(node_id);
        Ok(next)
    }
}
