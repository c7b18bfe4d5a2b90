//! # FlowLoom Graph
//!
//! The authoritative in-memory representation of a flow: steps (nodes),
//! transitions (edges), and the ordered component list each step carries.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: flat `SlotMap` arenas plus pure,
//!   snapshot-returning mutations. Readers only ever observe complete
//!   snapshots; a half-applied mutation is unrepresentable.
//! - **History (`src/history.rs`)**: bounded full-state snapshot undo/redo.
//! - **Persistence (`src/persistence.rs`)**: UUID-keyed payloads for
//!   load/save collaborators.

pub mod error;
pub mod history;
pub mod model;
pub mod persistence;

pub use error::GraphError;
pub use history::HistoryManager;
pub use model::{Edge, EdgeId, GraphState, Node, NodeFlags, NodeId};
pub use persistence::{SavedEdge, SavedGraph, SavedNode};
