//! # FlowLoom Editor
//!
//! `flowloom_editor` is the headless editing session for the visual flow
//! builder. It owns the authoritative graph snapshot and the transient state
//! around it (selection, drag-and-drop, undo history), while delegating
//! rendering to the host application.
//!
//! ## Core Architecture
//! - **Session (`src/lib.rs`)**: [`EditorSession`], the single entry point.
//!   Mutations swap in fresh graph snapshots; readers never observe partial
//!   state.
//! - **Selection (`src/selection.rs`)**: the last-interacted step/element
//!   pair driving the property panel.
//! - **DnD (`src/dnd.rs`)**: palette-to-canvas drag sessions.
//! - **Properties (`src/properties.rs`)**: schema-validated edits of the
//!   selected element.
//!
//! Everything runs on one logical thread, driven by discrete UI events; the
//! only suspension points are the [`FlowRepository`] calls.

pub mod config;
pub mod dnd;
pub mod error;
pub mod notify;
pub mod persistence;
pub mod properties;
pub mod selection;

pub use config::EditorConfig;
pub use dnd::DndSession;
pub use error::EditorError;
pub use notify::{AlertLevel, NotificationSink, TracingSink};
pub use persistence::{FlowRepository, MemoryRepository};
pub use selection::{Selection, SelectionTracker};

use flowloom_components::{Palette, Registry, Rendered};
use flowloom_graph::{EdgeId, GraphState, HistoryManager, Node, NodeFlags, NodeId};
use glam::Vec2;
use std::sync::Arc;
use uuid::Uuid;

/// A headless editing session for one flow.
///
/// The session is created per editor instance and destroyed on navigation
/// away; nothing in it is global. All mutation goes through event-handler
/// methods that swap the graph snapshot and re-sync the selection.
pub struct EditorSession {
    /// Configuration settings.
    pub config: EditorConfig,
    pub(crate) graph: GraphState,
    pub(crate) history: HistoryManager,
    pub(crate) selection: SelectionTracker,
    pub(crate) dnd: DndSession,
    pub(crate) registry: Arc<Registry>,
    pub(crate) palette: Palette,
    pub(crate) sink: Box<dyn NotificationSink>,
}

impl EditorSession {
    /// Creates a session over an empty graph with the builtin registry and
    /// a tracing-backed notification sink.
    pub fn new(config: EditorConfig, palette: Palette) -> Self {
        let max_history = config.max_history;
        Self {
            config,
            graph: GraphState::default(),
            history: HistoryManager::new(max_history),
            selection: SelectionTracker::default(),
            dnd: DndSession::default(),
            registry: Registry::builtin(),
            palette,
            sink: Box::new(TracingSink),
        }
    }

    /// Replaces the notification sink.
    pub fn with_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the adapter registry.
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    /// The current graph snapshot.
    pub fn graph(&self) -> &GraphState {
        &self.graph
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.current()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Commits the outgoing snapshot to history, swaps in the new one, and
    /// reconciles the selection against it.
    pub(crate) fn commit_and_apply(&mut self, next: GraphState) {
        self.history.commit(&self.graph);
        self.graph = next;
        self.selection.sync(&self.graph);
    }

    /// Adds a step at the given canvas position.
    pub fn add_step(&mut self, label: &str, position: Vec2) -> NodeId {
        let node = Node::new(label, position, self.config.default_node_size);
        let (next, id) = self.graph.insert_node(node);
        self.commit_and_apply(next);
        id
    }

    /// Removes a step and every transition touching it. A selection living
    /// on the step is cleared.
    pub fn remove_step(&mut self, node_id: NodeId) -> Result<(), EditorError> {
        let next = self.graph.remove_node(node_id)?;
        self.commit_and_apply(next);
        Ok(())
    }

    /// Connects two steps with an optional branch label.
    pub fn connect_steps(
        &mut self,
        source: NodeId,
        target: NodeId,
        label: Option<&str>,
    ) -> Result<EdgeId, EditorError> {
        let (next, id) = self
            .graph
            .connect(source, target, label.map(str::to_string))?;
        self.commit_and_apply(next);
        Ok(id)
    }

    /// Removes a transition.
    pub fn disconnect_steps(&mut self, edge: EdgeId) -> Result<(), EditorError> {
        let next = self.graph.disconnect(edge)?;
        self.commit_and_apply(next);
        Ok(())
    }

    /// Removes a component from a step. If it was the selected element, the
    /// selection is cleared rather than left pointing at missing data.
    pub fn remove_component(
        &mut self,
        node_id: NodeId,
        component_id: Uuid,
    ) -> Result<(), EditorError> {
        let next = self.graph.remove_component(node_id, component_id)?;
        self.commit_and_apply(next);
        Ok(())
    }

    /// Marks an element as the last-interacted one and raises its step to
    /// the canvas foreground. Selection changes are not undoable.
    pub fn select(&mut self, node_id: NodeId, component_id: Uuid) -> Result<(), EditorError> {
        let element = self.graph.find_component(node_id, component_id)?.clone();
        self.graph = self.graph.bring_to_front(node_id)?;
        self.selection.set_last_interacted(node_id, element);
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Undoes the last recorded mutation. Returns false if there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.graph) {
            Some(previous) => {
                self.graph = previous;
                self.selection.sync(&self.graph);
                true
            }
            None => false,
        }
    }

    /// Redoes the last undone mutation. Returns false if there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.graph) {
            Some(next) => {
                self.graph = next;
                self.selection.sync(&self.graph);
                true
            }
            None => false,
        }
    }

    /// Renders one step's components to presentation primitives.
    ///
    /// Hidden steps render to nothing. Pure read: the graph is not touched.
    pub fn render_step(&self, node_id: NodeId) -> Result<Vec<Rendered>, EditorError> {
        let node = self.graph.node(node_id)?;
        if node.flags.contains(NodeFlags::HIDDEN) {
            return Ok(Vec::new());
        }
        let mut rendered = Vec::with_capacity(node.components.len());
        for component in &node.components {
            rendered.push(self.registry.render(component)?);
        }
        Ok(rendered)
    }

    /// Replaces the session's graph with the repository's copy.
    ///
    /// History is reset (a loaded flow is a fresh document) and any stale
    /// selection is cleared.
    pub async fn load_from(&mut self, repository: &dyn FlowRepository) -> anyhow::Result<()> {
        let saved = match repository.load_graph().await {
            Ok(saved) => saved,
            Err(err) => {
                self.sink.notify(
                    AlertLevel::Error,
                    "Flow could not be loaded",
                    &err.to_string(),
                );
                return Err(err);
            }
        };
        self.graph = GraphState::from_saved(saved);
        self.history = HistoryManager::new(self.config.max_history);
        // arena keys do not survive a load; a kept selection could alias a
        // different step in the rebuilt arena
        self.selection.clear();
        self.sink.notify(
            AlertLevel::Info,
            "Flow loaded",
            &format!("{} steps", self.graph.nodes.len()),
        );
        Ok(())
    }

    /// Writes the session's graph to the repository.
    pub async fn save_to(&self, repository: &dyn FlowRepository) -> anyhow::Result<()> {
        match repository.save_graph(&self.graph.save()).await {
            Ok(()) => {
                self.sink.notify(
                    AlertLevel::Info,
                    "Flow saved",
                    &format!("{} steps", self.graph.nodes.len()),
                );
                Ok(())
            }
            Err(err) => {
                self.sink.notify(
                    AlertLevel::Error,
                    "Flow could not be saved",
                    &err.to_string(),
                );
                Err(err)
            }
        }
    }
}
