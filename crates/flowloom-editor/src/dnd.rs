//! # Drag-and-Drop Session
//!
//! Mediates the transient drag state between the component palette and the
//! canvas. At most one drag session exists at a time; a drop is terminal for
//! the session whether or not the resulting mutation succeeds.

use crate::EditorSession;
use crate::error::EditorError;
use crate::notify::AlertLevel;
use flowloom_graph::NodeId;
use uuid::Uuid;

/// Transient drag state. `None` when no drag is active.
#[derive(Debug, Default)]
pub struct DndSession {
    dragged: Option<String>,
}

impl DndSession {
    /// Starts a drag. Ignored (documented idempotent-ignore, not a failure)
    /// if a drag is already active.
    pub fn begin(&mut self, palette_id: &str) {
        if let Some(active) = &self.dragged {
            tracing::debug!(active = %active, ignored = palette_id, "drag already active");
            return;
        }
        self.dragged = Some(palette_id.to_string());
    }

    /// The palette id currently being dragged, if any.
    pub fn active(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    /// Clears the drag without any other effect.
    pub fn cancel(&mut self) {
        self.dragged = None;
    }

    /// Ends the session, yielding the dragged id. Terminal: the session is
    /// cleared no matter what the caller does with the id.
    pub fn take(&mut self) -> Option<String> {
        self.dragged.take()
    }
}

impl EditorSession {
    /// Starts dragging a palette entry. No-op if a drag is already active.
    pub fn begin_drag(&mut self, palette_id: &str) {
        self.dnd.begin(palette_id);
    }

    /// Abandons the active drag without mutating the graph.
    pub fn cancel_drag(&mut self) {
        self.dnd.cancel();
    }

    /// Drops the dragged palette entry onto a step.
    ///
    /// Synthesizes a fresh component from the palette descriptor and appends
    /// it to the step. Returns the new component's id, or `Ok(None)` when no
    /// drag was active. The drag session is cleared on every path, including
    /// failures (fail-safe cleanup).
    pub fn drop_on(&mut self, target: NodeId) -> Result<Option<Uuid>, EditorError> {
        let Some(palette_id) = self.dnd.take() else {
            return Ok(None);
        };

        let (component, display_name) = {
            let entry = self
                .palette
                .get(&palette_id)
                .ok_or_else(|| EditorError::UnknownPaletteEntry(palette_id.clone()))?;
            (entry.instantiate(), entry.display_name.clone())
        };
        let component_id = component.id;

        match self.graph.add_component(target, component) {
            Ok(next) => {
                self.commit_and_apply(next);
                self.sink.notify(
                    AlertLevel::Info,
                    "Component added",
                    &format!("{display_name} was added to the step"),
                );
                Ok(Some(component_id))
            }
            Err(err) => {
                self.sink.notify(
                    AlertLevel::Error,
                    "Component could not be added",
                    &err.to_string(),
                );
                Err(err.into())
            }
        }
    }
}
