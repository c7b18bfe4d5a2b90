//! # Property Editor
//!
//! Edits the configuration of the currently selected element. Values are
//! validated against the registry's field schemas before they reach the
//! store; a rejected value leaves the store untouched. Mutation happens only
//! inside these event-handler methods, never from a read path.

use crate::EditorSession;
use crate::error::EditorError;
use crate::notify::AlertLevel;
use flowloom_graph::NodeId;
use serde_json::Value;
use uuid::Uuid;

impl EditorSession {
    fn selected_target(&self) -> Result<(NodeId, Uuid), EditorError> {
        self.selection
            .current()
            .map(|s| (s.node, s.element.id))
            .ok_or(EditorError::NoSelection)
    }

    /// Applies a property edit to the selected element.
    ///
    /// Writing the value the field already holds is a no-op success and is
    /// not recorded in history.
    pub fn change_property(&mut self, key: &str, new_value: Value) -> Result<(), EditorError> {
        let (node, element) = self.selected_target()?;
        let kind = self.graph.find_component(node, element)?.kind;

        if let Err(err) = self.registry.validate(kind, key, &new_value) {
            self.sink
                .notify(AlertLevel::Error, "Invalid property value", &err.to_string());
            return Err(err.into());
        }

        let current = self.graph.find_component(node, element)?;
        if current.config.field.get(key) == Some(&new_value) {
            return Ok(());
        }

        let next = self
            .graph
            .update_component_field(node, element, key, new_value)?;
        self.commit_and_apply(next);
        Ok(())
    }

    /// Switches the selected element to a declared variant.
    ///
    /// The variant preset is merged into the stored component AND the cached
    /// selection is refreshed in the same call, so the property panel and the
    /// store never diverge for more than one render cycle.
    pub fn change_variant(&mut self, tag: &str) -> Result<(), EditorError> {
        let (node, element) = self.selected_target()?;

        let next = self
            .graph
            .replace_component_variant(&self.registry, node, element, tag)?;
        self.commit_and_apply(next);
        Ok(())
    }
}
