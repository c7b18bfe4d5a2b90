use crate::model::GraphState;

/// Manages the Undo/Redo history of the GraphState.
///
/// Full state snapshots rather than a command pattern: costlier in memory,
/// but robust against state drift and guaranteed to restore every id exactly.
/// Snapshot exchange fits the store's pure-mutation contract: callers hand in
/// the current snapshot and receive the restored one.
pub struct HistoryManager {
    undo_stack: Vec<GraphState>,
    redo_stack: Vec<GraphState>,
    pub max_history: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_history: 50,
        }
    }
}

impl HistoryManager {
    /// Creates a new HistoryManager with a specified limit.
    pub fn new(max_history: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_history),
            redo_stack: Vec::new(),
            max_history,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Saves a snapshot BEFORE a destructive action.
    ///
    /// Call this with the state you are about to replace.
    pub fn commit(&mut self, state: &GraphState) {
        if self.undo_stack.len() >= self.max_history {
            self.undo_stack.remove(0); // Drop oldest
        }
        self.undo_stack.push(state.clone());
        self.redo_stack.clear(); // New timeline branch
    }

    /// Performs Undo.
    ///
    /// Returns the restored snapshot, or `None` if there is nothing to undo.
    /// `current` is pushed onto the redo stack.
    pub fn undo(&mut self, current: &GraphState) -> Option<GraphState> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    /// Performs Redo.
    ///
    /// Returns the restored snapshot, or `None` if there is nothing to redo.
    /// `current` is pushed onto the undo stack.
    pub fn redo(&mut self, current: &GraphState) -> Option<GraphState> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(next)
    }
}
