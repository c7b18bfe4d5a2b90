//! # Repository Interface
//!
//! The editor core never talks to the network itself; it hands `SavedGraph`
//! payloads to a [`FlowRepository`] and re-enters the single-threaded event
//! flow when the call completes.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use flowloom_graph::SavedGraph;
use std::sync::Mutex;

/// Asynchronous, fallible load/save collaborator for flow graphs.
#[async_trait]
pub trait FlowRepository: Send + Sync {
    async fn load_graph(&self) -> Result<SavedGraph>;
    async fn save_graph(&self, graph: &SavedGraph) -> Result<()>;
}

/// In-process repository backing tests and demos.
#[derive(Default)]
pub struct MemoryRepository {
    slot: Mutex<Option<SavedGraph>>,
}

#[async_trait]
impl FlowRepository for MemoryRepository {
    async fn load_graph(&self) -> Result<SavedGraph> {
        self.slot
            .lock()
            .expect("repository lock poisoned")
            .clone()
            .ok_or_else(|| anyhow!("no graph has been saved"))
    }

    async fn save_graph(&self, graph: &SavedGraph) -> Result<()> {
        *self.slot.lock().expect("repository lock poisoned") = Some(graph.clone());
        Ok(())
    }
}
