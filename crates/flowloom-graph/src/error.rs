use crate::model::{EdgeId, NodeId};
use flowloom_components::RegistryError;
use thiserror::Error;
use uuid::Uuid;

/// Failures of graph store mutations. Fail-fast: the input snapshot is
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("step {0:?} does not exist")]
    NodeNotFound(NodeId),
    #[error("transition {0:?} does not exist")]
    EdgeNotFound(EdgeId),
    #[error("component {component} does not exist on step {node:?}")]
    ComponentNotFound { node: NodeId, component: Uuid },
    #[error("component {component} already exists on step {node:?}")]
    DuplicateComponent { node: NodeId, component: Uuid },
    #[error("step {0:?} is locked")]
    NodeLocked(NodeId),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
