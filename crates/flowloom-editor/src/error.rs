use flowloom_components::{RegistryError, ValidationError};
use flowloom_graph::GraphError;
use thiserror::Error;

/// Failures of editor session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("palette entry `{0}` does not exist")]
    UnknownPaletteEntry(String),
    #[error("no element is selected")]
    NoSelection,
}
