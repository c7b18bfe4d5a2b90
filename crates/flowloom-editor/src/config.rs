//! # Configuration
//!
//! This module defines the configuration struct for an editor session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Configuration parameters for an editor session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Maximum undo depth. Default: 50.
    pub max_history: usize,
    /// Size assigned to freshly added steps. Default: 300x200.
    pub default_node_size: Vec2,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: 50,
            default_node_size: Vec2::new(300.0, 200.0),
        }
    }
}
