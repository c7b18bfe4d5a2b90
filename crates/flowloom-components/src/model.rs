//! # Component Data Model
//!
//! A [`Component`] is a declarative description of one UI element placed on a
//! flow step: a kind tag, an optional presentation variant, and two opaque
//! key-value config maps (`field` for editable properties, `styles` for
//! styling). The maps are plain JSON values; only the per-kind schemas in the
//! registry give them meaning.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// The closed set of element kinds that can be placed on a flow step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Static text (headings and body copy).
    Typography,
    /// A form input field.
    Input,
    /// An action button.
    Button,
    /// An image or logo.
    Image,
    /// A horizontal rule.
    Divider,
}

impl ComponentKind {
    /// Stable string tag, used in error messages and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Typography => "Typography",
            ComponentKind::Input => "Input",
            ComponentKind::Button => "Button",
            ComponentKind::Image => "Image",
            ComponentKind::Divider => "Divider",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The editable configuration of a component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Editable properties (e.g. `text`, `label`, `placeholder`).
    #[serde(default)]
    pub field: HashMap<String, Value>,
    /// Style properties, passed through to the renderer untouched.
    #[serde(default)]
    pub styles: HashMap<String, Value>,
}

/// One UI element placed on a flow step.
///
/// The `id` is unique within the owning step's component list and stays
/// stable for the component's lifetime. `variant`, when present, must be a
/// tag the registry declares for `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier within the owning step.
    pub id: Uuid,
    /// The element kind.
    pub kind: ComponentKind,
    /// Selected presentation variant, if any.
    #[serde(default)]
    pub variant: Option<String>,
    /// Editable configuration.
    #[serde(default)]
    pub config: ComponentConfig,
}

impl Component {
    /// Creates an empty component of the given kind with a fresh id.
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            variant: None,
            config: ComponentConfig::default(),
        }
    }
}
