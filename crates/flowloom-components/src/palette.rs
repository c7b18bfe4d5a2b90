//! # Component Palette
//!
//! The enumerable catalog of component descriptors the editor offers for
//! drag-and-drop. Entries are read-only templates; dropping one on a step
//! mints a concrete [`Component`] with a fresh id.

use crate::model::{Component, ComponentConfig, ComponentKind};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// One draggable palette entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Stable palette id (NOT a component id).
    pub id: String,
    pub kind: ComponentKind,
    /// Name shown on the palette card.
    pub display_name: String,
    /// Variant preselected for freshly dropped components.
    #[serde(default)]
    pub variant: Option<String>,
    /// Default configuration for freshly dropped components.
    #[serde(default)]
    pub config: ComponentConfig,
}

impl PaletteEntry {
    /// Mints a concrete component from this descriptor.
    ///
    /// Every call produces a fresh `Uuid`, distinct from the palette id and
    /// from every previously minted component.
    pub fn instantiate(&self) -> Component {
        Component {
            id: Uuid::new_v4(),
            kind: self.kind,
            variant: self.variant.clone(),
            config: self.config.clone(),
        }
    }
}

/// The component catalog offered to the user.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The default catalog shipped with the builder.
    pub fn builtin() -> Self {
        fn entry(
            id: &str,
            kind: ComponentKind,
            display_name: &str,
            variant: Option<&str>,
            field: &[(&str, serde_json::Value)],
        ) -> PaletteEntry {
            PaletteEntry {
                id: id.to_string(),
                kind,
                display_name: display_name.to_string(),
                variant: variant.map(str::to_string),
                config: ComponentConfig {
                    field: field
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.clone()))
                        .collect(),
                    styles: Default::default(),
                },
            }
        }

        Self::new(vec![
            entry(
                "typography-heading",
                ComponentKind::Typography,
                "Heading",
                Some("H3"),
                &[("text", json!("Sign in to your account"))],
            ),
            entry(
                "typography-text",
                ComponentKind::Typography,
                "Text",
                None,
                &[("text", json!("Text"))],
            ),
            entry(
                "input-text",
                ComponentKind::Input,
                "Text Input",
                Some("TEXT"),
                &[
                    ("label", json!("Username")),
                    ("placeholder", json!("Enter your username")),
                    ("inputType", json!("text")),
                    ("required", json!(true)),
                ],
            ),
            entry(
                "input-password",
                ComponentKind::Input,
                "Password Input",
                Some("PASSWORD"),
                &[
                    ("label", json!("Password")),
                    ("inputType", json!("password")),
                    ("required", json!(true)),
                ],
            ),
            entry(
                "button-action",
                ComponentKind::Button,
                "Button",
                None,
                &[("label", json!("Continue"))],
            ),
            entry(
                "image-logo",
                ComponentKind::Image,
                "Image",
                None,
                &[("src", json!("")), ("alt", json!(""))],
            ),
            entry("divider", ComponentKind::Divider, "Divider", None, &[]),
        ])
    }
}
