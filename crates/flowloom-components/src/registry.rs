//! # Adapter Registry
//!
//! Maps a [`ComponentKind`] to everything the editor needs for it: the
//! renderer, the editable-field schemas, and the declared variant presets.
//! The builtin registry is resolved once at startup; hosts can also assemble
//! their own with [`Registry::new`] + [`Registry::register`].

use crate::adapters::{
    ButtonAdapter, ComponentAdapter, DividerAdapter, ImageAdapter, InputAdapter, Rendered,
    TypographyAdapter,
};
use crate::model::{Component, ComponentKind};
use crate::schema::{FieldSchema, FieldType, ValidationError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Lookup failures against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no adapter registered for component kind `{0}`")]
    UnknownKind(ComponentKind),
    #[error("variant `{tag}` is not declared for component kind `{kind}`")]
    UnknownVariant { kind: ComponentKind, tag: String },
}

/// A named preset of field/style values for a component kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariantDef {
    pub tag: String,
    #[serde(default)]
    pub field: HashMap<String, Value>,
    #[serde(default)]
    pub styles: HashMap<String, Value>,
}

impl VariantDef {
    /// Merges this preset over a component, preserving its id.
    ///
    /// Preset keys overwrite existing entries; everything else is kept, so
    /// applying the same variant twice equals applying it once.
    pub fn apply(&self, component: &mut Component) {
        component.variant = Some(self.tag.clone());
        for (key, value) in &self.field {
            component.config.field.insert(key.clone(), value.clone());
        }
        for (key, value) in &self.styles {
            component.config.styles.insert(key.clone(), value.clone());
        }
    }
}

/// Everything registered for one component kind.
pub struct KindSpec {
    pub schema: Vec<FieldSchema>,
    pub variants: Vec<VariantDef>,
    pub adapter: Box<dyn ComponentAdapter>,
}

/// Kind -> adapter + schema + variants dispatch table.
pub struct Registry {
    kinds: HashMap<ComponentKind, KindSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Registers (or replaces) the spec for a kind.
    pub fn register(&mut self, kind: ComponentKind, spec: KindSpec) {
        self.kinds.insert(kind, spec);
    }

    /// Resolves the renderer for a kind.
    pub fn resolve(&self, kind: ComponentKind) -> Result<&dyn ComponentAdapter, RegistryError> {
        self.kinds
            .get(&kind)
            .map(|spec| spec.adapter.as_ref())
            .ok_or(RegistryError::UnknownKind(kind))
    }

    /// The editable-field schemas declared for a kind.
    pub fn schema(&self, kind: ComponentKind) -> Result<&[FieldSchema], RegistryError> {
        self.kinds
            .get(&kind)
            .map(|spec| spec.schema.as_slice())
            .ok_or(RegistryError::UnknownKind(kind))
    }

    /// The variant presets declared for a kind.
    pub fn variants(&self, kind: ComponentKind) -> Result<&[VariantDef], RegistryError> {
        self.kinds
            .get(&kind)
            .map(|spec| spec.variants.as_slice())
            .ok_or(RegistryError::UnknownKind(kind))
    }

    /// Looks up one declared variant by tag.
    pub fn variant(&self, kind: ComponentKind, tag: &str) -> Result<&VariantDef, RegistryError> {
        self.variants(kind)?
            .iter()
            .find(|v| v.tag == tag)
            .ok_or_else(|| RegistryError::UnknownVariant {
                kind,
                tag: tag.to_string(),
            })
    }

    /// Checks a candidate value against the schema declared for `key`.
    ///
    /// Keys without a declared schema are opaque payload and accepted as-is.
    pub fn validate(
        &self,
        kind: ComponentKind,
        key: &str,
        value: &Value,
    ) -> Result<(), ValidationError> {
        let Some(spec) = self.kinds.get(&kind) else {
            return Ok(());
        };
        match spec.schema.iter().find(|f| f.key == key) {
            Some(field) => field.check(value),
            None => Ok(()),
        }
    }

    /// Renders one component: adapter dispatch plus the style passthrough.
    pub fn render(&self, component: &Component) -> Result<Rendered, RegistryError> {
        let adapter = self.resolve(component.kind)?;
        Ok(Rendered {
            component: component.id,
            styles: component.config.styles.clone(),
            primitive: adapter.render(component),
        })
    }

    /// The process-wide builtin registry, resolved once.
    pub fn builtin() -> Arc<Registry> {
        static BUILTIN: Lazy<Arc<Registry>> = Lazy::new(|| {
            let mut registry = Registry::new();
            registry.register(ComponentKind::Typography, typography_spec());
            registry.register(ComponentKind::Input, input_spec());
            registry.register(ComponentKind::Button, button_spec());
            registry.register(ComponentKind::Image, image_spec());
            registry.register(ComponentKind::Divider, divider_spec());
            Arc::new(registry)
        });
        BUILTIN.clone()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn text_schema(key: &str, label: &str, required: bool) -> FieldSchema {
    FieldSchema {
        key: key.to_string(),
        label: label.to_string(),
        field_type: FieldType::Text,
        required,
        secret: false,
        default_value: None,
    }
}

fn preset(tag: &str, field: &[(&str, Value)]) -> VariantDef {
    VariantDef {
        tag: tag.to_string(),
        field: field
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
        styles: HashMap::new(),
    }
}

fn typography_spec() -> KindSpec {
    KindSpec {
        schema: vec![text_schema("text", "Text", true)],
        // Heading levels; the tag alone drives presentation.
        variants: ["H1", "H2", "H3", "H4", "H5", "H6"]
            .iter()
            .map(|tag| preset(tag, &[]))
            .collect(),
        adapter: Box::new(TypographyAdapter),
    }
}

fn input_spec() -> KindSpec {
    KindSpec {
        schema: vec![
            text_schema("label", "Label", true),
            text_schema("placeholder", "Placeholder", false),
            FieldSchema {
                key: "inputType".to_string(),
                label: "Input type".to_string(),
                field_type: FieldType::Select {
                    options: vec![
                        "text".to_string(),
                        "password".to_string(),
                        "email".to_string(),
                        "number".to_string(),
                    ],
                },
                required: false,
                secret: false,
                default_value: Some(json!("text")),
            },
            FieldSchema {
                key: "required".to_string(),
                label: "Required".to_string(),
                field_type: FieldType::Boolean,
                required: false,
                secret: false,
                default_value: Some(json!(false)),
            },
        ],
        variants: vec![
            preset("TEXT", &[("inputType", json!("text"))]),
            preset("PASSWORD", &[("inputType", json!("password"))]),
            preset("EMAIL", &[("inputType", json!("email"))]),
        ],
        adapter: Box::new(InputAdapter),
    }
}

fn button_spec() -> KindSpec {
    KindSpec {
        schema: vec![
            text_schema("label", "Label", true),
            FieldSchema {
                key: "size".to_string(),
                label: "Size".to_string(),
                field_type: FieldType::Select {
                    options: vec!["large".to_string(), "small".to_string()],
                },
                required: false,
                secret: false,
                default_value: None,
            },
        ],
        variants: vec![
            preset("LARGE", &[("size", json!("large"))]),
            preset("SMALL", &[("size", json!("small"))]),
        ],
        adapter: Box::new(ButtonAdapter),
    }
}

fn image_spec() -> KindSpec {
    KindSpec {
        schema: vec![
            text_schema("src", "Source", true),
            text_schema("alt", "Alternative text", false),
        ],
        variants: Vec::new(),
        adapter: Box::new(ImageAdapter),
    }
}

fn divider_spec() -> KindSpec {
    KindSpec {
        schema: Vec::new(),
        variants: Vec::new(),
        adapter: Box::new(DividerAdapter),
    }
}
