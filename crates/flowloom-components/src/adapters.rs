//! # Component Adapters
//!
//! Adapters turn a declarative [`Component`] into a [`ViewPrimitive`] the host
//! application renders. Adapters are pure functions of their input: no hidden
//! state, so the graph stays serializable and diff-friendly. The host decides
//! what a primitive looks like on screen.

use crate::model::{Component, ComponentKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Horizontal alignment hint for text primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Start,
    Center,
}

/// A single presentation primitive.
///
/// The set is deliberately small; styling beyond structure travels in the
/// component's `config.styles` map (see [`Rendered`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ViewPrimitive {
    Heading {
        text: String,
        /// 1 through 6, mirroring HTML heading levels.
        level: u8,
        align: TextAlign,
    },
    Paragraph {
        text: String,
    },
    TextField {
        label: String,
        placeholder: String,
        input_type: String,
        required: bool,
        /// Mask the entered value (password fields).
        secret: bool,
    },
    Button {
        label: String,
        size: Option<String>,
    },
    Image {
        source: String,
        alt: String,
    },
    Rule,
}

/// A rendered component: the primitive plus the style passthrough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    /// Id of the component this was produced from.
    pub component: Uuid,
    /// `config.styles`, untouched, for the host to apply.
    pub styles: HashMap<String, Value>,
    pub primitive: ViewPrimitive,
}

/// Maps one component kind to its presentation.
pub trait ComponentAdapter: Send + Sync + std::fmt::Debug {
    /// The kind this adapter presents.
    fn kind(&self) -> ComponentKind;

    /// Produces the primitive for one component. Must be pure.
    fn render(&self, component: &Component) -> ViewPrimitive;
}

fn field_str(component: &Component, key: &str) -> String {
    component
        .config
        .field
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn field_bool(component: &Component, key: &str) -> bool {
    component
        .config
        .field
        .get(key)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Adapter for [`ComponentKind::Typography`].
///
/// Heading variants (H1 through H6) are centered; everything else renders as
/// start-aligned body copy.
#[derive(Debug)]
pub struct TypographyAdapter;

impl ComponentAdapter for TypographyAdapter {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Typography
    }

    fn render(&self, component: &Component) -> ViewPrimitive {
        let text = field_str(component, "text");

        match component.variant.as_deref() {
            Some(tag @ ("H1" | "H2" | "H3" | "H4" | "H5" | "H6")) => ViewPrimitive::Heading {
                text,
                level: tag[1..].parse().unwrap_or(1),
                align: TextAlign::Center,
            },
            _ => ViewPrimitive::Paragraph { text },
        }
    }
}

/// Adapter for [`ComponentKind::Input`].
#[derive(Debug)]
pub struct InputAdapter;

impl ComponentAdapter for InputAdapter {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Input
    }

    fn render(&self, component: &Component) -> ViewPrimitive {
        let input_type = {
            let declared = field_str(component, "inputType");
            if declared.is_empty() {
                "text".to_string()
            } else {
                declared
            }
        };
        let secret = input_type == "password";

        ViewPrimitive::TextField {
            label: field_str(component, "label"),
            placeholder: field_str(component, "placeholder"),
            input_type,
            required: field_bool(component, "required"),
            secret,
        }
    }
}

/// Adapter for [`ComponentKind::Button`].
#[derive(Debug)]
pub struct ButtonAdapter;

impl ComponentAdapter for ButtonAdapter {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
    }

    fn render(&self, component: &Component) -> ViewPrimitive {
        ViewPrimitive::Button {
            label: field_str(component, "label"),
            size: component
                .config
                .field
                .get("size")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Adapter for [`ComponentKind::Image`].
#[derive(Debug)]
pub struct ImageAdapter;

impl ComponentAdapter for ImageAdapter {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Image
    }

    fn render(&self, component: &Component) -> ViewPrimitive {
        ViewPrimitive::Image {
            source: field_str(component, "src"),
            alt: field_str(component, "alt"),
        }
    }
}

/// Adapter for [`ComponentKind::Divider`].
#[derive(Debug)]
pub struct DividerAdapter;

impl ComponentAdapter for DividerAdapter {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Divider
    }

    fn render(&self, _component: &Component) -> ViewPrimitive {
        ViewPrimitive::Rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typography_heading_variants_center() {
        let mut component = Component::new(ComponentKind::Typography);
        component.variant = Some("H2".to_string());
        component
            .config
            .field
            .insert("text".to_string(), json!("Sign in"));

        match TypographyAdapter.render(&component) {
            ViewPrimitive::Heading { text, level, align } => {
                assert_eq!(text, "Sign in");
                assert_eq!(level, 2);
                assert_eq!(align, TextAlign::Center);
            }
            other => panic!("expected Heading, got {other:?}"),
        }
    }

    #[test]
    fn test_typography_without_variant_is_body_copy() {
        let mut component = Component::new(ComponentKind::Typography);
        component
            .config
            .field
            .insert("text".to_string(), json!("Hello"));

        assert_eq!(
            TypographyAdapter.render(&component),
            ViewPrimitive::Paragraph {
                text: "Hello".to_string()
            }
        );
    }

    #[test]
    fn test_password_inputs_are_secret() {
        let mut component = Component::new(ComponentKind::Input);
        component
            .config
            .field
            .insert("inputType".to_string(), json!("password"));

        match InputAdapter.render(&component) {
            ViewPrimitive::TextField {
                input_type, secret, ..
            } => {
                assert_eq!(input_type, "password");
                assert!(secret);
            }
            other => panic!("expected TextField, got {other:?}"),
        }
    }

    #[test]
    fn test_button_size_comes_from_field() {
        let mut component = Component::new(ComponentKind::Button);
        component
            .config
            .field
            .insert("label".to_string(), json!("Continue"));
        component
            .config
            .field
            .insert("size".to_string(), json!("large"));

        assert_eq!(
            ButtonAdapter.render(&component),
            ViewPrimitive::Button {
                label: "Continue".to_string(),
                size: Some("large".to_string()),
            }
        );
    }
}
