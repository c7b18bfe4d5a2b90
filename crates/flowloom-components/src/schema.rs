use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The value shape a field accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Select { options: Vec<String> },
}

/// Declares one editable field of a component kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    /// The `config.field` key this schema governs.
    pub key: String,
    /// User-facing label.
    pub label: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Mask the value in the UI (passwords, secrets).
    #[serde(default)]
    pub secret: bool,
    #[serde(default)]
    pub default_value: Option<Value>,
}

/// A candidate value failed the schema check for its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for `{key}`: {reason}")]
pub struct ValidationError {
    /// The offending field key.
    pub key: String,
    pub reason: String,
}

impl FieldSchema {
    /// Checks a candidate value against the declared type.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        if value.is_null() {
            if self.required {
                return Err(self.invalid("value is required"));
            }
            return Ok(());
        }

        match &self.field_type {
            FieldType::Text if value.is_string() => Ok(()),
            FieldType::Number if value.is_number() => Ok(()),
            FieldType::Boolean if value.is_boolean() => Ok(()),
            FieldType::Select { options } => match value.as_str() {
                Some(chosen) if options.iter().any(|o| o == chosen) => Ok(()),
                Some(chosen) => {
                    Err(self.invalid(&format!("`{chosen}` is not one of the declared options")))
                }
                None => Err(self.invalid("expected a string option")),
            },
            FieldType::Text => Err(self.invalid("expected a string")),
            FieldType::Number => Err(self.invalid("expected a number")),
            FieldType::Boolean => Err(self.invalid("expected a boolean")),
        }
    }

    fn invalid(&self, reason: &str) -> ValidationError {
        ValidationError {
            key: self.key.clone(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_field(required: bool) -> FieldSchema {
        FieldSchema {
            key: "label".to_string(),
            label: "Label".to_string(),
            field_type: FieldType::Text,
            required,
            secret: false,
            default_value: None,
        }
    }

    #[test]
    fn test_text_accepts_strings_only() {
        let schema = text_field(false);
        assert!(schema.check(&json!("Continue")).is_ok());

        let err = schema.check(&json!(42)).unwrap_err();
        assert_eq!(err.key, "label");
    }

    #[test]
    fn test_null_only_fails_when_required() {
        assert!(text_field(false).check(&Value::Null).is_ok());
        assert!(text_field(true).check(&Value::Null).is_err());
    }

    #[test]
    fn test_select_checks_declared_options() {
        let schema = FieldSchema {
            key: "inputType".to_string(),
            label: "Input type".to_string(),
            field_type: FieldType::Select {
                options: vec!["text".to_string(), "password".to_string()],
            },
            required: false,
            secret: false,
            default_value: None,
        };

        assert!(schema.check(&json!("password")).is_ok());
        assert!(schema.check(&json!("checkbox")).is_err());
        assert!(schema.check(&json!(1)).is_err());
    }
}
