//! Configuration shapes
//!
//! A [`ConfigShape`] describes the fields a section kind understands and the
//! default for each one. The composition model never validates field-level
//! content; renderers call [`ConfigShape::fill_defaults`] to read a config
//! that may be partial or stale.

use serde::Serialize;
use serde_json::Value;

use crate::section::ConfigMap;

/// Editor widget / value type for a config field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    LongText,
    Number,
    Bool,
    Color,
    Url,
    List,
}

impl FieldKind {
    /// Whether a stored value has the JSON type this field expects
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Text | Self::LongText | Self::Color | Self::Url => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::List => value.is_array(),
        }
    }
}

/// One field of a config shape
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: Value,
}

impl FieldSpec {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind, default: Value) -> Self {
        Self {
            key,
            label,
            kind,
            default,
        }
    }
}

/// Ordered field list for one section kind
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigShape {
    fields: Vec<FieldSpec>,
}

impl ConfigShape {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Config holding every field's default, in field order
    pub fn defaults(&self) -> ConfigMap {
        self.fields
            .iter()
            .map(|f| (f.key.to_string(), f.default.clone()))
            .collect()
    }

    /// Copy of `config` where every missing, null or mistyped field holds
    /// its default. Keys the shape does not know are kept as-is.
    pub fn fill_defaults(&self, config: &ConfigMap) -> ConfigMap {
        let mut filled = config.clone();
        for field in &self.fields {
            let usable = config
                .get(field.key)
                .is_some_and(|value| field.kind.accepts(value));
            if !usable {
                filled.insert(field.key.to_string(), field.default.clone());
            }
        }
        filled
    }
}
