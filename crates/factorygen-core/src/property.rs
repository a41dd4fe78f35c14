use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from field name to its resolved descriptor.
///
/// Insertion order follows schema column order; a name appears at most once.
pub type PropertyMap = IndexMap<String, PropertyDescriptor>;

/// A column as reported by the schema introspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub storage_type: String,
}

/// Resolved property handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Semantic type label, `mixed` until a type is resolved.
    pub type_label: String,
    /// Generator expression for the field, when one could be selected.
    pub fake_expression: Option<String>,
}

impl PropertyDescriptor {
    /// Initial state for a freshly seen field.
    pub fn untyped() -> Self {
        Self {
            type_label: "mixed".to_string(),
            fake_expression: None,
        }
    }

    pub fn has_fake(&self) -> bool {
        self.fake_expression.is_some()
    }
}
