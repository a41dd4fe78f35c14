use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base abstraction marker a definition must declare to be generated.
pub const MODEL_BASE: &str = "Model";

/// A model declared in a TOML definition file.
///
/// Definition files carry a single `[model]` table:
///
/// ```toml
/// [model]
/// name = "app::models::User"
/// table = "users"
/// dates = ["deleted_at"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Fully-qualified model identifier.
    pub name: String,
    /// Declared base abstraction; only [`MODEL_BASE`] is generated.
    #[serde(default = "default_base")]
    pub base: String,
    /// Abstract definitions are skipped during generation.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Backing table name, optionally in `database.table` form.
    pub table: String,
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    /// Whether the primary key is auto-incrementing.
    #[serde(default = "default_true")]
    pub incrementing: bool,
    /// Managed creation timestamp column; empty disables it.
    #[serde(default = "default_created_at")]
    pub created_at: String,
    /// Managed update timestamp column; empty disables it.
    #[serde(default = "default_updated_at")]
    pub updated_at: String,
    /// Additional columns forced to the datetime semantic type.
    #[serde(default)]
    pub dates: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DefinitionFile {
    model: ModelDefinition,
}

impl ModelDefinition {
    /// Parse a definition file's contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: DefinitionFile = toml::from_str(contents)?;
        if file.model.name.is_empty() {
            return Err(Error::Definition("model name must not be empty".to_string()));
        }
        if file.model.table.is_empty() {
            return Err(Error::Definition(format!(
                "model '{}' declares no table",
                file.model.name
            )));
        }
        Ok(file.model)
    }

    /// Whether this definition is a subtype of the supported base model.
    pub fn is_model(&self) -> bool {
        self.base == MODEL_BASE
    }

    /// Whether this definition can be instantiated.
    pub fn is_concrete(&self) -> bool {
        !self.is_abstract
    }

    pub fn created_at(&self) -> Option<&str> {
        non_empty(&self.created_at)
    }

    pub fn updated_at(&self) -> Option<&str> {
        non_empty(&self.updated_at)
    }

    /// Columns whose semantic type is forced to datetime.
    pub fn date_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        if let Some(created) = self.created_at() {
            columns.push(created);
        }
        if let Some(updated) = self.updated_at() {
            columns.push(updated);
        }
        for date in &self.dates {
            if !date.is_empty() && !columns.contains(&date.as_str()) {
                columns.push(date);
            }
        }
        columns
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn default_base() -> String {
    MODEL_BASE.to_string()
}

fn default_primary_key() -> String {
    "id".to_string()
}

fn default_created_at() -> String {
    "created_at".to_string()
}

fn default_updated_at() -> String {
    "updated_at".to_string()
}

fn default_true() -> bool {
    true
}
