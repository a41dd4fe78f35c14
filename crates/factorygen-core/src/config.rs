use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Project-level configuration read from `factorygen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Prefix prepended to every model's table name.
    pub table_prefix: String,
    /// Raw storage type to semantic type overrides, applied before columns
    /// are listed.
    pub type_overrides: BTreeMap<String, String>,
}

impl ProjectConfig {
    pub const FILE_NAME: &'static str = "factorygen.toml";

    /// Load the config from a project root; a missing file yields defaults.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
