use serde::{Deserialize, Serialize};

/// Top-level schema snapshot for one or more databases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Contract version for this snapshot format.
    pub schema_version: String,
    pub databases: Vec<Database>,
}

/// A database holding introspected tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    /// Marks the database addressed when no `database.table` prefix is used.
    #[serde(default)]
    pub default: bool,
    pub tables: Vec<Table>,
}

/// A table with its ordered columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

/// Column metadata as captured at introspection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Raw storage type reported by the engine (e.g. `string`, `bigint`).
    pub storage_type: String,
}

impl SchemaSnapshot {
    /// Resolve a database by name, or the default one when unnamed.
    pub fn database(&self, name: Option<&str>) -> Option<&Database> {
        match name {
            Some(name) => self.databases.iter().find(|db| db.name == name),
            None => self
                .databases
                .iter()
                .find(|db| db.default)
                .or_else(|| self.databases.first()),
        }
    }
}

impl Database {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
