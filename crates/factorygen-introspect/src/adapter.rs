use std::collections::BTreeMap;

use factorygen_core::{Error, FieldDescriptor, Result, SchemaSnapshot};

/// Ordered column listing for a model's backing table.
///
/// Type overrides must be registered before `columns` is called for them to
/// take effect on the returned descriptors.
pub trait SchemaIntrospector {
    /// Map a raw engine-reported type to a semantic type at listing time.
    fn register_type_override(&mut self, raw: &str, semantic: &str);

    /// List the table's columns in schema order.
    ///
    /// `database` of `None` addresses the snapshot's default database.
    fn columns(&self, database: Option<&str>, table: &str) -> Result<Vec<FieldDescriptor>>;
}

/// [`SchemaIntrospector`] backed by a loaded schema snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotIntrospector {
    snapshot: SchemaSnapshot,
    type_overrides: BTreeMap<String, String>,
}

impl SnapshotIntrospector {
    pub fn new(snapshot: SchemaSnapshot) -> Self {
        Self {
            snapshot,
            type_overrides: BTreeMap::new(),
        }
    }

    fn resolve_type(&self, raw: &str) -> String {
        self.type_overrides
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }
}

impl SchemaIntrospector for SnapshotIntrospector {
    fn register_type_override(&mut self, raw: &str, semantic: &str) {
        self.type_overrides
            .insert(raw.to_string(), semantic.to_string());
    }

    fn columns(&self, database: Option<&str>, table: &str) -> Result<Vec<FieldDescriptor>> {
        let db = self.snapshot.database(database).ok_or_else(|| {
            Error::UnknownTable(address(database, table))
        })?;
        let table = db
            .table(table)
            .ok_or_else(|| Error::UnknownTable(address(database, table)))?;

        Ok(table
            .columns
            .iter()
            .map(|column| FieldDescriptor {
                name: column.name.clone(),
                storage_type: self.resolve_type(&column.storage_type),
            })
            .collect())
    }
}

fn address(database: Option<&str>, table: &str) -> String {
    match database {
        Some(db) => format!("{db}.{table}"),
        None => table.to_string(),
    }
}
