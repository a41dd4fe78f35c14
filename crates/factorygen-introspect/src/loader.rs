use std::path::Path;

use tracing::debug;

use factorygen_core::{Error, Result, SchemaSnapshot, SNAPSHOT_VERSION};

/// Load and validate a schema snapshot document.
pub fn load_snapshot(path: &Path) -> Result<SchemaSnapshot> {
    let contents = std::fs::read_to_string(path)?;
    let snapshot: SchemaSnapshot = serde_json::from_str(&contents)?;
    validate_snapshot(&snapshot)?;
    debug!(
        path = %path.display(),
        databases = snapshot.databases.len(),
        "schema snapshot loaded"
    );
    Ok(snapshot)
}

/// Check snapshot invariants before it is served to the engine.
pub fn validate_snapshot(snapshot: &SchemaSnapshot) -> Result<()> {
    if snapshot.schema_version != SNAPSHOT_VERSION {
        return Err(Error::Snapshot(format!(
            "unsupported schema_version '{}', expected '{}'",
            snapshot.schema_version, SNAPSHOT_VERSION
        )));
    }
    if snapshot.databases.is_empty() {
        return Err(Error::Snapshot("snapshot contains no databases".to_string()));
    }
    let defaults = snapshot.databases.iter().filter(|db| db.default).count();
    if defaults > 1 {
        return Err(Error::Snapshot(
            "snapshot declares more than one default database".to_string(),
        ));
    }
    Ok(())
}
