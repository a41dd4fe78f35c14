use thiserror::Error;

/// Core error type shared across factorygen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema snapshot document is malformed or incompatible.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
    /// The addressed table is missing from the schema snapshot.
    #[error("table '{0}' not found in schema snapshot")]
    UnknownTable(String),
    /// A model definition file could not be understood.
    #[error("invalid model definition: {0}")]
    Definition(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias for results returned by factorygen crates.
pub type Result<T> = std::result::Result<T, Error>;
