//! Core contracts and helpers for factorygen.
//!
//! This crate defines the model definition format, the schema snapshot
//! types, the property descriptors accumulated by the inference engine, and
//! the error type shared across crates.

pub mod config;
pub mod definition;
pub mod error;
pub mod property;
pub mod snapshot;

pub use config::ProjectConfig;
pub use definition::ModelDefinition;
pub use error::{Error, Result};
pub use property::{FieldDescriptor, PropertyDescriptor, PropertyMap};
pub use snapshot::{Column, Database, SchemaSnapshot, Table};

/// Current contract version for schema snapshot documents.
pub const SNAPSHOT_VERSION: &str = "0.1";
