//! Schema introspection over snapshot documents.
//!
//! The generation loop never talks to a live database; it reads columns
//! through the [`SchemaIntrospector`] trait, implemented here over a
//! `schema.json` snapshot captured ahead of time.

pub mod adapter;
pub mod loader;

pub use adapter::{SchemaIntrospector, SnapshotIntrospector};
pub use loader::load_snapshot;
