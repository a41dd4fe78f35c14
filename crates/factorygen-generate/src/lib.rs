//! Factory generation engine for factorygen.
//!
//! This crate turns discovered model definitions into appendable factory
//! source blocks: discovery and filtering, the schema-to-fake-value
//! inference engine, the renderer, and the idempotent generation loop.

pub mod discover;
pub mod engine;
pub mod infer;
pub mod registry;
pub mod render;

pub use discover::discover;
pub use engine::Generator;
pub use infer::infer;
pub use registry::ModelRegistry;
pub use render::{FactoryRenderer, RustRenderer};
