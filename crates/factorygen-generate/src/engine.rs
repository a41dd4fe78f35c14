use std::collections::HashSet;

use tracing::{debug, info, warn};

use factorygen_core::ProjectConfig;
use factorygen_introspect::SchemaIntrospector;

use crate::infer::infer;
use crate::registry::ModelRegistry;
use crate::render::{FactoryRenderer, has_definition};

/// Orchestrates one generation run over an ordered candidate list.
///
/// Owns nothing: collaborators are borrowed for the duration of the run and
/// the accumulated document is returned to the caller, which persists it.
pub struct Generator<'a> {
    registry: &'a ModelRegistry,
    introspector: &'a mut dyn SchemaIntrospector,
    renderer: &'a dyn FactoryRenderer,
    config: &'a ProjectConfig,
}

impl<'a> Generator<'a> {
    pub fn new(
        registry: &'a ModelRegistry,
        introspector: &'a mut dyn SchemaIntrospector,
        renderer: &'a dyn FactoryRenderer,
        config: &'a ProjectConfig,
    ) -> Self {
        Self {
            registry,
            introspector,
            renderer,
            config,
        }
    }

    /// Produce the merged output document.
    ///
    /// Candidates are processed strictly in order; a failure while analyzing
    /// one model is reported and never aborts the run. Models already
    /// defined in `existing_document` are skipped unless `reset` is set, in
    /// which case the prior content is discarded entirely.
    pub fn run(
        &mut self,
        model_names: &[String],
        ignore_csv: &str,
        existing_document: &str,
        reset: bool,
    ) -> String {
        let mut ignore = parse_ignore(ignore_csv);
        let mut output = if reset {
            self.renderer.document_header()
        } else {
            existing_document.to_string()
        };

        info!(
            candidates = model_names.len(),
            reset,
            "generation run started"
        );

        for name in model_names {
            if ignore.contains(name) {
                debug!(model = %name, "ignoring model");
                continue;
            }

            let Some(definition) = self.registry.load(name) else {
                continue;
            };
            if !definition.is_model() {
                continue;
            }

            if !reset && has_definition(existing_document, name) {
                debug!(model = %name, "model already has a factory");
                continue;
            }

            if !definition.is_concrete() {
                continue;
            }

            debug!(model = %name, "loading model");
            match infer(definition, &mut *self.introspector, self.config) {
                Ok(properties) => {
                    output.push_str(&self.renderer.render(definition, &properties));
                    ignore.insert(name.clone());
                    info!(model = %name, fields = properties.len(), "factory generated");
                }
                Err(err) => {
                    warn!(model = %name, error = %err, "could not analyze model");
                }
            }
        }

        output
    }
}

/// Parse the ignore option; an empty string yields an empty set.
fn parse_ignore(csv: &str) -> HashSet<String> {
    csv.split(',')
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
