use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use factorygen_core::ModelDefinition;

/// Registry of model definitions discovered from definition files.
///
/// Scanning is additive: definitions from later directories never displace
/// an earlier definition with the same name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    definitions: HashMap<String, ModelDefinition>,
    scanned: Vec<String>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition directly, as a scanned file would.
    pub fn register(&mut self, definition: ModelDefinition) {
        self.scanned.push(definition.name.clone());
        self.definitions
            .entry(definition.name.clone())
            .or_insert(definition);
    }

    /// Scan a directory tree for `*.toml` model definition files.
    ///
    /// A missing or unreadable directory contributes nothing; a malformed
    /// definition file is reported and skipped.
    pub fn scan(&mut self, dir: &Path) {
        if !dir.exists() {
            debug!(dir = %dir.display(), "scan directory does not exist");
            return;
        }

        for path in definition_files(dir) {
            let contents = match std::fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "unreadable definition file");
                    continue;
                }
            };
            match ModelDefinition::parse(&contents) {
                Ok(definition) => {
                    debug!(model = %definition.name, path = %path.display(), "definition scanned");
                    self.register(definition);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping definition file");
                }
            }
        }
    }

    /// Scan each directory in order, resolved against the project root.
    pub fn scan_dirs(&mut self, project_root: &Path, dirs: &[PathBuf]) {
        for dir in dirs {
            self.scan(&project_root.join(dir));
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn load(&self, name: &str) -> Option<&ModelDefinition> {
        self.definitions.get(name)
    }

    /// Model names in scan order, duplicates included.
    pub fn scanned_names(&self) -> &[String] {
        &self.scanned
    }
}

/// Definition files under `dir`, sorted for stable discovery order.
fn definition_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_definition_files(dir, &mut files);
    files.sort();
    files
}

fn collect_definition_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "unreadable scan directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_definition_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
}
