use crate::registry::ModelRegistry;

/// Produce the ordered candidate model list for a generation run.
///
/// Explicit names win over scanning; each entry may itself be a
/// comma-separated list. Duplicates survive here and are filtered later by
/// the generation loop's ignore set.
pub fn discover(explicit: &[String], registry: &ModelRegistry) -> Vec<String> {
    if explicit.is_empty() {
        return registry.scanned_names().to_vec();
    }

    explicit
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(|name| name.to_string())
        .collect()
}
