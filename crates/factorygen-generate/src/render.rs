use regex::Regex;

use factorygen_core::{ModelDefinition, PropertyMap};

/// Renders one appendable source block per model.
pub trait FactoryRenderer {
    /// Opening text of a fresh document, used in reset mode.
    fn document_header(&self) -> String;

    /// One factory block; blocks concatenate after the header into a
    /// syntactically coherent document.
    fn render(&self, definition: &ModelDefinition, properties: &PropertyMap) -> String;
}

/// Default renderer emitting `fake`-crate expressions.
#[derive(Debug, Default)]
pub struct RustRenderer;

impl RustRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FactoryRenderer for RustRenderer {
    fn document_header(&self) -> String {
        let mut header = String::new();
        header.push_str("//! Model factories. Generated by factorygen; regenerate instead of editing.\n\n");
        header.push_str("use fake::Fake;\n");
        header.push_str("use fake::faker::address::en::*;\n");
        header.push_str("use fake::faker::boolean::en::*;\n");
        header.push_str("use fake::faker::chrono::en::*;\n");
        header.push_str("use fake::faker::company::en::*;\n");
        header.push_str("use fake::faker::internet::en::*;\n");
        header.push_str("use fake::faker::lorem::en::*;\n");
        header.push_str("use fake::faker::name::en::*;\n");
        header.push_str("use fake::faker::phone_number::en::*;\n");
        header.push_str("use fake::uuid::UUIDv4;\n\n");
        header
    }

    fn render(&self, definition: &ModelDefinition, properties: &PropertyMap) -> String {
        let mut block = String::new();
        block.push_str(&format!("factory.define(\"{}\", |f| {{\n", definition.name));
        for (name, property) in properties {
            match &property.fake_expression {
                Some(expression) => {
                    block.push_str(&format!("    f.set(\"{name}\", {expression});\n"));
                }
                None => {
                    block.push_str(&format!(
                        "    // \"{name}\": no generator for type \"{}\"\n",
                        property.type_label
                    ));
                }
            }
        }
        block.push_str("});\n\n");
        block
    }
}

/// Whether `document` already defines a factory for `name`.
///
/// A plain pattern scan on the raw text, so manually edited documents still
/// count as long as the define call survives.
pub fn has_definition(document: &str, name: &str) -> bool {
    let pattern = format!(r#"factory\.define\(\s*"{}""#, regex::escape(name));
    let Ok(re) = Regex::new(&pattern) else {
        return false;
    };
    re.is_match(document)
}
