//! Field Validator
//!
//! Checks the extracted front matter mapping for required fields, enum
//! membership, and value shape. Every field is checked independently; one
//! missing field never hides another.

use serde_yaml::{Mapping, Value};

use crate::schema::{
    CORE_MCP_SERVERS, Category, Complexity, KNOWN_MCP_SERVERS, KNOWN_PERSONAS,
};
use crate::validation::ValidationResult;

const REQUIRED_FIELDS: &[&str] = &["name", "description", "category", "complexity", "mcp-servers"];

/// Validate metadata completeness and correctness.
///
/// `stem` is the filename-derived identity the `name` field must match.
pub fn validate_metadata(metadata: &Mapping, stem: &str, result: &mut ValidationResult) {
    for field in REQUIRED_FIELDS {
        if !metadata.contains_key(Value::from(*field)) {
            result.add_error(format!("Missing required field: {field}"));
        }
    }

    if let Some(name) = metadata.get(Value::from("name")) {
        let declared = scalar_text(name);
        if declared != stem {
            result.add_error(format!(
                "Name mismatch: metadata '{declared}' != filename '{stem}'"
            ));
        }
    }

    if let Some(Value::String(desc)) = metadata.get(Value::from("description")) {
        let length = desc.chars().count();
        if length > 100 {
            result.add_warning(format!("Description too long ({length} chars, max 100)"));
        }
        if desc.matches('.').count() > 1 {
            result.add_warning("Description should be a single sentence");
        }
    }

    if let Some(category) = metadata.get(Value::from("category")) {
        let value = scalar_text(category);
        if Category::from_str(&value).is_none() {
            result.add_error(format!(
                "Invalid category '{}'. Must be one of: {}",
                value,
                Category::valid_values()
            ));
        }
    }

    if let Some(complexity) = metadata.get(Value::from("complexity")) {
        let value = scalar_text(complexity);
        if Complexity::from_str(&value).is_none() {
            result.add_error(format!(
                "Invalid complexity '{}'. Must be one of: {}",
                value,
                Complexity::valid_values()
            ));
        }
    }

    if let Some(servers) = metadata.get(Value::from("mcp-servers")) {
        match servers.as_sequence() {
            None => result.add_error("mcp-servers must be a list"),
            Some(entries) => {
                let names: Vec<String> = entries.iter().map(scalar_text).collect();

                let unknown: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .filter(|name| !KNOWN_MCP_SERVERS.contains(name))
                    .collect();
                if !unknown.is_empty() {
                    result.add_warning(format!("Unknown MCP servers: {}", unknown.join(", ")));
                }

                let missing_core: Vec<&str> = CORE_MCP_SERVERS
                    .iter()
                    .copied()
                    .filter(|core| !names.iter().any(|name| name == core))
                    .collect();
                if !missing_core.is_empty() {
                    result.add_warning(format!(
                        "Missing recommended core servers: {}",
                        missing_core.join(", ")
                    ));
                }
            }
        }
    }

    // Optional field
    if let Some(personas) = metadata.get(Value::from("personas")) {
        match personas.as_sequence() {
            None => result.add_error("personas must be a list"),
            Some(entries) => {
                let names: Vec<String> = entries.iter().map(scalar_text).collect();
                let unknown: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .filter(|name| !KNOWN_PERSONAS.contains(name))
                    .collect();
                if !unknown.is_empty() {
                    result.add_warning(format!("Unknown personas: {}", unknown.join(", ")));
                }
            }
        }
    }
}

/// Render a YAML scalar the way it reads in the document, for messages and
/// comparisons. Non-string scalars fall back to their YAML rendering.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_yaml::to_string(other)
            .map(|rendered| rendered.trim_end().to_string())
            .unwrap_or_default(),
    }
}
