//! Front Matter Extraction
//!
//! Locates and parses the YAML front matter block at the very start of a
//! document. Extraction failures are recorded as errors on the document's
//! result; the caller continues with structural checks either way.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::validation::ValidationResult;

/// `---` delimited block at the start of the document
static RE_FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---").unwrap());

/// Extract the front matter mapping, recording errors on `result`.
///
/// Returns `None` when the block is missing or malformed; field-level
/// checks are skipped in that case since there is nothing to check.
pub fn extract(content: &str, result: &mut ValidationResult) -> Option<Mapping> {
    let captures = match RE_FRONT_MATTER.captures(content) {
        Some(captures) => captures,
        None => {
            result.add_error("Missing YAML front matter");
            return None;
        }
    };

    let block = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(mapping)) => Some(mapping),
        Ok(_) => {
            result.add_error("Invalid YAML syntax: front matter is not a mapping");
            None
        }
        Err(e) => {
            result.add_error(format!("Invalid YAML syntax: {e}"));
            None
        }
    }
}
