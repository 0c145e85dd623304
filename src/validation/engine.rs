//! Validation Engine
//!
//! Runs every checker against a document in a fixed order, accumulating
//! findings into one result. No checker is skipped because an earlier one
//! failed; only the pattern and examples checks short-circuit internally,
//! and only after recording their own terminal error.

use std::path::Path;

use crate::document::Document;
use crate::frontmatter;
use crate::validation::ValidationResult;
use crate::validation::{examples, integration, metadata, structure};

/// Validate a document already held in memory
pub fn validate_document(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new(document.filename());
    let content = document.content();

    if let Some(front_matter) = frontmatter::extract(content, &mut result) {
        metadata::validate_metadata(&front_matter, document.stem(), &mut result);
    }

    structure::validate_structure(content, &mut result);
    integration::validate_mcp_integration(content, &mut result);
    integration::validate_byterover_workflow(content, &mut result);
    examples::validate_examples(content, &mut result);

    result
}

/// Validate a file on disk.
///
/// A file that cannot be read yields a single failing result rather than
/// an error, so a corpus run always completes for the remaining files.
pub fn validate_file(path: &Path) -> ValidationResult {
    match Document::read(path) {
        Ok(document) => validate_document(&document),
        Err(e) => {
            log::warn!("could not read {}: {e}", path.display());
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut result = ValidationResult::new(filename);
            result.add_error(format!("Failed to validate file: {e}"));
            result
        }
    }
}
