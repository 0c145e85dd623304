//! Structure Checker
//!
//! Checks the document body for the command title line, the advisory
//! framework note, and the eight required section headings.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::REQUIRED_SECTIONS;
use crate::validation::ValidationResult;

/// Top-level command title, e.g. `# /sc:analyze`
static RE_COMMAND_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# /sc:\w+").unwrap());

const FRAMEWORK_NOTE: &str = "> **Context Framework Note**:";

/// Validate the title line and required section headings
pub fn validate_structure(content: &str, result: &mut ValidationResult) {
    if !RE_COMMAND_HEADER.is_match(content) {
        result.add_error("Missing command header (# /sc:command-name)");
    }

    if !content.contains(FRAMEWORK_NOTE) {
        result.add_warning("Missing Context Framework Note in header");
    }

    for section in REQUIRED_SECTIONS {
        let heading = format!("## {section}");
        let found = content
            .lines()
            .any(|line| line.starts_with(&heading));
        if !found {
            result.add_error(format!("Missing required section: {section}"));
        }
    }

    // Subsection markers are matched anywhere in the document, not just
    // inside the MCP Integration span. Intentionally permissive; see the
    // design notes before tightening.
    if content.contains("## MCP Integration") {
        if !content.contains("Knowledge & Memory Integration") {
            result.add_warning(
                "Missing 'Knowledge & Memory Integration' subsection in MCP Integration",
            );
        }
        if !content.contains("Workflow Integration (per AGENTS.md)") {
            result.add_warning(
                "Missing 'Workflow Integration (per AGENTS.md)' subsection in MCP Integration",
            );
        }
    }
}
