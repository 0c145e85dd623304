//! Cross-Section Pattern Checker
//!
//! Verifies the MCP Integration section mentions the knowledge-management
//! servers, and detects the ByteRover before/during/after workflow pattern
//! across the whole document.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::section_span;
use crate::validation::ValidationResult;

const MCP_SECTION: &str = "## MCP Integration";

/// Markers that indicate the retrieve-before / store-after workflow is
/// documented. Any single match counts.
static WORKFLOW_MARKERS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)Workflow Integration \(per AGENTS\.md\)").unwrap(),
        Regex::new(r"(?i)byterover-retrieve-knowledge").unwrap(),
        Regex::new(r"(?i)byterover-store-knowledge").unwrap(),
        Regex::new(r"(?i)Before.*byterover").unwrap(),
        Regex::new(r"(?i)After.*byterover").unwrap(),
    ]
});

// Phase markers match within a single line: the phase word must precede
// the server keyword.
static RE_BEFORE_PHASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Before.*byterover").unwrap());
static RE_DURING_PHASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)During.*basic-memory").unwrap());
static RE_AFTER_PHASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)After.*byterover").unwrap());

/// Check the MCP Integration section for knowledge-server mentions.
///
/// Short-circuits when the section is missing; the span checks are
/// meaningless without it.
pub fn validate_mcp_integration(content: &str, result: &mut ValidationResult) {
    let Some(span) = section_span(content, MCP_SECTION) else {
        result.add_error("Missing MCP Integration section");
        return;
    };

    if !span.contains("ByteRover") {
        result.add_warning("MCP Integration missing ByteRover mention");
    }
    if !span.contains("Basic-Memory") && !span.contains("basic-memory") {
        result.add_warning("MCP Integration missing Basic-Memory mention");
    }
}

/// Detect the ByteRover workflow markers and the three-phase pattern.
///
/// Both checks run document-wide, independently of the MCP Integration
/// section span.
pub fn validate_byterover_workflow(content: &str, result: &mut ValidationResult) {
    let has_workflow = WORKFLOW_MARKERS
        .iter()
        .any(|marker| marker.is_match(content));
    if !has_workflow {
        result.add_warning(
            "Missing ByteRover workflow integration (retrieve before, store after pattern)",
        );
    }

    let has_before = RE_BEFORE_PHASE.is_match(content);
    let has_during = RE_DURING_PHASE.is_match(content);
    let has_after = RE_AFTER_PHASE.is_match(content);

    if has_before && has_during && has_after {
        result.add_info("✓ Complete ByteRover workflow integration (3-step pattern)");
    } else if has_before || has_during || has_after {
        result.add_warning("Partial ByteRover workflow integration (missing steps)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_mcp(content: &str) -> ValidationResult {
        let mut result = ValidationResult::new("test.md");
        validate_mcp_integration(content, &mut result);
        result
    }

    fn check_workflow(content: &str) -> ValidationResult {
        let mut result = ValidationResult::new("test.md");
        validate_byterover_workflow(content, &mut result);
        result
    }

    #[test]
    fn test_missing_section_is_terminal_error() {
        let result = check_mcp("# /sc:test\nno integration section\n");
        assert_eq!(result.errors(), ["Missing MCP Integration section"]);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_section_with_both_mentions_is_clean() {
        let content = "## MCP Integration\nByteRover and basic-memory coordination\n## Next\n";
        let result = check_mcp(content);
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_mentions_outside_span_do_not_count() {
        let content = "ByteRover mentioned early\nbasic-memory too\n\
                       ## MCP Integration\nnothing relevant\n## Next\nByteRover again\n";
        let result = check_mcp(content);
        assert!(result
            .warnings()
            .contains(&"MCP Integration missing ByteRover mention".to_string()));
        assert!(result
            .warnings()
            .contains(&"MCP Integration missing Basic-Memory mention".to_string()));
    }

    #[test]
    fn test_basic_memory_either_spelling() {
        let content = "## MCP Integration\nByteRover with Basic-Memory\n";
        assert!(check_mcp(content).warnings().is_empty());

        let content = "## MCP Integration\nByteRover with basic-memory\n";
        assert!(check_mcp(content).warnings().is_empty());
    }

    #[test]
    fn test_no_workflow_markers_warns() {
        let result = check_workflow("# /sc:test\nplain document\n");
        assert_eq!(
            result.warnings(),
            ["Missing ByteRover workflow integration (retrieve before, store after pattern)"]
        );
    }

    #[test]
    fn test_any_single_marker_counts_as_workflow() {
        for content in [
            "uses byterover-retrieve-knowledge for context",
            "uses byterover-store-knowledge afterwards",
            "### Workflow Integration (per AGENTS.md)",
            "Before each run, query byterover",
        ] {
            let result = check_workflow(content);
            assert!(
                !result
                    .warnings()
                    .iter()
                    .any(|w| w.contains("Missing ByteRover workflow")),
                "marker should satisfy workflow check: {content}"
            );
        }
    }

    #[test]
    fn test_complete_three_phase_pattern_is_info() {
        let content = "Before: retrieve from byterover\n\
                       During: track in basic-memory\n\
                       After: store to byterover\n";
        let result = check_workflow(content);
        assert_eq!(
            result.info(),
            ["✓ Complete ByteRover workflow integration (3-step pattern)"]
        );
        assert!(!result
            .warnings()
            .iter()
            .any(|w| w.contains("Partial ByteRover workflow")));
    }

    #[test]
    fn test_case_insensitive_phases() {
        let content = "BEFORE: ByteRover lookup\nduring: Basic-Memory notes\nafter: BYTEROVER store\n";
        let result = check_workflow(content);
        assert_eq!(result.info().len(), 1);
    }

    #[test]
    fn test_partial_pattern_is_single_warning() {
        let content = "Before each command, check byterover for context\n";
        let result = check_workflow(content);
        let partial: Vec<&String> = result
            .warnings()
            .iter()
            .filter(|w| w.contains("Partial ByteRover workflow"))
            .collect();
        assert_eq!(partial.len(), 1);
        assert!(result.info().is_empty());
    }

    #[test]
    fn test_phase_must_precede_keyword_on_same_line() {
        // Keyword on a different line than the phase word does not match
        let content = "Before anything else\nconsult byterover later\n";
        let result = check_workflow(content);
        assert!(result.info().is_empty());
        assert!(!result
            .warnings()
            .iter()
            .any(|w| w.contains("Partial ByteRover workflow")));
    }

    #[test]
    fn test_zero_phases_only_workflow_warning() {
        let result = check_workflow("nothing here\n");
        assert_eq!(result.warnings().len(), 1);
        assert!(result.info().is_empty());
    }
}
