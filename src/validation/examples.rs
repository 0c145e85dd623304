//! Examples Counter
//!
//! Counts labeled example entries inside the Examples section and grades
//! the count against the recommended minimum.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::section_span;
use crate::validation::ValidationResult;

const EXAMPLES_SECTION: &str = "## Examples";

/// Third-level heading containing the word "Example"
static RE_EXAMPLE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^###.*Example").unwrap());

/// Count example entries and grade the section.
///
/// Short-circuits when the section is missing; there is nothing to count.
pub fn validate_examples(content: &str, result: &mut ValidationResult) {
    let Some(span) = section_span(content, EXAMPLES_SECTION) else {
        result.add_error("Missing Examples section");
        return;
    };

    let count = RE_EXAMPLE_ENTRY.find_iter(span).count();
    if count < 3 {
        result.add_warning(format!(
            "Only {count} example(s) provided (minimum 3 recommended)"
        ));
    } else if count >= 5 {
        result.add_info(format!("✓ Excellent examples section ({count} examples)"));
    } else {
        result.add_info(format!("✓ Good examples section ({count} examples)"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> ValidationResult {
        let mut result = ValidationResult::new("test.md");
        validate_examples(content, &mut result);
        result
    }

    fn doc_with_examples(count: usize) -> String {
        let mut content = String::from("# /sc:test\n\n## Examples\n\n");
        for i in 1..=count {
            content.push_str(&format!("### Example {i}: Scenario\n```\ncode\n```\n\n"));
        }
        content.push_str("## Boundaries\nlimits\n");
        content
    }

    #[test]
    fn test_missing_section_is_terminal_error() {
        let result = check("# /sc:test\nno examples\n");
        assert_eq!(result.errors(), ["Missing Examples section"]);
        assert!(result.warnings().is_empty());
        assert!(result.info().is_empty());
    }

    #[test]
    fn test_two_examples_warns_with_count() {
        let result = check(&doc_with_examples(2));
        assert_eq!(
            result.warnings(),
            ["Only 2 example(s) provided (minimum 3 recommended)"]
        );
        assert!(result.info().is_empty());
    }

    #[test]
    fn test_three_examples_is_good() {
        let result = check(&doc_with_examples(3));
        assert_eq!(result.info(), ["✓ Good examples section (3 examples)"]);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_four_examples_is_good() {
        let result = check(&doc_with_examples(4));
        assert_eq!(result.info(), ["✓ Good examples section (4 examples)"]);
    }

    #[test]
    fn test_five_examples_is_excellent() {
        let result = check(&doc_with_examples(5));
        assert_eq!(result.info(), ["✓ Excellent examples section (5 examples)"]);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_entries_outside_span_do_not_count() {
        let content = "## Examples\n### Example 1\n### Example 2\n### Example 3\n\
                       ## Boundaries\n### Example extra\n";
        let result = check(content);
        assert_eq!(result.info(), ["✓ Good examples section (3 examples)"]);
    }

    #[test]
    fn test_heading_without_example_word_not_counted() {
        let content = "## Examples\n### Basic Usage\n### Advanced Usage\n";
        let result = check(content);
        assert_eq!(
            result.warnings(),
            ["Only 0 example(s) provided (minimum 3 recommended)"]
        );
    }
}
