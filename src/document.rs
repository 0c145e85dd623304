//! Document Management
//!
//! A command document is a Markdown file with a YAML front matter header.
//! The document's identity is its filename; the declared `name` field must
//! match the filename stem.

use std::fs;
use std::io;
use std::path::Path;

/// A command documentation file held in memory for one validation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    filename: String,
    content: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Read a document from disk, keyed by its final path component
    pub fn read(path: &Path) -> io::Result<Self> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        Ok(Self { filename, content })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Filename without the `.md` extension; the document's identity
    pub fn stem(&self) -> &str {
        self.filename
            .strip_suffix(".md")
            .unwrap_or(&self.filename)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Extract a section's span: from the first occurrence of `heading` to
    /// the next line starting with `## `, or the end of the document.
    ///
    /// Presence is a substring check, so headings are matched wherever they
    /// first occur. Shared by the structure, pattern, and examples checks.
    pub fn section_span(&self, heading: &str) -> Option<&str> {
        section_span(&self.content, heading)
    }
}

/// Free-function form of [`Document::section_span`] for callers that only
/// hold the raw text.
pub fn section_span<'a>(content: &'a str, heading: &str) -> Option<&'a str> {
    let start = content.find(heading)?;
    let rest = &content[start..];
    // The span ends where the next second-level heading begins. Searching
    // for "\n## " cannot match the heading itself at offset zero.
    match rest.find("\n## ") {
        Some(end) => Some(&rest[..end + 1]),
        None => Some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_strips_md_extension() {
        let doc = Document::new("analyze.md", "");
        assert_eq!(doc.stem(), "analyze");

        let doc = Document::new("notes.txt", "");
        assert_eq!(doc.stem(), "notes.txt");
    }

    #[test]
    fn test_section_span_ends_at_next_heading() {
        let content = "## Examples\nsome text\nmore text\n## Boundaries\nrest";
        let span = section_span(content, "## Examples").unwrap();
        assert_eq!(span, "## Examples\nsome text\nmore text\n");
    }

    #[test]
    fn test_section_span_runs_to_end_of_document() {
        let content = "intro\n## Boundaries\nlast section text";
        let span = section_span(content, "## Boundaries").unwrap();
        assert_eq!(span, "## Boundaries\nlast section text");
    }

    #[test]
    fn test_section_span_missing_heading() {
        assert!(section_span("no headings here", "## Examples").is_none());
    }

    #[test]
    fn test_section_span_ignores_third_level_headings() {
        let content = "## Examples\n### Example 1\nbody\n### Example 2\n## Next";
        let span = section_span(content, "## Examples").unwrap();
        assert!(span.contains("### Example 1"));
        assert!(span.contains("### Example 2"));
        assert!(!span.contains("## Next"));
    }
}
