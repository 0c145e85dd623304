//! Validation Result
//!
//! Per-document record of findings. Errors fail the document; warnings and
//! info notes never do on their own (strict mode is an exit-code concern
//! handled by the runner).

/// Findings for a single command document
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    filename: String,
    errors: Vec<String>,
    warnings: Vec<String>,
    info: Vec<String>,
}

impl ValidationResult {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            info: Vec::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.info.push(message.into());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// A document passes iff it has no errors; warnings never fail it
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_with_no_findings() {
        let result = ValidationResult::new("analyze.md");
        assert!(result.passed());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut result = ValidationResult::new("analyze.md");
        result.add_warning("Test warning");
        result.add_info("Test info");
        assert!(result.passed());
    }

    #[test]
    fn test_errors_fail() {
        let mut result = ValidationResult::new("analyze.md");
        result.add_error("Test error");
        assert!(!result.passed());
    }

    #[test]
    fn test_findings_keep_insertion_order() {
        let mut result = ValidationResult::new("analyze.md");
        result.add_error("first");
        result.add_error("second");
        assert_eq!(result.errors(), ["first", "second"]);
    }
}
