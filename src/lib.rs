//! Command Documentation Validator
//!
//! A rule-based checker for command documentation files: Markdown documents
//! with a YAML front matter header.
//!
//! This library provides:
//! - Front matter extraction and metadata field validation
//! - Required-section and title structure checks
//! - Cross-section workflow pattern detection
//! - Corpus-level report aggregation

pub mod config;
pub mod document;
pub mod frontmatter;
pub mod runner;
pub mod schema;
pub mod summary;
pub mod templates;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use document::Document;
pub use summary::CorpusSummary;
pub use validation::{ValidationResult, validate_document, validate_file};
