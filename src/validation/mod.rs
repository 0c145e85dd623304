//! Validation Engine
//!
//! Independent check functions composed by the engine; each appends its
//! findings to the shared per-document result.

pub mod engine;
pub mod examples;
pub mod integration;
pub mod metadata;
pub mod result;
pub mod structure;

pub use engine::{validate_document, validate_file};
pub use result::ValidationResult;
