//! Corpus Runner
//!
//! Thin I/O wrapper around the validation engine: collects the corpus
//! files, validates each one in sorted order, and decides the exit status.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::Config;
use crate::validation::{ValidationResult, validate_file};

/// Filenames excluded from corpus runs
const EXCLUDED_FILES: &[&str] = &["README.md", "TEMPLATE.md"];

/// Validate the corpus (or the single configured file), in sorted order
pub fn run_validation(config: &Config) -> Result<Vec<ValidationResult>> {
    if !config.commands_dir.exists() {
        bail!(
            "Commands directory not found: {}",
            config.commands_dir.display()
        );
    }

    match &config.file {
        Some(file) => {
            let path = config.commands_dir.join(file);
            if !path.exists() {
                bail!("File not found: {}", path.display());
            }
            Ok(vec![validate_file(&path)])
        }
        None => {
            let files = collect_command_files(&config.commands_dir)?;
            log::debug!("validating {} command files", files.len());
            Ok(files.iter().map(|path| validate_file(path)).collect())
        }
    }
}

/// All `*.md` files in the directory except README, TEMPLATE, and backups,
/// sorted by filename for reproducible output.
pub fn collect_command_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".md") || name.ends_with(".bak") {
            continue;
        }
        if EXCLUDED_FILES.contains(&name) {
            log::debug!("skipping {name}");
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Exit status for a finished run: failures always fail; under strict
/// mode any warning fails too.
pub fn exit_code(results: &[ValidationResult], strict: bool) -> i32 {
    if results.iter().any(|r| !r.passed()) {
        return 1;
    }
    if strict && results.iter().any(|r| !r.warnings().is_empty()) {
        return 1;
    }
    0
}
