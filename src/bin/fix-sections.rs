//! Repair tool: inserts missing sections into a command document.
//!
//! The validator supplies the list of missing sections; this tool only
//! performs the insertion. Sections are added immediately before the
//! `## Boundaries` heading, or appended when there is none.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cmddoc_validator::templates;
use cmddoc_validator::validation::validate_file;

#[derive(Debug, Parser)]
#[command(name = "cmddoc-fix-sections")]
#[command(about = "Insert missing sections into a command documentation file")]
#[command(version)]
struct Args {
    /// Command file to repair
    file: String,

    /// Section to insert (repeatable); defaults to every missing section
    /// the validator reports that has a template
    #[arg(long = "section")]
    sections: Vec<String>,

    /// Path to the commands directory
    #[arg(long, default_value = "SuperClaude/Commands")]
    commands_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = args.commands_dir.join(&args.file);
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let sections = if args.sections.is_empty() {
        missing_templated_sections(&path)
    } else {
        args.sections.clone()
    };

    if sections.is_empty() {
        println!("Nothing to add: {} has all templated sections", args.file);
        return Ok(());
    }

    let mut content =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;

    for section in &sections {
        match templates::insert_section(&content, section) {
            Some(updated) => {
                content = updated;
                println!("  ✓ Added {section} to {}", args.file);
            }
            None => log::warn!("no template for section '{section}', skipping"),
        }
    }

    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Sections the validator reports missing, filtered to those with a template
fn missing_templated_sections(path: &std::path::Path) -> Vec<String> {
    let result = validate_file(path);
    result
        .errors()
        .iter()
        .filter_map(|error| error.strip_prefix("Missing required section: "))
        .filter(|section| templates::template_for(section).is_some())
        .map(str::to_string)
        .collect()
}
