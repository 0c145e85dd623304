//! Configuration management for the command documentation validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Commands directory resolution

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "cmddoc-validate")]
#[command(about = "Validate command documentation files")]
#[command(version)]
pub struct Args {
    /// Specific command file to validate (validates the whole corpus when omitted)
    pub file: Option<String>,

    /// Show summary only (no detailed output)
    #[arg(long)]
    pub summary: bool,

    /// Treat warnings as errors (fail validation)
    #[arg(long)]
    pub strict: bool,

    /// Path to the commands directory
    #[arg(long, default_value = "SuperClaude/Commands")]
    pub commands_dir: PathBuf,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Single file to validate, if any
    pub file: Option<String>,
    /// Summary-only output mode
    pub summary_only: bool,
    /// Fail on warnings
    pub strict: bool,
    /// Directory holding the command corpus
    pub commands_dir: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            file: args.file,
            summary_only: args.summary,
            strict: args.strict,
            commands_dir: args.commands_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["cmddoc-validate"]);
        let config = Config::from_args(args).unwrap();
        assert!(config.file.is_none());
        assert!(!config.summary_only);
        assert!(!config.strict);
        assert_eq!(config.commands_dir, PathBuf::from("SuperClaude/Commands"));
    }

    #[test]
    fn test_flags_and_file() {
        let args = Args::parse_from([
            "cmddoc-validate",
            "analyze.md",
            "--summary",
            "--strict",
            "--commands-dir",
            "/tmp/commands",
        ]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.file.as_deref(), Some("analyze.md"));
        assert!(config.summary_only);
        assert!(config.strict);
        assert_eq!(config.commands_dir, PathBuf::from("/tmp/commands"));
    }
}
