//! Report Aggregation
//!
//! Reduces per-document results into corpus statistics and renders the
//! human-readable report.

use std::fmt::Write;

use crate::validation::ValidationResult;

/// Substring identifying the workflow-missing warning; documents without
/// it count as having adopted the ByteRover integration.
const WORKFLOW_WARNING_MARKER: &str = "ByteRover workflow";

/// Aggregate statistics over one validation run
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub failing: Vec<String>,
    pub with_byterover: usize,
}

impl CorpusSummary {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        let failing: Vec<String> = results
            .iter()
            .filter(|r| !r.passed())
            .map(|r| r.filename().to_string())
            .collect();
        let with_byterover = results
            .iter()
            .filter(|r| {
                !r.warnings()
                    .iter()
                    .any(|w| w.contains(WORKFLOW_WARNING_MARKER))
            })
            .count();

        Self {
            total,
            passed,
            failed: total - passed,
            total_errors: results.iter().map(|r| r.errors().len()).sum(),
            total_warnings: results.iter().map(|r| r.warnings().len()).sum(),
            failing,
            with_byterover,
        }
    }

    pub fn pass_percentage(&self) -> f64 {
        percentage(self.passed, self.total)
    }

    pub fn fail_percentage(&self) -> f64 {
        percentage(self.failed, self.total)
    }

    pub fn byterover_percentage(&self) -> f64 {
        percentage(self.with_byterover, self.total)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Render the full report: per-document detail (unless `summary_only`)
/// followed by the summary block.
pub fn render_results(results: &[ValidationResult], summary_only: bool) -> String {
    if results.is_empty() {
        return "No validation results to display\n".to_string();
    }

    let mut out = String::new();

    if !summary_only {
        for result in results {
            let status = if result.passed() {
                "✅ PASS"
            } else {
                "❌ FAIL"
            };
            let _ = writeln!(out, "\n{status} - {}", result.filename());
            let _ = writeln!(out, "{}", "-".repeat(60));

            if !result.errors().is_empty() {
                let _ = writeln!(out, "\n  ERRORS:");
                for error in result.errors() {
                    let _ = writeln!(out, "    ❌ {error}");
                }
            }

            if !result.warnings().is_empty() {
                let _ = writeln!(out, "\n  WARNINGS:");
                for warning in result.warnings() {
                    let _ = writeln!(out, "    ⚠️  {warning}");
                }
            }

            if !result.info().is_empty() && result.errors().is_empty() {
                let _ = writeln!(out, "\n  INFO:");
                for info in result.info() {
                    let _ = writeln!(out, "    ℹ️  {info}");
                }
            }
        }
    }

    let summary = CorpusSummary::from_results(results);
    let _ = writeln!(out, "\n{}", "=".repeat(60));
    let _ = writeln!(out, "VALIDATION SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "Total Commands:   {}", summary.total);
    let _ = writeln!(
        out,
        "Passed:           {} ({:.1}%)",
        summary.passed,
        summary.pass_percentage()
    );
    let _ = writeln!(
        out,
        "Failed:           {} ({:.1}%)",
        summary.failed,
        summary.fail_percentage()
    );
    let _ = writeln!(out, "Total Errors:     {}", summary.total_errors);
    let _ = writeln!(out, "Total Warnings:   {}", summary.total_warnings);
    let _ = writeln!(out, "{}", "=".repeat(60));

    if summary.failed > 0 {
        let _ = writeln!(out, "\n❌ VALIDATION FAILED");
        let _ = writeln!(out, "\nFailed commands:");
        for filename in &summary.failing {
            let _ = writeln!(out, "  - {filename}");
        }
    } else {
        let _ = writeln!(out, "\n✅ ALL COMMANDS PASSED VALIDATION");
    }

    let _ = writeln!(
        out,
        "\nByteRover Integration: {}/{} commands ({:.1}%)",
        summary.with_byterover,
        summary.total,
        summary.byterover_percentage()
    );

    out
}
