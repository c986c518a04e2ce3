// Rust guideline compliant 2026-10-14

//! Implementation of `gatehouse validate <container>`.

use crate::git::repository_root;
use crate::terminal::{print_error, print_success};
use anyhow::Result;
use gatehouse_core::{Config, ToolOutcome};
use gatehouse_hooks::{validate_with_config, ValidationReport};
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Runs the validation suite against one container and prints a table.
///
/// # Errors
///
/// Returns an error if the container is unknown, the configuration is
/// invalid, or any validator fails.
pub fn execute(repo_path: &Path, container: &str) -> Result<()> {
    let root = repository_root(repo_path)?;
    let config = Config::load(&root)?;
    let report = validate_with_config(&config, &root, container)?;

    println!("{}", render_report(&report));

    if report.passed() {
        print_success(&format!("All validations passed for {}", report.container));
        Ok(())
    } else {
        let failures = report.failures().join(", ");
        print_error(&format!("Validation failed for {}: {}", report.container, failures));
        anyhow::bail!("{} validator(s) failed", report.failures().len())
    }
}

/// Renders a report as a table of validator, target and result.
pub fn render_report(report: &ValidationReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Validator", "Target", "Result"]);

    for result in &report.results {
        let verdict = match &result.outcome {
            ToolOutcome::Passed => "passed".to_string(),
            ToolOutcome::Failed { code: Some(code) } => format!("failed (exit code {})", code),
            ToolOutcome::Failed { code: None } => "failed (signal)".to_string(),
            ToolOutcome::Missing { what } => format!("skipped ({} not found)", what),
        };
        builder.push_record(vec![result.label.as_str(), result.target.as_str(), verdict.as_str()]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}
