// Rust guideline compliant 2026-10-13

//! Container validation runner.
//!
//! Runs every validator in the configured suite against one container. Unlike
//! the gates, a failing validator does not stop the run; the report collects
//! all outcomes.

use gatehouse_core::{
    is_group_name, Config, Error, GroupMatcher, ProcessTool, Result, Runnable, SuiteEntry,
    ToolOutcome,
};
use std::path::Path;

/// Result of one validator in the suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorResult {
    /// Validator label.
    pub label: String,
    /// Argument the validator was given.
    pub target: String,
    /// How it ended.
    pub outcome: ToolOutcome,
}

/// Outcome of validating a single container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Container name.
    pub container: String,
    /// Per-validator results, in suite order.
    pub results: Vec<ValidatorResult>,
}

impl ValidationReport {
    /// Returns whether no validator failed. Missing validators do not count.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self
            .results
            .iter()
            .any(|result| matches!(result.outcome, ToolOutcome::Failed { .. }))
    }

    /// Labels of validators that failed.
    pub fn failures(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|result| matches!(result.outcome, ToolOutcome::Failed { .. }))
            .map(|result| result.label.as_str())
            .collect()
    }
}

/// Validates a container using tools produced by `make_tool`.
///
/// # Arguments
///
/// * `config` - Gate configuration (supplies the suite and containers root)
/// * `root` - Repository working tree root
/// * `container` - Container name
/// * `make_tool` - Builds the runnable for a suite entry
///
/// # Errors
///
/// Returns an error if:
/// - `container` is not a plain directory name
/// - The container directory does not exist
/// - A validator cannot be started
pub fn validate_container<F>(
    config: &Config,
    root: &Path,
    container: &str,
    make_tool: F,
) -> Result<ValidationReport>
where
    F: Fn(&SuiteEntry) -> Box<dyn Runnable>,
{
    if !is_group_name(container) {
        return Err(Error::InvalidConfig(format!(
            "'{}' is not a container name",
            container
        )));
    }
    let matcher = GroupMatcher::new(&config.containers_root, &config.containers);
    let container_dir = matcher.group_dir(container);
    if !root.join(&container_dir).is_dir() {
        return Err(Error::ContainerNotFound(container.to_string()));
    }

    let mut results = Vec::with_capacity(config.tools.suite.len());
    for entry in &config.tools.suite {
        let target = entry.expand_target(container, &container_dir);
        tracing::info!("Running {} validation...", entry.label);
        let tool = make_tool(entry);
        let outcome = tool.execute(&[target.clone()])?;
        match &outcome {
            ToolOutcome::Passed => tracing::info!("{} validation passed", entry.label),
            ToolOutcome::Failed { .. } => tracing::error!("{} validation failed", entry.label),
            ToolOutcome::Missing { what } => {
                tracing::warn!("{} validator not found ({}); skipping", entry.label, what)
            }
        }
        results.push(ValidatorResult {
            label: entry.label.clone(),
            target,
            outcome,
        });
    }

    Ok(ValidationReport {
        container: container.to_string(),
        results,
    })
}

/// Validates a container with process-backed validators.
///
/// # Errors
///
/// See [`validate_container`].
pub fn validate_with_config(
    config: &Config,
    root: &Path,
    container: &str,
) -> Result<ValidationReport> {
    validate_container(config, root, container, |entry| {
        Box::new(ProcessTool::new(&entry.label, entry.tool.clone(), root))
    })
}
