// Rust guideline compliant 2026-10-13

//! Pre-push hook implementation.
//!
//! Runs the test suite and then the standards checker, refusing the push if
//! either fails. Each stage can be bypassed by its environment flag, and both
//! are bypassed on the exempt branch.

use crate::staging::GitIndex;
use gatehouse_core::config::{ENV_SKIP_STANDARDS, ENV_SKIP_TESTS};
use gatehouse_core::{Config, Error, ProcessTool, Result, Runnable, Scope, ToolOutcome};
use std::fmt;
use std::path::Path;

/// Stages of the push gate, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushStage {
    /// Test-suite runner.
    Tests,
    /// Standards-compliance checker.
    Standards,
}

impl PushStage {
    /// Environment variable that bypasses this stage.
    pub fn bypass_var(self) -> &'static str {
        match self {
            PushStage::Tests => ENV_SKIP_TESTS,
            PushStage::Standards => ENV_SKIP_STANDARDS,
        }
    }

    fn bypassed(self, config: &Config) -> bool {
        match self {
            PushStage::Tests => config.skip_tests,
            PushStage::Standards => config.skip_standards,
        }
    }
}

impl fmt::Display for PushStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushStage::Tests => write!(f, "Tests"),
            PushStage::Standards => write!(f, "Standards check"),
        }
    }
}

/// What happened to a push-gate stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage ran and passed.
    Passed,
    /// Skipped because the current branch is exempt.
    ExemptBranch,
    /// Skipped because its bypass flag is set.
    Bypassed,
    /// Skipped because the script is missing.
    ToolMissing(String),
}

/// Summary of a push-gate run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PushReport {
    /// Outcome of each stage that was reached, in order.
    pub stages: Vec<(PushStage, StageOutcome)>,
}

impl PushReport {
    /// Returns the outcome recorded for `stage`.
    pub fn outcome(&self, stage: PushStage) -> Option<&StageOutcome> {
        self.stages
            .iter()
            .find(|(recorded, _)| *recorded == stage)
            .map(|(_, outcome)| outcome)
    }
}

/// Runs the push gate.
///
/// # Arguments
///
/// * `config` - Gate configuration
/// * `branch` - Current branch, `None` when HEAD is detached
/// * `tests` - Test-suite runner
/// * `standards` - Standards checker
///
/// # Returns
///
/// A report listing each stage's outcome.
///
/// # Errors
///
/// Returns [`Error::StageFailed`] as soon as a stage fails; later stages are
/// not run.
pub fn run_pre_push(
    config: &Config,
    branch: Option<&str>,
    tests: &dyn Runnable,
    standards: &dyn Runnable,
) -> Result<PushReport> {
    let exempt = branch == Some(config.exempt_branch.as_str());
    let mut report = PushReport::default();

    for (stage, tool) in [(PushStage::Tests, tests), (PushStage::Standards, standards)] {
        let outcome = run_stage(config, stage, tool, exempt)?;
        report.stages.push((stage, outcome));
    }

    Ok(report)
}

fn run_stage(
    config: &Config,
    stage: PushStage,
    tool: &dyn Runnable,
    exempt: bool,
) -> Result<StageOutcome> {
    if exempt {
        tracing::info!("Skipping {} on exempt branch {}", stage, config.exempt_branch);
        return Ok(StageOutcome::ExemptBranch);
    }
    if stage.bypassed(config) {
        tracing::warn!("Skipping {} ({}=1)", stage, stage.bypass_var());
        return Ok(StageOutcome::Bypassed);
    }

    tracing::info!("Running {}...", stage);
    match tool.execute(&[])? {
        ToolOutcome::Passed => {
            tracing::info!("{} passed", stage);
            Ok(StageOutcome::Passed)
        }
        ToolOutcome::Failed { code } => {
            tracing::error!("{} failed. Fix the failures or set {}=1 to bypass.", stage, stage.bypass_var());
            Err(Error::StageFailed {
                stage: stage.to_string(),
                code,
                bypass: stage.bypass_var().to_string(),
            })
        }
        ToolOutcome::Missing { what } => {
            tracing::warn!("{} not found; skipping {}", what, stage);
            Ok(StageOutcome::ToolMissing(what))
        }
    }
}

/// Runs the pre-push hook for the repository containing `repo_path`.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened, configuration is
/// invalid, or a stage fails.
pub fn pre_push_hook(repo_path: &Path) -> anyhow::Result<PushReport> {
    let index = GitIndex::discover(repo_path)?;
    let root = index.workdir().to_path_buf();
    let config = Config::load_scoped(&root, Scope::Push)?;
    let branch = index.current_branch()?;
    Ok(pre_push_with_config(&config, &root, branch.as_deref())?)
}

/// Runs the push gate with process-backed tools from `config`.
///
/// # Errors
///
/// See [`run_pre_push`].
pub fn pre_push_with_config(
    config: &Config,
    root: &Path,
    branch: Option<&str>,
) -> Result<PushReport> {
    let tests = ProcessTool::new("test runner", config.tools.test_runner.clone(), root);
    let standards = ProcessTool::new(
        "standards checker",
        config.tools.standards_checker.clone(),
        root,
    );
    run_pre_push(config, branch, &tests, &standards)
}
