// Rust guideline compliant 2026-10-14

//! Hook command wrappers for invoking Gatehouse Git hooks from the CLI.

use crate::commands::install;
use crate::terminal::{print_info, print_success, print_warning};
use anyhow::Result;
use gatehouse_hooks::{GateMode, PreCommitReport, PushReport, StageOutcome};
use std::path::Path;

/// Runs the requested hook action.
///
/// # Arguments
///
/// * `action` - Hook action
/// * `repo_path` - Any path inside the repository
///
/// # Returns
///
/// Ok if the hook succeeds, Err otherwise.
///
/// # Errors
///
/// Returns an error if the gate refuses the operation or cannot run.
pub fn execute(action: HookAction, repo_path: &Path) -> Result<()> {
    match action {
        HookAction::PreCommit => {
            let report = gatehouse_hooks::pre_commit_hook(repo_path)?;
            report_pre_commit(&report);
            Ok(())
        }
        HookAction::PrePush { .. } => {
            let report = gatehouse_hooks::pre_push_hook(repo_path)?;
            report_pre_push(&report);
            Ok(())
        }
        HookAction::Install { force } => install::execute(repo_path, force),
    }
}

fn report_pre_commit(report: &PreCommitReport) {
    if report.mode == GateMode::Disabled {
        print_info("Staged-file gate disabled");
        return;
    }
    for tool in &report.missing_tools {
        print_warning(&format!("{} unavailable; step skipped", tool));
    }
    print_success(&format!(
        "Pre-commit checks passed: {} file(s) formatted, {} skipped",
        report.processed.len(),
        report.skipped.len()
    ));
}

fn report_pre_push(report: &PushReport) {
    for (stage, outcome) in &report.stages {
        match outcome {
            StageOutcome::Passed => print_success(&format!("{} passed", stage)),
            StageOutcome::ExemptBranch => print_info(&format!("{} skipped on exempt branch", stage)),
            StageOutcome::Bypassed => print_warning(&format!(
                "{} bypassed ({}=1)",
                stage,
                stage.bypass_var()
            )),
            StageOutcome::ToolMissing(what) => {
                print_warning(&format!("{} skipped: {} not found", stage, what))
            }
        }
    }
    print_success("Pre-push checks passed");
}

/// Supported hook actions.
#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
pub enum HookAction {
    /// Run the pre-commit staged-file gate
    PreCommit,
    /// Run the pre-push test and standards gate
    PrePush {
        /// Remote name (passed by git, unused)
        remote: Option<String>,
        /// Remote URL (passed by git, unused)
        url: Option<String>,
    },
    /// Install the pre-commit and pre-push hooks into this repository
    Install {
        /// Replace existing hooks not written by gatehouse
        #[arg(long)]
        force: bool,
    },
}
