// Rust guideline compliant 2026-10-15

//! Pre-commit hook implementation.
//!
//! Restricts auto-formatting to staged files inside approved containers,
//! refuses the commit when any of them fails the syntax pre-check, validates
//! approved container directories, and re-stages the formatted result.

use crate::staging::{GitIndex, StagingArea};
use gatehouse_core::{
    Config, Error, GroupMatcher, Membership, ProcessTool, Result, Runnable, Scope, ToolOutcome,
};
use std::path::{Path, PathBuf};

/// External tools used by the staged-file gate.
pub struct PreCommitTools<'a> {
    /// Per-file syntax checker.
    pub syntax_check: &'a dyn Runnable,
    /// Per-file import-order standardizer.
    pub import_standardizer: &'a dyn Runnable,
    /// Batched code formatter.
    pub formatter: &'a dyn Runnable,
    /// Batched import sorter.
    pub import_sorter: &'a dyn Runnable,
    /// Per-container structural validator.
    pub container_validator: &'a dyn Runnable,
}

/// Whether the gate did any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    /// `VALIDATE_ENABLED` is off; nothing was inspected.
    Disabled,
    /// Files were filtered, checked, and formatted.
    Enforced,
}

/// Why a staged candidate was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file belongs to a container that is not approved.
    Unapproved(String),
    /// The file is outside every container.
    Ungrouped,
    /// The staged path no longer exists in the working tree.
    NotInWorktree,
}

/// Summary of a staged-file gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreCommitReport {
    /// Whether the gate was enabled.
    pub mode: GateMode,
    /// Files that were formatted and re-staged.
    pub processed: Vec<PathBuf>,
    /// Candidates that were skipped, with the reason.
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Approved containers that passed structural validation.
    pub validated_containers: Vec<String>,
    /// Tools that were not available and were skipped.
    pub missing_tools: Vec<String>,
}

impl PreCommitReport {
    /// Report for a run where the gate was switched off.
    pub fn disabled() -> Self {
        tracing::info!("Staged-file validation disabled (set VALIDATE_ENABLED=1 to enable)");
        Self::new(GateMode::Disabled)
    }

    fn new(mode: GateMode) -> Self {
        Self {
            mode,
            processed: Vec::new(),
            skipped: Vec::new(),
            validated_containers: Vec::new(),
            missing_tools: Vec::new(),
        }
    }

    fn note_missing(&mut self, tool: &dyn Runnable, what: &str) {
        if self.missing_tools.iter().any(|name| name == tool.name()) {
            return;
        }
        tracing::warn!("{} not found ({}); skipping", tool.name(), what);
        self.missing_tools.push(tool.name().to_string());
    }
}

/// Runs the staged-file gate.
///
/// # Arguments
///
/// * `config` - Gate configuration
/// * `root` - Repository working tree root
/// * `staging` - Staging index to read and update
/// * `tools` - External collaborators
///
/// # Returns
///
/// A report describing what was processed and skipped.
///
/// # Errors
///
/// Returns an error if:
/// - An approved file fails the syntax pre-check (nothing is re-staged)
/// - A container validator, import standardizer, formatter, or import sorter
///   exits non-zero
/// - The staging index cannot be read or written
pub fn run_pre_commit(
    config: &Config,
    root: &Path,
    staging: &mut dyn StagingArea,
    tools: &PreCommitTools<'_>,
) -> Result<PreCommitReport> {
    if !config.enabled {
        return Ok(PreCommitReport::disabled());
    }

    let mut report = PreCommitReport::new(GateMode::Enforced);
    let matcher = GroupMatcher::new(&config.containers_root, &config.containers);
    let queue = collect_candidates(config, root, staging, &matcher, &mut report)?;

    // Every approved file must parse before anything is touched.
    for path in &queue {
        match tools.syntax_check.execute(&[path_arg(path)])? {
            ToolOutcome::Passed => {}
            ToolOutcome::Failed { .. } => {
                tracing::error!("Syntax error in {}", path.display());
                return Err(Error::SyntaxFailure { path: path.clone() });
            }
            ToolOutcome::Missing { what } => {
                report.note_missing(tools.syntax_check, &what);
                break;
            }
        }
    }

    validate_containers(root, &matcher, tools.container_validator, &mut report)?;

    if queue.is_empty() {
        tracing::info!("No approved staged files to format");
        return Ok(report);
    }

    for path in &queue {
        tracing::info!("Standardizing imports in {}", path.display());
        run_step(tools.import_standardizer, &[path_arg(path)], &mut report)?;
        staging.stage(std::slice::from_ref(path))?;
    }

    let batch: Vec<String> = queue.iter().map(|path| path_arg(path)).collect();
    tracing::info!("Formatting {} file(s)", batch.len());
    run_step(tools.formatter, &batch, &mut report)?;
    tracing::info!("Sorting imports in {} file(s)", batch.len());
    run_step(tools.import_sorter, &batch, &mut report)?;

    staging.stage(&queue)?;
    report.processed = queue;
    Ok(report)
}

fn collect_candidates(
    config: &Config,
    root: &Path,
    staging: &dyn StagingArea,
    matcher: &GroupMatcher,
    report: &mut PreCommitReport,
) -> Result<Vec<PathBuf>> {
    let mut queue = Vec::new();
    for path in staging.staged_files()? {
        if path.extension().and_then(|ext| ext.to_str()) != Some(config.extension.as_str()) {
            continue;
        }
        if !root.join(&path).is_file() {
            tracing::debug!("{} is staged but missing from the working tree", path.display());
            report.skipped.push((path, SkipReason::NotInWorktree));
            continue;
        }
        match matcher.classify(&path) {
            Membership::Approved(_) => queue.push(path),
            Membership::Unapproved(group) => {
                tracing::info!(
                    "Skipping {}: container '{}' is not approved",
                    path.display(),
                    group
                );
                report.skipped.push((path, SkipReason::Unapproved(group)));
            }
            Membership::Ungrouped => {
                tracing::info!("Skipping {}: not inside a container", path.display());
                report.skipped.push((path, SkipReason::Ungrouped));
            }
        }
    }
    Ok(queue)
}

fn validate_containers(
    root: &Path,
    matcher: &GroupMatcher,
    validator: &dyn Runnable,
    report: &mut PreCommitReport,
) -> Result<()> {
    for group in matcher.approved() {
        let dir = matcher.group_dir(group);
        if !root.join(&dir).is_dir() {
            continue;
        }
        tracing::info!("Validating container {}", group);
        match validator.execute(&[path_arg(&dir)])? {
            ToolOutcome::Passed => report.validated_containers.push(group.clone()),
            ToolOutcome::Failed { code } => {
                tracing::error!("Container validation failed for {}", group);
                return Err(Error::ToolFailure {
                    tool: format!("{} ({})", validator.name(), group),
                    code,
                });
            }
            ToolOutcome::Missing { what } => {
                report.note_missing(validator, &what);
                return Ok(());
            }
        }
    }
    Ok(())
}

fn run_step(tool: &dyn Runnable, args: &[String], report: &mut PreCommitReport) -> Result<()> {
    match tool.execute(args)? {
        ToolOutcome::Passed => Ok(()),
        ToolOutcome::Failed { code } => Err(Error::ToolFailure {
            tool: tool.name().to_string(),
            code,
        }),
        ToolOutcome::Missing { what } => {
            report.note_missing(tool, &what);
            Ok(())
        }
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Runs the pre-commit hook for the repository containing `repo_path`.
///
/// Loads configuration from `.gatehouse.toml` and the environment, and runs
/// the configured external tools as subprocesses. When the gate is disabled
/// nothing beyond the enable switch is read, so the hook always succeeds.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened, configuration is
/// invalid, or the gate refuses the commit.
pub fn pre_commit_hook(repo_path: &Path) -> anyhow::Result<PreCommitReport> {
    let mut index = GitIndex::discover(repo_path)?;
    let root = index.workdir().to_path_buf();
    if !Config::staged_gate_enabled(&root) {
        return Ok(PreCommitReport::disabled());
    }
    let config = Config::load_scoped(&root, Scope::StagedFiles)?;
    Ok(pre_commit_with_config(&config, &root, &mut index)?)
}

/// Runs the staged-file gate with process-backed tools from `config`.
///
/// # Errors
///
/// See [`run_pre_commit`].
pub fn pre_commit_with_config(
    config: &Config,
    root: &Path,
    staging: &mut dyn StagingArea,
) -> Result<PreCommitReport> {
    let specs = &config.tools;
    let syntax_check = ProcessTool::new("syntax check", specs.syntax_check.clone(), root);
    let import_standardizer =
        ProcessTool::new("import standardizer", specs.import_standardizer.clone(), root);
    let formatter = ProcessTool::new("formatter", specs.formatter.clone(), root);
    let import_sorter = ProcessTool::new("import sorter", specs.import_sorter.clone(), root);
    let container_validator =
        ProcessTool::new("container validator", specs.container_validator.clone(), root);

    let tools = PreCommitTools {
        syntax_check: &syntax_check,
        import_standardizer: &import_standardizer,
        formatter: &formatter,
        import_sorter: &import_sorter,
        container_validator: &container_validator,
    };
    run_pre_commit(config, root, staging, &tools)
}
