// Rust guideline compliant 2026-10-14

//! Implementation of `gatehouse hooks install`.
//!
//! Writes small shell shims into the repository's hooks directory that hand
//! control to `gatehouse hooks <name>`.

use crate::git::{hooks_dir, open_repository};
use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker line identifying hooks written by Gatehouse.
pub const HOOK_MARKER: &str = "# Installed by gatehouse";

/// Hooks installed by Gatehouse and the subcommand each one runs.
pub const HOOKS: [(&str, &str); 2] = [
    ("pre-commit", "gatehouse hooks pre-commit"),
    ("pre-push", "gatehouse hooks pre-push"),
];

/// What happened to a single hook file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The hook did not exist and was written.
    Installed,
    /// A previous Gatehouse hook was rewritten.
    Updated,
    /// A foreign hook was overwritten because `--force` was given.
    Replaced,
    /// A foreign hook exists and was left in place.
    KeptExisting,
}

/// Installs the Gatehouse hooks.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the target repository
/// * `force` - Overwrite hooks not written by Gatehouse
///
/// # Returns
///
/// The path and outcome of each hook, in [`HOOKS`] order.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a Git repository
/// - The hooks directory cannot be created
/// - A hook file cannot be written or made executable
pub fn install_hooks(repo_path: &Path, force: bool) -> Result<Vec<(PathBuf, InstallOutcome)>> {
    let repo = open_repository(repo_path)?;
    let dir = hooks_dir(&repo)?;
    fs::create_dir_all(&dir)?;

    let mut outcomes = Vec::with_capacity(HOOKS.len());
    for (name, command) in HOOKS {
        let path = dir.join(name);
        let outcome = install_hook(&path, command, force)?;
        outcomes.push((path, outcome));
    }
    Ok(outcomes)
}

/// Executes `gatehouse hooks install` and reports each hook.
///
/// # Errors
///
/// See [`install_hooks`].
pub fn execute(repo_path: &Path, force: bool) -> Result<()> {
    for (path, outcome) in install_hooks(repo_path, force)? {
        let shown = path.display();
        match outcome {
            InstallOutcome::Installed => print_success(&format!("Installed {}", shown)),
            InstallOutcome::Updated => print_success(&format!("Updated {}", shown)),
            InstallOutcome::Replaced => print_warning(&format!("Replaced existing {}", shown)),
            InstallOutcome::KeptExisting => print_warning(&format!(
                "{} exists and was not written by gatehouse; use --force to replace it",
                shown
            )),
        }
    }
    Ok(())
}

fn install_hook(path: &Path, command: &str, force: bool) -> Result<InstallOutcome> {
    let outcome = if path.exists() {
        let existing = fs::read_to_string(path).unwrap_or_default();
        if existing.contains(HOOK_MARKER) {
            InstallOutcome::Updated
        } else if force {
            InstallOutcome::Replaced
        } else {
            return Ok(InstallOutcome::KeptExisting);
        }
    } else {
        InstallOutcome::Installed
    };

    let hook_content = format!("#!/bin/sh\n{}\nexec {} \"$@\"\n", HOOK_MARKER, command);
    fs::write(path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(outcome)
}
