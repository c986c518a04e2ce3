// Rust guideline compliant 2026-10-14

//! Shared Git helpers for CLI commands.

use anyhow::Result;
use git2::{ConfigLevel, Repository};
use std::path::{Path, PathBuf};

/// Opens the repository containing `path`.
///
/// # Errors
///
/// Returns an error when `path` is not inside a Git repository.
pub(crate) fn open_repository(path: &Path) -> Result<Repository> {
    Repository::discover(path)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))
}

/// Returns the working tree root of the repository containing `path`.
///
/// # Errors
///
/// Returns an error when no repository is found or it is bare.
pub(crate) fn repository_root(path: &Path) -> Result<PathBuf> {
    let repo = open_repository(path)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("Bare repositories are not supported."))
}

/// Returns the directory Git runs hooks from.
///
/// Honours a repository-local `core.hooksPath`, resolved against the working
/// tree, and falls back to `.git/hooks`.
///
/// # Errors
///
/// Returns an error if the repository configuration cannot be read.
pub(crate) fn hooks_dir(repo: &Repository) -> Result<PathBuf> {
    let config = repo.config()?.open_level(ConfigLevel::Local)?;
    if let Ok(custom) = config.get_path("core.hooksPath") {
        if custom.is_absolute() {
            return Ok(custom);
        }
        if let Some(workdir) = repo.workdir() {
            return Ok(workdir.join(custom));
        }
    }
    Ok(repo.path().join("hooks"))
}
