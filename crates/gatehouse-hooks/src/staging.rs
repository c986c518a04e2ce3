// Rust guideline compliant 2026-10-15

//! Staging index access.
//!
//! The staged-file gate only needs two things from Git: the list of staged
//! paths and a way to stage them again after formatting. [`StagingArea`]
//! captures that, and [`GitIndex`] implements it with `git2`.

use gatehouse_core::{Error, Result};
use git2::{Delta, DiffOptions, ErrorCode, Repository, RepositoryOpenFlags};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Read/write access to the set of staged files.
pub trait StagingArea {
    /// Returns repository-relative paths that are staged as added or
    /// modified. A renamed file shows up as its new path; deletions are not
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be read.
    fn staged_files(&self) -> Result<Vec<PathBuf>>;

    /// Stages the working-tree contents of `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if any path cannot be added or the index cannot be
    /// written.
    fn stage(&mut self, paths: &[PathBuf]) -> Result<()>;
}

/// [`StagingArea`] backed by a Git repository index.
pub struct GitIndex {
    repo: Repository,
    root: PathBuf,
}

impl GitIndex {
    /// Opens the repository containing `path`.
    ///
    /// Honours the environment Git sets for hooks. `GIT_DIR` selects the
    /// repository and `GIT_INDEX_FILE` the index, which is a temporary one
    /// during `git commit -a` and `git commit <paths>`.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found or it has no working tree.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::open_ext(path, RepositoryOpenFlags::FROM_ENV, &[] as &[&OsStr])
            .map_err(|_| Error::Git(format!("Not a git repository: {}", path.display())))?;
        let root = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::Git("Bare repositories are not supported".to_string()))?;
        Ok(Self { repo, root })
    }

    /// Returns the repository working tree root.
    pub fn workdir(&self) -> &Path {
        &self.root
    }

    /// Returns the checked-out branch name.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be read.
    pub fn current_branch(&self) -> Result<Option<String>> {
        current_branch(&self.repo)
    }
}

/// Returns the branch HEAD points at, or `None` when HEAD is detached.
///
/// Works on unborn branches, where `Repository::head` fails.
///
/// # Errors
///
/// Returns an error if the HEAD reference cannot be read.
pub fn current_branch(repo: &Repository) -> Result<Option<String>> {
    let head = repo.find_reference("HEAD").map_err(git_err)?;
    Ok(head
        .symbolic_target()
        .and_then(|target| target.strip_prefix("refs/heads/"))
        .map(str::to_string))
}

impl StagingArea for GitIndex {
    fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let head_tree = match self.repo.head() {
            Ok(head) => Some(head.peel_to_tree().map_err(git_err)?),
            Err(err) if matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                None
            }
            Err(err) => return Err(git_err(err)),
        };

        let mut index = self.repo.index().map_err(git_err)?;
        index.read(false).map_err(git_err)?;
        let mut options = DiffOptions::new();
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut options))
            .map_err(git_err)?;

        let files = diff
            .deltas()
            .filter(|delta| matches!(delta.status(), Delta::Added | Delta::Modified))
            .filter_map(|delta| delta.new_file().path().map(Path::to_path_buf))
            .collect();
        Ok(files)
    }

    fn stage(&mut self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut index = self.repo.index().map_err(git_err)?;
        index.read(false).map_err(git_err)?;
        for path in paths {
            index.add_path(path).map_err(git_err)?;
        }
        index.write().map_err(git_err)?;
        Ok(())
    }
}

fn git_err(err: git2::Error) -> Error {
    Error::Git(err.message().to_string())
}
