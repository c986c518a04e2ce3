// Rust guideline compliant 2026-10-12

//! External tool abstraction.
//!
//! Every collaborator a gate invokes (syntax checker, formatter, validators,
//! test runner) is an opaque subprocess whose only contract is its exit code.
//! [`Runnable`] is the seam gates depend on; [`ProcessTool`] is the
//! production implementation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The tool exited with status 0.
    Passed,
    /// The tool exited with a non-zero status, or was killed by a signal.
    Failed {
        /// Exit code, if any.
        code: Option<i32>,
    },
    /// The tool, or a script it requires, is not present.
    Missing {
        /// What could not be found.
        what: String,
    },
}

impl ToolOutcome {
    /// Returns whether the invocation passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, ToolOutcome::Passed)
    }

    /// Returns whether the tool was missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, ToolOutcome::Missing { .. })
    }
}

/// An external collaborator that can be executed with extra arguments.
pub trait Runnable {
    /// Human-readable tool name used in logs and errors.
    fn name(&self) -> &str;

    /// Executes the tool, appending `args` to its configured arguments.
    ///
    /// # Errors
    ///
    /// Returns an error only when the tool exists but could not be started.
    /// Non-zero exits are reported as [`ToolOutcome::Failed`].
    fn execute(&self, args: &[String]) -> Result<ToolOutcome>;
}

/// Declarative description of an external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Program to run. Resolved against the repository root when it contains
    /// a path separator, otherwise looked up on `PATH`.
    pub program: String,

    /// Fixed leading arguments.
    #[serde(default)]
    pub args: Vec<String>,

    /// File (relative to the repository root) that must exist for the tool
    /// to be considered present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<PathBuf>,
}

impl ToolSpec {
    /// Creates a spec for `program` with leading `args`.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
            requires: None,
        }
    }

    /// Marks `path` as required for the tool to run.
    #[must_use]
    pub fn requiring(mut self, path: &str) -> Self {
        self.requires = Some(PathBuf::from(path));
        self
    }
}

/// Runs a [`ToolSpec`] as a child process rooted at the repository.
///
/// Standard streams are inherited so tool output reaches the user verbatim.
/// The call blocks until the child exits.
#[derive(Debug, Clone)]
pub struct ProcessTool {
    name: String,
    spec: ToolSpec,
    root: PathBuf,
}

impl ProcessTool {
    /// Creates a process tool.
    ///
    /// # Arguments
    ///
    /// * `name` - Name used in logs and errors
    /// * `spec` - Command description
    /// * `root` - Repository root; used as working directory
    pub fn new(name: &str, spec: ToolSpec, root: &Path) -> Self {
        Self {
            name: name.to_string(),
            spec,
            root: root.to_path_buf(),
        }
    }

    fn program_path(&self) -> PathBuf {
        let program = Path::new(&self.spec.program);
        if program.components().count() > 1 {
            self.root.join(program)
        } else {
            program.to_path_buf()
        }
    }
}

impl Runnable for ProcessTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, args: &[String]) -> Result<ToolOutcome> {
        if let Some(required) = &self.spec.requires {
            if !self.root.join(required).exists() {
                return Ok(ToolOutcome::Missing {
                    what: required.display().to_string(),
                });
            }
        }

        let program = self.program_path();
        tracing::debug!(tool = %self.name, program = %program.display(), ?args, "running tool");

        let status = Command::new(&program)
            .args(&self.spec.args)
            .args(args)
            .current_dir(&self.root)
            .status();

        match status {
            Ok(status) if status.success() => Ok(ToolOutcome::Passed),
            Ok(status) => Ok(ToolOutcome::Failed {
                code: status.code(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ToolOutcome::Missing {
                what: self.spec.program.clone(),
            }),
            Err(source) => Err(Error::Spawn {
                tool: self.name.clone(),
                source,
            }),
        }
    }
}
