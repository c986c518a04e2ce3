// Rust guideline compliant 2026-10-12

//! Error types for the Gatehouse core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gatehouse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Gatehouse operations.
///
/// Every variant is fatal for the gate that produced it. A missing tool is
/// not an error; see [`crate::ToolOutcome::Missing`].
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(String),

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An external tool exists but could not be started.
    #[error("Failed to start {tool}: {source}")]
    Spawn {
        /// Tool name.
        tool: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// A staged file failed the syntax pre-check.
    #[error("Syntax check failed for {}", .path.display())]
    SyntaxFailure {
        /// Path of the offending file, relative to the repository root.
        path: PathBuf,
    },

    /// An external tool exited with a non-zero status.
    #[error("{tool} failed ({})", describe_exit(.code))]
    ToolFailure {
        /// Tool name.
        tool: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },

    /// A push-gate stage failed.
    #[error("{stage} failed ({}). Fix the failures or set {bypass}=1 to bypass.", describe_exit(.code))]
    StageFailed {
        /// Stage label.
        stage: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Environment variable that bypasses the stage.
        bypass: String,
    },

    /// The named container directory does not exist.
    #[error("Container not found: {0}")]
    ContainerNotFound(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
