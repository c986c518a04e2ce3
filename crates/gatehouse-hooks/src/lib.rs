// Rust guideline compliant 2026-10-13

//! Gatehouse Git Hooks
//!
//! This crate provides the Git hook implementations for Gatehouse:
//! - Pre-commit staged-file gate
//! - Pre-push test and standards gate
//! - Container validation runner

pub mod logging;
pub mod pre_commit;
pub mod pre_push;
pub mod staging;
pub mod validate;

pub use pre_commit::{
    pre_commit_hook, pre_commit_with_config, run_pre_commit, GateMode, PreCommitReport,
    PreCommitTools, SkipReason,
};
pub use pre_push::{
    pre_push_hook, pre_push_with_config, run_pre_push, PushReport, PushStage, StageOutcome,
};
pub use staging::{current_branch, GitIndex, StagingArea};
pub use validate::{validate_container, validate_with_config, ValidationReport, ValidatorResult};
