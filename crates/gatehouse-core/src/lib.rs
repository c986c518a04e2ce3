// Rust guideline compliant 2026-10-12

//! Gatehouse Core Library
//!
//! This crate provides the building blocks shared by the Gatehouse gates:
//! - Configuration (defaults, `.gatehouse.toml`, environment overrides)
//! - Container group inference for staged paths
//! - The `Runnable` seam over external tools and its process implementation
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod groups;
pub mod tool;

pub use config::{Config, Scope, SuiteEntry, Tools};
pub use error::{Error, Result};
pub use groups::{infer_group, is_group_name, list_containers, GroupMatcher, Membership};
pub use tool::{ProcessTool, Runnable, ToolOutcome, ToolSpec};
