// Rust guideline compliant 2026-10-14

//! Gatehouse CLI library.
//!
//! This library exposes the CLI modules for use in tests and by the binary.

pub mod color_mode;
pub mod commands;
mod git;
pub mod terminal;

pub use commands::hooks::HookAction;
pub use commands::install::{install_hooks, InstallOutcome, HOOK_MARKER};
pub use terminal::should_use_color;
