// Rust guideline compliant 2026-10-15

//! Command implementations for the Gatehouse CLI.

pub mod config;
pub mod containers;
pub mod hooks;
pub mod install;
pub mod validate;
