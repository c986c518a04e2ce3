// Rust guideline compliant 2026-10-15

//! CLI entry point for the Gatehouse pre-commit hook.

use gatehouse_hooks::logging::{default_level, init_logging, stdout_color_enabled};

fn main() -> anyhow::Result<()> {
    init_logging(&default_level(), stdout_color_enabled())?;
    let repo_path = std::env::current_dir()?;
    gatehouse_hooks::pre_commit_hook(&repo_path)?;
    Ok(())
}
