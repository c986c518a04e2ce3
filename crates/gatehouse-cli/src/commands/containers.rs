// Rust guideline compliant 2026-10-15

//! Implementation of `gatehouse containers`.

use crate::git::repository_root;
use anyhow::Result;
use gatehouse_core::{list_containers, Config, Scope};
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Lists the containers in the repository and whether each is approved.
///
/// # Errors
///
/// Returns an error if the repository, configuration, or containers
/// directory cannot be read.
pub fn execute(repo_path: &Path) -> Result<()> {
    let root = repository_root(repo_path)?;
    let config = Config::load_scoped(&root, Scope::StagedFiles)?;
    let names = list_containers(&root.join(&config.containers_root))?;
    println!("{}", render_containers(&names, &config.containers));
    Ok(())
}

/// Renders container names as a table with an approval column.
pub fn render_containers(names: &[String], approved: &[String]) -> String {
    if names.is_empty() {
        return "No containers found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(vec!["Container", "Approved"]);
    for name in names {
        let mark = if approved.contains(name) { "yes" } else { "no" };
        builder.push_record(vec![name.as_str(), mark]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_containers_marks_approval() {
        let names = vec!["api".to_string(), "worker".to_string()];
        let rendered = render_containers(&names, &["api".to_string()]);
        let api_line = rendered.lines().find(|l| l.contains("api")).expect("api row");
        let worker_line = rendered.lines().find(|l| l.contains("worker")).expect("worker row");
        assert!(api_line.contains("yes"));
        assert!(worker_line.contains("no"));
    }

    #[test]
    fn test_render_containers_empty() {
        assert_eq!(render_containers(&[], &[]), "No containers found.");
    }
}
