// Rust guideline compliant 2026-10-14

//! Implementation of `gatehouse config`.

use crate::git::repository_root;
use anyhow::Result;
use gatehouse_core::Config;
use std::path::Path;

/// Prints the effective configuration after file and environment overrides.
///
/// # Errors
///
/// Returns an error if the repository or configuration cannot be loaded.
pub fn execute(repo_path: &Path, json: bool) -> Result<()> {
    let root = repository_root(repo_path)?;
    let config = Config::load(&root)?;
    println!("{}", render(&config, json)?);
    Ok(())
}

/// Serializes a configuration as pretty TOML or JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(config: &Config, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_toml_round_trips() {
        let config = Config::default();
        let rendered = render(&config, false).expect("Failed to render");
        let parsed: Config = toml::from_str(&rendered).expect("Failed to parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_render_json_contains_containers() {
        let rendered = render(&Config::default(), true).expect("Failed to render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("Valid JSON");
        assert_eq!(value["enabled"], serde_json::Value::Bool(false));
        assert!(value["containers"].is_array());
    }
}
