// Rust guideline compliant 2026-10-15

//! Configuration management for Gatehouse.

use crate::groups::is_group_name;
use crate::tool::ToolSpec;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file at the repository root.
pub const CONFIG_FILE: &str = ".gatehouse.toml";

/// Environment variable enabling the staged-file gate.
pub const ENV_VALIDATE_ENABLED: &str = "VALIDATE_ENABLED";
/// Environment variable overriding the approved container list.
pub const ENV_VALIDATE_CONTAINERS: &str = "VALIDATE_CONTAINERS";
/// Environment variable bypassing the push-gate test stage.
pub const ENV_SKIP_TESTS: &str = "SKIP_TESTS";
/// Environment variable bypassing the push-gate standards stage.
pub const ENV_SKIP_STANDARDS: &str = "SKIP_STANDARDS";

/// One step of the container validation suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteEntry {
    /// Label shown in reports.
    pub label: String,
    /// Command to run.
    pub tool: ToolSpec,
    /// Target argument; `{container}` and `{container_dir}` are expanded.
    pub target: String,
}

impl SuiteEntry {
    fn new(label: &str, tool: ToolSpec, target: &str) -> Self {
        Self {
            label: label.to_string(),
            tool,
            target: target.to_string(),
        }
    }

    /// Expands the target template for a container.
    pub fn expand_target(&self, container: &str, container_dir: &Path) -> String {
        self.target
            .replace("{container_dir}", &container_dir.display().to_string())
            .replace("{container}", container)
    }
}

/// Commands for every external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tools {
    /// Per-file syntax checker.
    pub syntax_check: ToolSpec,
    /// Per-file import-order standardizer.
    pub import_standardizer: ToolSpec,
    /// Batched code formatter.
    pub formatter: ToolSpec,
    /// Batched import sorter.
    pub import_sorter: ToolSpec,
    /// Per-container structural validator.
    pub container_validator: ToolSpec,
    /// Test-suite runner used by the push gate.
    pub test_runner: ToolSpec,
    /// Standards-compliance checker used by the push gate.
    pub standards_checker: ToolSpec,
    /// Validators run by `gatehouse validate`, in order.
    pub suite: Vec<SuiteEntry>,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            syntax_check: ToolSpec::new("python3", &["-m", "py_compile"]),
            import_standardizer: ToolSpec::new("python3", &["scripts/standardize_imports.py"])
                .requiring("scripts/standardize_imports.py"),
            formatter: ToolSpec::new("black", &[]),
            import_sorter: ToolSpec::new("isort", &[]),
            container_validator: ToolSpec::new(
                "python3",
                &["scripts/validators/container_validator.py"],
            )
            .requiring("scripts/validators/container_validator.py"),
            test_runner: ToolSpec::new("sh", &["scripts/run_tests.sh"])
                .requiring("scripts/run_tests.sh"),
            standards_checker: ToolSpec::new("python3", &["scripts/check_standards.py"])
                .requiring("scripts/check_standards.py"),
            suite: default_suite(),
        }
    }
}

fn validator(script: &str) -> ToolSpec {
    ToolSpec::new("python3", &[script]).requiring(script)
}

fn default_suite() -> Vec<SuiteEntry> {
    vec![
        SuiteEntry::new(
            "Container Structure",
            validator("scripts/validators/container_validator.py"),
            "{container_dir}",
        ),
        SuiteEntry::new(
            "Dockerfile",
            validator("scripts/validators/dockerfile_validator.py"),
            "{container_dir}/Dockerfile",
        ),
        SuiteEntry::new(
            "Poetry Configuration",
            validator("scripts/validators/poetry_validator.py"),
            "{container_dir}",
        ),
        SuiteEntry::new(
            "Docker Compose",
            validator("scripts/validators/compose_validator.py"),
            "containers/dev-environment/docker-compose.dev.yml",
        ),
    ]
}

/// Configuration for both gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether the staged-file gate does anything at all.
    #[serde(default)]
    pub enabled: bool,

    /// Approved container groups.
    #[serde(default = "default_containers")]
    pub containers: Vec<String>,

    /// Directory holding one subdirectory per container.
    #[serde(default = "default_containers_root")]
    pub containers_root: PathBuf,

    /// Extension of files the staged-file gate processes.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Branch on which both push-gate stages are skipped.
    #[serde(default = "default_exempt_branch")]
    pub exempt_branch: String,

    /// Bypass the push-gate test stage.
    #[serde(default)]
    pub skip_tests: bool,

    /// Bypass the push-gate standards stage.
    #[serde(default)]
    pub skip_standards: bool,

    /// External tool commands.
    #[serde(default)]
    pub tools: Tools,
}

fn default_containers() -> Vec<String> {
    ["foundation", "api", "dev-environment"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_containers_root() -> PathBuf {
    PathBuf::from("containers")
}

fn default_extension() -> String {
    "py".to_string()
}

fn default_exempt_branch() -> String {
    "chore/standardize-dev-environment".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: false,
            containers: default_containers(),
            containers_root: default_containers_root(),
            extension: default_extension(),
            exempt_branch: default_exempt_branch(),
            skip_tests: false,
            skip_standards: false,
            tools: Tools::default(),
        }
    }
}

/// Which part of the configuration a caller relies on.
///
/// Validation is limited to the settings the caller reads, so a stray value
/// meant for one gate never blocks the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The staged-file gate: containers, extension, and the per-file tools.
    StagedFiles,
    /// The push gate: test runner and standards checker.
    Push,
    /// Everything, including the container validation suite.
    All,
}

impl Config {
    /// Loads configuration from file and the process environment.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<repo_root>/.gatehouse.toml`
    /// 3. `VALIDATE_ENABLED`, `VALIDATE_CONTAINERS`, `SKIP_TESTS`, `SKIP_STANDARDS`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        Self::load_scoped(repo_root, Scope::All)
    }

    /// Loads configuration, validating only what `scope` uses.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_scoped(repo_root: &Path, scope: Scope) -> Result<Self> {
        Self::load_scoped_with(repo_root, scope, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with<F>(repo_root: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load_scoped_with(repo_root, Scope::All, lookup)
    }

    /// Scoped variant of [`Config::load_with`].
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_scoped_with<F>(repo_root: &Path, scope: Scope, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = repo_root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content).map_err(|e| {
                Error::InvalidConfig(format!("{}: {}", config_path.display(), e))
            })?;
        }

        config.apply_env_overrides(lookup);
        config.normalize();
        config.validate(scope)?;

        Ok(config)
    }

    /// Decides whether the staged-file gate is enabled without loading the
    /// rest of the configuration.
    ///
    /// `VALIDATE_ENABLED` wins when set. Otherwise the `enabled` key of
    /// `.gatehouse.toml` is used. A file that cannot be read or parsed counts
    /// as disabled, since a disabled gate never reads anything else.
    pub fn staged_gate_enabled(repo_root: &Path) -> bool {
        Self::staged_gate_enabled_with(repo_root, |key| std::env::var(key).ok())
    }

    /// Variant of [`Config::staged_gate_enabled`] using `lookup` for the
    /// environment.
    pub fn staged_gate_enabled_with<F>(repo_root: &Path, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(flag) =
            lookup(ENV_VALIDATE_ENABLED).and_then(|val| parse_flag(ENV_VALIDATE_ENABLED, &val))
        {
            return flag;
        }

        let config_path = repo_root.join(CONFIG_FILE);
        let Ok(content) = std::fs::read_to_string(&config_path) else {
            return false;
        };
        match toml::from_str::<toml::Table>(&content) {
            Ok(table) => table
                .get("enabled")
                .and_then(toml::Value::as_bool)
                .unwrap_or(false),
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", config_path.display(), e);
                false
            }
        }
    }

    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |name: &str| lookup(name).and_then(|val| parse_flag(name, &val));

        if let Some(enabled) = flag(ENV_VALIDATE_ENABLED) {
            self.enabled = enabled;
        }

        if let Some(val) = lookup(ENV_VALIDATE_CONTAINERS) {
            self.containers = val.split_whitespace().map(str::to_string).collect();
        }

        if let Some(skip) = flag(ENV_SKIP_TESTS) {
            self.skip_tests = skip;
        }

        if let Some(skip) = flag(ENV_SKIP_STANDARDS) {
            self.skip_standards = skip;
        }
    }

    fn normalize(&mut self) {
        if let Some(stripped) = self.extension.strip_prefix('.') {
            self.extension = stripped.to_string();
        }
    }

    fn validate(&self, scope: Scope) -> Result<()> {
        let staged = matches!(scope, Scope::StagedFiles | Scope::All);
        let push = matches!(scope, Scope::Push | Scope::All);

        if staged {
            for name in &self.containers {
                if !is_group_name(name) {
                    return Err(Error::InvalidConfig(format!(
                        "container name must be a single directory name, got '{}'",
                        name
                    )));
                }
            }

            if self.extension.is_empty() {
                return Err(Error::InvalidConfig(
                    "extension must not be empty".to_string(),
                ));
            }
        }

        let mut tools = Vec::new();
        if staged {
            tools.extend([
                ("syntax_check", &self.tools.syntax_check),
                ("import_standardizer", &self.tools.import_standardizer),
                ("formatter", &self.tools.formatter),
                ("import_sorter", &self.tools.import_sorter),
                ("container_validator", &self.tools.container_validator),
            ]);
        }
        if push {
            tools.extend([
                ("test_runner", &self.tools.test_runner),
                ("standards_checker", &self.tools.standards_checker),
            ]);
        }
        for (name, spec) in tools {
            if spec.program.trim().is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "tools.{}.program must not be empty",
                    name
                )));
            }
        }

        if scope == Scope::All {
            for entry in &self.tools.suite {
                if entry.tool.program.trim().is_empty() {
                    return Err(Error::InvalidConfig(format!(
                        "suite entry '{}' has an empty program",
                        entry.label
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Parses a boolean environment flag.
///
/// Accepts `1/true/yes/on` and `0/false/no/off` (case-insensitive), with the
/// empty string meaning false. Any other value is ignored with a warning and
/// leaves the setting as it was.
pub fn parse_flag(name: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring {}={}: expected 0 or 1", name, other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.enabled);
        assert_eq!(config.containers, vec!["foundation", "api", "dev-environment"]);
        assert_eq!(config.containers_root, PathBuf::from("containers"));
        assert_eq!(config.extension, "py");
        assert_eq!(config.exempt_branch, "chore/standardize-dev-environment");
        assert!(!config.skip_tests);
        assert!(!config.skip_standards);
        assert_eq!(config.tools.suite.len(), 4);
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_with(temp_dir.path(), env(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
enabled = true
containers = ["api"]
extension = ".py"
exempt_branch = "release"

[tools.formatter]
program = "ruff"
args = ["format"]
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE), content).unwrap();

        let config = Config::load_with(temp_dir.path(), env(&[])).unwrap();
        assert!(config.enabled);
        assert_eq!(config.containers, vec!["api"]);
        assert_eq!(config.extension, "py");
        assert_eq!(config.exempt_branch, "release");
        assert_eq!(config.tools.formatter, ToolSpec::new("ruff", &["format"]));
        // Unspecified tools keep their defaults.
        assert_eq!(config.tools.import_sorter, ToolSpec::new("isort", &[]));
    }

    #[test]
    fn test_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "enabled = [").unwrap();
        let result = Config::load_with(temp_dir.path(), env(&[]));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_env_enables_gate() {
        let temp_dir = TempDir::new().unwrap();
        let config =
            Config::load_with(temp_dir.path(), env(&[("VALIDATE_ENABLED", "1")])).unwrap();
        assert!(config.enabled);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "enabled = true").unwrap();
        let config =
            Config::load_with(temp_dir.path(), env(&[("VALIDATE_ENABLED", "0")])).unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn test_env_containers_split_on_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_with(
            temp_dir.path(),
            env(&[("VALIDATE_CONTAINERS", "  api \t worker\nfoundation ")]),
        )
        .unwrap();
        assert_eq!(config.containers, vec!["api", "worker", "foundation"]);
    }

    #[test]
    fn test_env_containers_empty_clears_list() {
        let temp_dir = TempDir::new().unwrap();
        let config =
            Config::load_with(temp_dir.path(), env(&[("VALIDATE_CONTAINERS", "")])).unwrap();
        assert!(config.containers.is_empty());
    }

    #[test]
    fn test_env_bypass_flags() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_with(
            temp_dir.path(),
            env(&[("SKIP_TESTS", "1"), ("SKIP_STANDARDS", "true")]),
        )
        .unwrap();
        assert!(config.skip_tests);
        assert!(config.skip_standards);
    }

    #[test]
    fn test_env_unrecognised_flag_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "skip_tests = true").unwrap();
        let config =
            Config::load_with(temp_dir.path(), env(&[("SKIP_TESTS", "maybe")])).unwrap();
        assert!(config.skip_tests);
    }

    #[test]
    fn test_push_scope_ignores_staged_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_scoped_with(
            temp_dir.path(),
            Scope::Push,
            env(&[("VALIDATE_CONTAINERS", "api/v1")]),
        )
        .unwrap();
        assert_eq!(config.containers, vec!["api/v1"]);

        let result = Config::load_scoped_with(
            temp_dir.path(),
            Scope::StagedFiles,
            env(&[("VALIDATE_CONTAINERS", "api/v1")]),
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_staged_scope_ignores_push_tools() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[tools.test_runner]\nprogram = \"\"\n",
        )
        .unwrap();
        assert!(Config::load_scoped_with(temp_dir.path(), Scope::StagedFiles, env(&[])).is_ok());
        assert!(Config::load_scoped_with(temp_dir.path(), Scope::Push, env(&[])).is_err());
    }

    #[test]
    fn test_staged_gate_enabled_defaults_off() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!Config::staged_gate_enabled_with(temp_dir.path(), env(&[])));
        assert!(!Config::staged_gate_enabled_with(
            temp_dir.path(),
            env(&[("VALIDATE_ENABLED", "maybe")])
        ));
    }

    #[test]
    fn test_staged_gate_enabled_ignores_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "enabled = [").unwrap();
        assert!(!Config::staged_gate_enabled_with(temp_dir.path(), env(&[])));
        assert!(Config::staged_gate_enabled_with(
            temp_dir.path(),
            env(&[("VALIDATE_ENABLED", "1")])
        ));
    }

    #[test]
    fn test_staged_gate_enabled_reads_file_and_env() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "enabled = true").unwrap();
        assert!(Config::staged_gate_enabled_with(temp_dir.path(), env(&[])));
        assert!(!Config::staged_gate_enabled_with(
            temp_dir.path(),
            env(&[("VALIDATE_ENABLED", "0")])
        ));
    }

    #[test]
    fn test_rejects_nested_container_name() {
        let temp_dir = TempDir::new().unwrap();
        for bad in ["api/v1", "..", "."] {
            let result =
                Config::load_with(temp_dir.path(), env(&[("VALIDATE_CONTAINERS", bad)]));
            assert!(result.is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_rejects_empty_extension() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "extension = \".\"").unwrap();
        assert!(Config::load_with(temp_dir.path(), env(&[])).is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("X", "1"), Some(true));
        assert_eq!(parse_flag("X", "TRUE"), Some(true));
        assert_eq!(parse_flag("X", "0"), Some(false));
        assert_eq!(parse_flag("X", ""), Some(false));
        assert_eq!(parse_flag("X", "2"), None);
    }

    #[test]
    fn test_suite_target_expansion() {
        let entry = &Config::default().tools.suite[1];
        assert_eq!(
            entry.expand_target("api", Path::new("containers/api")),
            "containers/api/Dockerfile"
        );
    }
}
