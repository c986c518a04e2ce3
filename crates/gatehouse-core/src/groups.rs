// Rust guideline compliant 2026-10-15

//! Container group inference for staged paths.
//!
//! A group is the first directory below the containers root, so
//! `containers/foundation/src/app.py` belongs to `foundation`.

use crate::Result;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Infers the group a repository-relative path belongs to.
///
/// # Arguments
///
/// * `containers_root` - Directory holding one subdirectory per group
/// * `path` - Repository-relative file path
///
/// # Returns
///
/// The group name when `path` names a file inside a group directory,
/// `None` otherwise.
pub fn infer_group<'a>(containers_root: &Path, path: &'a Path) -> Option<&'a str> {
    let rest = path.strip_prefix(containers_root).ok()?;
    let mut components = rest.components();
    let group = match components.next()? {
        Component::Normal(name) => name.to_str()?,
        _ => return None,
    };
    // The group directory itself is not a member; only files beneath it are.
    components.next()?;
    Some(group)
}

/// Returns whether `name` is usable as a group: a single plain directory name.
pub fn is_group_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Lists the containers under `containers_dir`, sorted by name.
///
/// A container is a subdirectory holding a `Dockerfile`. A missing
/// `containers_dir` yields an empty list.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read.
pub fn list_containers(containers_dir: &Path) -> Result<Vec<String>> {
    let entries = match std::fs::read_dir(containers_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.join("Dockerfile").is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Classification of a candidate path against the approved groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    /// Path belongs to an approved group.
    Approved(String),
    /// Path belongs to a known group that is not approved.
    Unapproved(String),
    /// Path is outside every group.
    Ungrouped,
}

/// Matches paths against a configured list of approved groups.
#[derive(Debug, Clone)]
pub struct GroupMatcher {
    root: PathBuf,
    approved: Vec<String>,
}

impl GroupMatcher {
    /// Creates a matcher for groups under `root`.
    pub fn new(root: impl Into<PathBuf>, approved: &[String]) -> Self {
        Self {
            root: root.into(),
            approved: approved.to_vec(),
        }
    }

    /// Classifies a repository-relative path.
    pub fn classify(&self, path: &Path) -> Membership {
        match infer_group(&self.root, path) {
            Some(group) if self.is_approved(group) => Membership::Approved(group.to_string()),
            Some(group) => Membership::Unapproved(group.to_string()),
            None => Membership::Ungrouped,
        }
    }

    /// Returns whether `group` is in the approved list.
    pub fn is_approved(&self, group: &str) -> bool {
        self.approved.iter().any(|name| name == group)
    }

    /// Approved group names, in configured order.
    pub fn approved(&self) -> &[String] {
        &self.approved
    }

    /// Directory of `group`, relative to the repository root.
    pub fn group_dir(&self, group: &str) -> PathBuf {
        self.root.join(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn matcher(approved: &[&str]) -> GroupMatcher {
        let approved: Vec<String> = approved.iter().map(|s| s.to_string()).collect();
        GroupMatcher::new("containers", &approved)
    }

    #[test]
    fn test_infer_group_nested_file() {
        let path = Path::new("containers/foundation/src/foundation/app.py");
        assert_eq!(infer_group(Path::new("containers"), path), Some("foundation"));
    }

    #[test]
    fn test_infer_group_outside_root() {
        assert_eq!(infer_group(Path::new("containers"), Path::new("scripts/x.py")), None);
        assert_eq!(infer_group(Path::new("containers"), Path::new("setup.py")), None);
    }

    #[test]
    fn test_infer_group_requires_file_below_group() {
        assert_eq!(
            infer_group(Path::new("containers"), Path::new("containers/top.py")),
            None
        );
        assert_eq!(infer_group(Path::new("containers"), Path::new("containers")), None);
    }

    #[test]
    fn test_infer_group_prefix_is_component_based() {
        // `containers_old` must not be mistaken for `containers`.
        assert_eq!(
            infer_group(Path::new("containers"), Path::new("containers_old/api/x.py")),
            None
        );
    }

    #[test]
    fn test_classify() {
        let m = matcher(&["foundation", "api"]);
        assert_eq!(
            m.classify(Path::new("containers/api/main.py")),
            Membership::Approved("api".to_string())
        );
        assert_eq!(
            m.classify(Path::new("containers/monitoring/main.py")),
            Membership::Unapproved("monitoring".to_string())
        );
        assert_eq!(m.classify(Path::new("docs/conf.py")), Membership::Ungrouped);
    }

    #[test]
    fn test_empty_approved_list_approves_nothing() {
        let m = matcher(&[]);
        assert_eq!(
            m.classify(Path::new("containers/api/main.py")),
            Membership::Unapproved("api".to_string())
        );
    }

    #[test]
    fn test_is_group_name() {
        assert!(is_group_name("dev-environment"));
        assert!(!is_group_name(""));
        assert!(!is_group_name("."));
        assert!(!is_group_name(".."));
        assert!(!is_group_name("api/v1"));
        assert!(!is_group_name("/api"));
    }

    #[test]
    fn test_group_dir() {
        let m = matcher(&["api"]);
        assert_eq!(m.group_dir("api"), PathBuf::from("containers/api"));
    }

    #[test]
    fn test_list_containers_requires_dockerfile() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["worker", "api", "docs"] {
            std::fs::create_dir_all(temp_dir.path().join(name)).unwrap();
        }
        std::fs::write(temp_dir.path().join("api/Dockerfile"), "FROM python\n").unwrap();
        std::fs::write(temp_dir.path().join("worker/Dockerfile"), "FROM python\n").unwrap();
        std::fs::write(temp_dir.path().join("Dockerfile"), "FROM scratch\n").unwrap();

        let names = list_containers(temp_dir.path()).unwrap();
        assert_eq!(names, vec!["api", "worker"]);
    }

    #[test]
    fn test_list_containers_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let names = list_containers(&temp_dir.path().join("containers")).unwrap();
        assert!(names.is_empty());
    }
}
