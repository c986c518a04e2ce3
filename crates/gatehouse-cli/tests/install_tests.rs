// Rust guideline compliant 2026-10-15

//! Tests for hook installation.

use gatehouse_cli::{install_hooks, InstallOutcome, HOOK_MARKER};
use git2::Repository;
use std::fs;
use tempfile::TempDir;

fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = Repository::init(temp_dir.path()).expect("init repo");
    (temp_dir, repo)
}

#[test]
fn test_install_writes_both_hooks() {
    let (temp_dir, repo) = init_repo();

    let outcomes = install_hooks(temp_dir.path(), false).expect("install hooks");

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|(_, o)| *o == InstallOutcome::Installed));
    let pre_commit = fs::read_to_string(repo.path().join("hooks/pre-commit")).expect("read hook");
    assert!(pre_commit.starts_with("#!/bin/sh\n"));
    assert!(pre_commit.contains(HOOK_MARKER));
    assert!(pre_commit.contains("exec gatehouse hooks pre-commit \"$@\""));
    let pre_push = fs::read_to_string(repo.path().join("hooks/pre-push")).expect("read hook");
    assert!(pre_push.contains("exec gatehouse hooks pre-push \"$@\""));
}

#[cfg(unix)]
#[test]
fn test_installed_hooks_are_executable() {
    use std::os::unix::fs::PermissionsExt;
    let (temp_dir, repo) = init_repo();

    install_hooks(temp_dir.path(), false).expect("install hooks");

    let mode = fs::metadata(repo.path().join("hooks/pre-push"))
        .expect("hook metadata")
        .permissions()
        .mode();
    assert_eq!(mode & 0o111, 0o111);
}

#[test]
fn test_reinstall_updates_own_hooks() {
    let (temp_dir, _repo) = init_repo();
    install_hooks(temp_dir.path(), false).expect("first install");

    let outcomes = install_hooks(temp_dir.path(), false).expect("second install");

    assert!(outcomes.iter().all(|(_, o)| *o == InstallOutcome::Updated));
}

#[test]
fn test_foreign_hook_kept_without_force() {
    let (temp_dir, repo) = init_repo();
    let hooks = repo.path().join("hooks");
    fs::create_dir_all(&hooks).expect("hooks dir");
    fs::write(hooks.join("pre-commit"), "#!/bin/sh\necho custom\n").expect("write hook");

    let outcomes = install_hooks(temp_dir.path(), false).expect("install hooks");

    assert_eq!(outcomes[0].1, InstallOutcome::KeptExisting);
    assert_eq!(outcomes[1].1, InstallOutcome::Installed);
    let kept = fs::read_to_string(hooks.join("pre-commit")).expect("read hook");
    assert_eq!(kept, "#!/bin/sh\necho custom\n");
}

#[test]
fn test_foreign_hook_replaced_with_force() {
    let (temp_dir, repo) = init_repo();
    let hooks = repo.path().join("hooks");
    fs::create_dir_all(&hooks).expect("hooks dir");
    fs::write(hooks.join("pre-commit"), "#!/bin/sh\necho custom\n").expect("write hook");

    let outcomes = install_hooks(temp_dir.path(), true).expect("install hooks");

    assert_eq!(outcomes[0].1, InstallOutcome::Replaced);
    let replaced = fs::read_to_string(hooks.join("pre-commit")).expect("read hook");
    assert!(replaced.contains(HOOK_MARKER));
}

#[test]
fn test_install_honours_local_hooks_path() {
    let (temp_dir, repo) = init_repo();
    repo.config()
        .expect("repo config")
        .set_str("core.hooksPath", ".githooks")
        .expect("set hooksPath");

    let outcomes = install_hooks(temp_dir.path(), false).expect("install hooks");

    assert!(outcomes[0].0.ends_with(".githooks/pre-commit"));
    assert!(temp_dir.path().join(".githooks/pre-push").exists());
}

#[test]
fn test_install_outside_repository_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    if Repository::discover(temp_dir.path()).is_err() {
        assert!(install_hooks(temp_dir.path(), false).is_err());
    }
}
