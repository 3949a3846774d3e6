//! Git repository fixtures at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs;
//! fakes are faster and have fewer external dependencies.

use std::fs;
use std::path::Path;

/// Creates a minimal `.git` directory structure **without** initialising a
/// real git repository.
///
/// Realism level: **FAKE**: directory structure only, no git object store.
///
/// Use for: tests that need a `.git` marker to satisfy existence checks but
/// do not perform any real git operations.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
    fs::create_dir_all(path.join(".git/refs/heads"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create refs/heads: {e}"));
    fs::write(path.join(".git/refs/heads/main"), "")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write refs/heads/main: {e}"));
}

/// Initialises a real git repository with a committer identity configured.
///
/// Realism level: **REAL**: valid git object store, identity set so
/// commits succeed, empty history.
///
/// # Panics
/// Panics if `git2` operations fail.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    });
    {
        let mut config = repo
            .config()
            .unwrap_or_else(|e| panic!("real_git_repo: failed to open config: {e}"));
        config
            .set_str("user.name", "Test User")
            .unwrap_or_else(|e| panic!("real_git_repo: failed to set user.name: {e}"));
        config
            .set_str("user.email", "test@test.com")
            .unwrap_or_else(|e| panic!("real_git_repo: failed to set user.email: {e}"));
    }
    repo
}
