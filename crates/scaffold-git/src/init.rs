//! Repository initialization and initial commit

use git2::{IndexAddOption, Repository};
use scaffold_fs::{NormalizedPath, ProjectPath};

use crate::Result;

/// Initialize a git repository at `root`.
///
/// Returns `true` if a repository was created, `false` if `.git` already
/// existed (the existing repository is left untouched).
pub fn init_repository(root: &NormalizedPath) -> Result<bool> {
    if root.join(ProjectPath::GitDir.as_str()).exists() {
        tracing::debug!(root = %root, "git repository already present");
        return Ok(false);
    }
    Repository::init(root.to_native())?;
    tracing::debug!(root = %root, "initialized git repository");
    Ok(true)
}

/// Stage everything and create the initial commit.
///
/// Commit failure is deliberately non-fatal: the scaffolded project is
/// complete without it. Returns a warning message on failure, `None` on
/// success.
pub fn initial_commit(root: &NormalizedPath) -> Option<String> {
    match try_commit(root) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(root = %root, error = %e, "initial commit failed");
            Some(format!("initial commit failed: {e}"))
        }
    }
}

fn try_commit(root: &NormalizedPath) -> std::result::Result<(), git2::Error> {
    let repo = Repository::open(root.to_native())?;
    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    // Fails when user.name/user.email are unset; the caller reports the
    // warning and continues.
    let signature = repo.signature()?;
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        "Initial commit",
        &tree,
        &[],
    )?;
    Ok(())
}
