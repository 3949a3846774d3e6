//! PATH probing for optional companion binaries
//!
//! Absence of a companion tool is a soft condition: scaffolding continues
//! and the summary carries a warning.

use std::env;
use std::path::Path;

/// Companion binaries the summary warns about when absent.
///
/// `git-secrets` is probed separately by the git flow.
const OPTIONAL_TOOLS: &[(&str, &str)] = &[
    ("markdownlint", "markdown rule files will not be linted"),
    ("lefthook", "git hooks will not be managed"),
];

/// Check whether an executable with the given name is reachable via PATH.
pub fn binary_on_path(name: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| candidate_exists(&dir, name))
}

fn candidate_exists(dir: &Path, name: &str) -> bool {
    if dir.join(name).is_file() {
        return true;
    }
    if cfg!(windows) {
        for ext in ["exe", "cmd", "bat"] {
            if dir.join(format!("{name}.{ext}")).is_file() {
                return true;
            }
        }
    }
    false
}

/// Collect warnings for optional companion tools missing from PATH.
pub fn optional_tool_warnings() -> Vec<String> {
    OPTIONAL_TOOLS
        .iter()
        .filter(|(name, _)| !binary_on_path(name))
        .map(|(name, consequence)| {
            tracing::debug!(tool = name, "optional companion not found on PATH");
            format!("'{name}' not found on PATH: {consequence}")
        })
        .collect()
}
