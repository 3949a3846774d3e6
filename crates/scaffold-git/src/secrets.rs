//! git-secrets pattern registration
//!
//! `git-secrets` is an external tool; callers decide whether it is
//! available (PATH probe) and treat its absence as a soft condition.

use std::process::Command;

use scaffold_fs::NormalizedPath;

use crate::{Error, Result};

/// Fixed set of prohibited patterns registered in new repositories.
pub const SECRET_PATTERNS: &[&str] = &[
    // AWS access key id
    "(A3T[A-Z0-9]|AKIA|AGPA|AIDA|AROA|AIPA|ANPA|ANVA|ASIA)[A-Z0-9]{16}",
    // Quoted 40-char base64-ish blob (AWS secret key heuristic)
    "[\"'][0-9a-zA-Z/+]{40}[\"']",
    // Generic api-key assignment
    "(api|API)[_-]?(key|KEY)[[:space:]]*[:=]",
    // Private key block header
    "-----BEGIN (RSA|EC|DSA|OPENSSH) PRIVATE KEY-----",
];

/// Result of a `git-secrets` registration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOutcome {
    /// Number of patterns successfully added
    pub patterns_added: usize,
    /// Per-command failures, reported but non-fatal
    pub warnings: Vec<String>,
}

/// Install the `git-secrets` hooks and register [`SECRET_PATTERNS`].
///
/// Individual command failures are collected as warnings; only a failure
/// to spawn `git` at all is an error.
pub fn register_patterns(root: &NormalizedPath) -> Result<RegisterOutcome> {
    let mut warnings = Vec::new();

    if let Some(warning) = run_git_secrets(root, &["--install"])? {
        warnings.push(warning);
    }

    let mut patterns_added = 0;
    for pattern in SECRET_PATTERNS {
        match run_git_secrets(root, &["--add", pattern])? {
            None => patterns_added += 1,
            Some(warning) => warnings.push(warning),
        }
    }

    tracing::debug!(patterns_added, "registered git-secrets patterns");
    Ok(RegisterOutcome {
        patterns_added,
        warnings,
    })
}

/// Run `git secrets <args>` in `root`; a non-zero exit becomes a warning.
fn run_git_secrets(root: &NormalizedPath, args: &[&str]) -> Result<Option<String>> {
    let output = Command::new("git")
        .arg("secrets")
        .args(args)
        .current_dir(root.to_native())
        .output()
        .map_err(|e| Error::Subprocess {
            command: format!("git secrets {}", args.join(" ")),
            source: e,
        })?;

    if output.status.success() {
        Ok(None)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Ok(Some(format!(
            "git secrets {} failed: {}",
            args.join(" "),
            stderr.trim()
        )))
    }
}
