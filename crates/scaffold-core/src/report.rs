//! Scaffold report: what a run created and what it warned about

use scaffold_tools::Tool;
use serde::Serialize;

/// Summary of a completed scaffold run.
///
/// Serializable for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    /// Absolute project root, forward-slash separated
    pub project_root: String,
    /// Tools the project was scaffolded for
    pub tools: Vec<Tool>,
    /// Template directories created (`.claude`, `.cursor`, `.agent`)
    pub created_dirs: Vec<String>,
    /// Total files written (templates, README, manifest excluded)
    pub files_copied: usize,
    /// Manifest location
    pub manifest_path: String,
    /// Whether a git repository was initialized by this run
    pub git_initialized: bool,
    /// Number of git-secrets patterns registered
    pub secret_patterns_registered: usize,
    /// Soft conditions encountered: commit failure, absent companions
    pub warnings: Vec<String>,
}
