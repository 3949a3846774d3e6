//! Scaffold manifest persisted into the new project
//!
//! Records what was scaffolded so later tooling can detect drift against
//! the original template content.

use scaffold_fs::{ConfigStore, NormalizedPath, ProjectPath};
use scaffold_tools::Tool;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Manifest file name under `.scaffold/`
const MANIFEST_FILE: &str = "manifest.toml";

/// One file recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Path relative to the project root, forward-slash separated
    pub path: String,
    /// Canonical `sha256:<hex>` checksum at scaffold time
    pub checksum: String,
}

/// The persisted record of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Project name
    pub name: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// Tools the project was scaffolded for
    pub tools: Vec<Tool>,
    /// Template source description (`builtin` or `directory:<path>`)
    pub template_source: String,
    /// Files written, with checksums
    pub files: Vec<ManifestFile>,
}

impl Manifest {
    /// Build a manifest stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        tools: &[Tool],
        template_source: impl Into<String>,
        files: Vec<ManifestFile>,
    ) -> Self {
        Self {
            name: name.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
            tools: tools.to_vec(),
            template_source: template_source.into(),
            files,
        }
    }

    /// Save to `.scaffold/manifest.toml` under `root`.
    pub fn save(&self, root: &NormalizedPath) -> Result<NormalizedPath> {
        let path = manifest_path(root);
        ConfigStore::new().save(&path, self)?;
        Ok(path)
    }

    /// Load from `.scaffold/manifest.toml` under `root`.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(&manifest_path(root))?)
    }
}

/// The manifest path for a project root.
pub fn manifest_path(root: &NormalizedPath) -> NormalizedPath {
    root.join(ProjectPath::ScaffoldDir.as_str())
        .join(MANIFEST_FILE)
}
