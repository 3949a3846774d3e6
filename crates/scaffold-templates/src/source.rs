//! Template source discovery and installation

use std::path::Path;

use scaffold_fs::{CopiedFile, NormalizedPath, ProjectPath, checksum, copy, io};

use crate::{Error, Result, builtin};

/// Environment variable naming an on-disk template root.
pub const TEMPLATES_ENV_VAR: &str = "SCAFFOLD_TEMPLATES";

/// Where template content comes from.
///
/// A directory source holds subdirectories named exactly like their
/// destination (`.claude/`, `.cursor/`, `.agent/`) and is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Directory(NormalizedPath),
    Builtin,
}

impl TemplateSource {
    /// Human-readable description, recorded in the manifest.
    pub fn describe(&self) -> String {
        match self {
            Self::Directory(root) => format!("directory:{root}"),
            Self::Builtin => "builtin".to_string(),
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Resolve the template source.
///
/// Precedence:
/// 1. Explicit path (`--templates`): must exist, otherwise an error.
/// 2. `SCAFFOLD_TEMPLATES` env var: a missing path logs a warning and
///    falls through.
/// 3. `<user config dir>/scaffold/templates`, when present.
/// 4. Builtin embedded templates.
pub fn discover(explicit: Option<&Path>) -> Result<TemplateSource> {
    if let Some(path) = explicit {
        if path.is_dir() {
            return Ok(TemplateSource::Directory(NormalizedPath::new(path)));
        }
        return Err(Error::RootNotFound {
            path: path.to_path_buf(),
        });
    }

    if let Some(env_root) = std::env::var_os(TEMPLATES_ENV_VAR) {
        let path = Path::new(&env_root);
        if path.is_dir() {
            return Ok(TemplateSource::Directory(NormalizedPath::new(path)));
        }
        tracing::warn!(
            path = %path.display(),
            "{TEMPLATES_ENV_VAR} points to a missing directory, falling back"
        );
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_root = config_dir.join("scaffold").join("templates");
        if user_root.is_dir() {
            return Ok(TemplateSource::Directory(NormalizedPath::new(user_root)));
        }
    }

    Ok(TemplateSource::Builtin)
}

/// Install one template directory into `dst`.
///
/// Directory sources are copied verbatim; the builtin source writes the
/// embedded files. Returns the installed files with checksums.
pub fn install_template_dir(
    source: &TemplateSource,
    tool_dir: ProjectPath,
    dst: &NormalizedPath,
) -> Result<Vec<CopiedFile>> {
    match source {
        TemplateSource::Directory(root) => {
            let src = root.join(tool_dir.as_str());
            if !src.is_dir() {
                return Err(Error::TemplateDirMissing {
                    tool_dir: tool_dir.as_str().to_string(),
                    root: root.to_native(),
                });
            }
            Ok(copy::copy_dir_recursive(&src, dst)?)
        }
        TemplateSource::Builtin => {
            let mut copied = Vec::new();
            for (relative, content) in builtin::files_for(tool_dir) {
                let target = dst.join(relative);
                io::write_text(&target, content)?;
                copied.push(CopiedFile {
                    relative: (*relative).to_string(),
                    checksum: checksum::compute_content_checksum(content),
                });
            }
            Ok(copied)
        }
    }
}
