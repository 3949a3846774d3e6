//! Error types for scaffold-templates

use std::path::PathBuf;

/// Result type for scaffold-templates operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or installing templates
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Template root does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Template directory '{tool_dir}' missing under {root}")]
    TemplateDirMissing { tool_dir: String, root: PathBuf },

    #[error(transparent)]
    Fs(#[from] scaffold_fs::Error),
}
