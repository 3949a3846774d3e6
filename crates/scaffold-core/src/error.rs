//! Error types for scaffold-core

use std::path::PathBuf;

/// Result type for scaffold-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning or executing a scaffold
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] scaffold_fs::Error),

    #[error(transparent)]
    Tools(#[from] scaffold_tools::Error),

    #[error(transparent)]
    Templates(#[from] scaffold_templates::Error),

    #[error(transparent)]
    Git(#[from] scaffold_git::Error),

    #[error("Target directory already exists: {path}")]
    TargetExists { path: PathBuf },

    #[error("Parent directory does not exist: {path}")]
    ParentMissing { path: PathBuf },
}
