//! Error types for scaffold-git

/// Result type for scaffold-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scaffold-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Fs(#[from] scaffold_fs::Error),

    #[error("I/O error running {command}: {source}")]
    Subprocess {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
