//! Error types for scaffold-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from scaffold-core
    #[error(transparent)]
    Core(#[from] scaffold_core::Error),

    /// Error from tool-list parsing
    #[error(transparent)]
    Tools(#[from] scaffold_tools::Error),

    /// Error from template source resolution
    #[error(transparent)]
    Templates(#[from] scaffold_templates::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
