//! Error types for scaffold-tools

/// Result type for scaffold-tools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing tool selections
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown tool '{name}'. Known tools: {known}")]
    UnknownTool { name: String, known: String },

    #[error("Tool list must not be empty")]
    EmptySelection,
}
