//! Constants for well-known scaffold filesystem paths.

use std::path::Path;

/// Standard paths created or inspected inside a scaffolded project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectPath {
    /// The `.claude` directory (Claude Code configuration)
    ClaudeDir,
    /// The `.cursor` directory (Cursor IDE configuration)
    CursorDir,
    /// The `.agent` directory (shared agent configuration)
    AgentDir,
    /// The `.git` directory (Git database)
    GitDir,
    /// The `.scaffold` directory (manifest root)
    ScaffoldDir,
    /// The `README.md` file
    Readme,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaudeDir => ".claude",
            Self::CursorDir => ".cursor",
            Self::AgentDir => ".agent",
            Self::GitDir => ".git",
            Self::ScaffoldDir => ".scaffold",
            Self::Readme => "README.md",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
