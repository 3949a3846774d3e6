//! Known tools registry
//!
//! The supported assistants form a closed set; anything outside it is
//! rejected before the filesystem is touched.

use std::str::FromStr;

use scaffold_fs::ProjectPath;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A supported AI coding assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Claude,
    Cursor,
    Antigravity,
    Gemini,
}

impl Tool {
    /// All supported tools, in canonical order.
    pub const ALL: [Tool; 4] = [Tool::Claude, Tool::Cursor, Tool::Antigravity, Tool::Gemini];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Cursor => "cursor",
            Self::Antigravity => "antigravity",
            Self::Gemini => "gemini",
        }
    }

    /// The template directory this tool reads its configuration from.
    ///
    /// `antigravity` and `gemini` share `.agent`.
    pub fn template_dir(&self) -> ProjectPath {
        match self {
            Self::Claude => ProjectPath::ClaudeDir,
            Self::Cursor => ProjectPath::CursorDir,
            Self::Antigravity | Self::Gemini => ProjectPath::AgentDir,
        }
    }
}

impl FromStr for Tool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "claude" => Ok(Self::Claude),
            "cursor" => Ok(Self::Cursor),
            "antigravity" => Ok(Self::Antigravity),
            "gemini" => Ok(Self::Gemini),
            other => Err(Error::UnknownTool {
                name: other.to_string(),
                known: ToolRegistry::with_builtins().list_known().join(", "),
            }),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registry of recognized tool names for validation and listing.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    known_tools: Vec<&'static str>,
}

impl ToolRegistry {
    /// Create a registry with the built-in supported tools.
    ///
    /// Includes: claude, cursor, antigravity, gemini
    pub fn with_builtins() -> Self {
        Self {
            known_tools: Tool::ALL.iter().map(Tool::as_str).collect(),
        }
    }

    /// Check if a tool name is known.
    pub fn is_known(&self, name: &str) -> bool {
        self.known_tools.iter().any(|t| *t == name)
    }

    /// List all known tools, sorted alphabetically.
    pub fn list_known(&self) -> Vec<&'static str> {
        let mut tools = self.known_tools.clone();
        tools.sort_unstable();
        tools
    }

    /// Get the number of known tools.
    pub fn len(&self) -> usize {
        self.known_tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.known_tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
