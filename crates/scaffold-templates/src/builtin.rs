//! Builtin templates embedded at compile time
//!
//! Used when no on-disk template root is configured, so the tool works
//! with no installation step.

use scaffold_fs::ProjectPath;

/// Claude Code configuration files
const CLAUDE_RULES: &str = include_str!("../templates/claude/CLAUDE.md");
const CLAUDE_SETTINGS: &str = include_str!("../templates/claude/settings.json");
const CLAUDE_REVIEW_COMMAND: &str = include_str!("../templates/claude/commands/review.md");

/// Cursor IDE configuration files
const CURSOR_GENERAL_RULES: &str = include_str!("../templates/cursor/rules/general.mdc");

/// Shared agent configuration files (Antigravity, Gemini)
const AGENT_INSTRUCTIONS: &str = include_str!("../templates/agent/AGENT.md");
const AGENT_CONVENTIONS: &str = include_str!("../templates/agent/rules/conventions.md");

/// README boilerplate with a `{{project_name}}` placeholder
pub(crate) const README_TEMPLATE: &str = include_str!("../templates/README.md");

/// Embedded files for a template directory: `(relative_path, content)`.
///
/// Returns an empty slice for paths that are not template directories.
pub fn files_for(dir: ProjectPath) -> &'static [(&'static str, &'static str)] {
    match dir {
        ProjectPath::ClaudeDir => &[
            ("CLAUDE.md", CLAUDE_RULES),
            ("settings.json", CLAUDE_SETTINGS),
            ("commands/review.md", CLAUDE_REVIEW_COMMAND),
        ],
        ProjectPath::CursorDir => &[("rules/general.mdc", CURSOR_GENERAL_RULES)],
        ProjectPath::AgentDir => &[
            ("AGENT.md", AGENT_INSTRUCTIONS),
            ("rules/conventions.md", AGENT_CONVENTIONS),
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_dir_has_files() {
        for dir in [
            ProjectPath::ClaudeDir,
            ProjectPath::CursorDir,
            ProjectPath::AgentDir,
        ] {
            assert!(!files_for(dir).is_empty(), "{dir} should have templates");
        }
    }

    #[test]
    fn non_template_dirs_have_none() {
        assert!(files_for(ProjectPath::GitDir).is_empty());
        assert!(files_for(ProjectPath::ScaffoldDir).is_empty());
    }

    #[test]
    fn relative_paths_are_normalized() {
        for dir in [
            ProjectPath::ClaudeDir,
            ProjectPath::CursorDir,
            ProjectPath::AgentDir,
        ] {
            for (relative, content) in files_for(dir) {
                assert!(!relative.starts_with('/'));
                assert!(!relative.contains('\\'));
                assert!(!content.is_empty());
            }
        }
    }
}
