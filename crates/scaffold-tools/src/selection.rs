//! Parsing and normalization of user-supplied tool lists

use scaffold_fs::ProjectPath;

use crate::{Error, Result, Tool};

/// Literal that expands to every supported tool.
const ALL: &str = "all";

/// An ordered, de-duplicated selection of tools.
///
/// First-mention order is preserved; repeated names collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSelection {
    tools: Vec<Tool>,
}

impl ToolSelection {
    /// Parse a comma-separated tool list.
    ///
    /// The literal `all` expands to the full registry. Whitespace around
    /// names is trimmed. Empty input, empty elements, and unknown names
    /// are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::EmptySelection);
        }

        let mut tools = Vec::new();
        for raw in input.split(',') {
            let name = raw.trim();
            if name.is_empty() {
                return Err(Error::EmptySelection);
            }
            if name.eq_ignore_ascii_case(ALL) {
                for tool in Tool::ALL {
                    push_unique(&mut tools, tool);
                }
                continue;
            }
            push_unique(&mut tools, name.parse()?);
        }

        Ok(Self { tools })
    }

    /// Build a selection from already-parsed tools, de-duplicating.
    pub fn from_tools(input: impl IntoIterator<Item = Tool>) -> Result<Self> {
        let mut tools = Vec::new();
        for tool in input {
            push_unique(&mut tools, tool);
        }
        if tools.is_empty() {
            return Err(Error::EmptySelection);
        }
        Ok(Self { tools })
    }

    /// The selected tools, in first-mention order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Template directories to copy, unique and in first-need order.
    ///
    /// Tools sharing a directory (antigravity, gemini) contribute it once.
    pub fn unique_template_dirs(&self) -> Vec<ProjectPath> {
        let mut dirs = Vec::new();
        for tool in &self.tools {
            let dir = tool.template_dir();
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }

    /// Render the selection as a comma-separated list.
    pub fn to_csv(&self) -> String {
        self.tools
            .iter()
            .map(Tool::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn push_unique(tools: &mut Vec<Tool>, tool: Tool) {
    if !tools.contains(&tool) {
        tools.push(tool);
    }
}

impl std::fmt::Display for ToolSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_csv())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_single_tool() {
        let selection = ToolSelection::parse("claude").unwrap();
        assert_eq!(selection.tools(), &[Tool::Claude]);
    }

    #[test]
    fn parses_csv_preserving_order() {
        let selection = ToolSelection::parse("cursor,claude").unwrap();
        assert_eq!(selection.tools(), &[Tool::Cursor, Tool::Claude]);
    }

    #[test]
    fn all_expands_to_full_registry() {
        let selection = ToolSelection::parse("all").unwrap();
        assert_eq!(selection.tools(), &Tool::ALL);
    }

    #[test]
    fn all_combined_with_explicit_names_collapses() {
        let selection = ToolSelection::parse("all,claude").unwrap();
        assert_eq!(selection.tools(), &Tool::ALL);
    }

    #[test]
    fn duplicates_collapse() {
        let selection = ToolSelection::parse("claude,claude,cursor").unwrap();
        assert_eq!(selection.tools(), &[Tool::Claude, Tool::Cursor]);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let selection = ToolSelection::parse(" claude , cursor ").unwrap();
        assert_eq!(selection.tools(), &[Tool::Claude, Tool::Cursor]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("claude,,cursor")]
    #[case("claude,")]
    fn empty_elements_are_rejected(#[case] input: &str) {
        assert!(matches!(
            ToolSelection::parse(input),
            Err(Error::EmptySelection)
        ));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = ToolSelection::parse("claude,bogus").unwrap_err();
        assert!(matches!(err, Error::UnknownTool { .. }));
    }

    #[test]
    fn shared_template_dir_copied_once() {
        let selection = ToolSelection::parse("antigravity,gemini").unwrap();
        assert_eq!(
            selection.unique_template_dirs(),
            vec![ProjectPath::AgentDir]
        );
    }

    #[test]
    fn template_dirs_follow_selection_order() {
        let selection = ToolSelection::parse("cursor,claude,gemini").unwrap();
        assert_eq!(
            selection.unique_template_dirs(),
            vec![
                ProjectPath::CursorDir,
                ProjectPath::ClaudeDir,
                ProjectPath::AgentDir
            ]
        );
    }

    #[test]
    fn to_csv_round_trips() {
        let selection = ToolSelection::parse("claude,gemini").unwrap();
        assert_eq!(selection.to_csv(), "claude,gemini");
        assert_eq!(ToolSelection::parse(&selection.to_csv()).unwrap(), selection);
    }
}
