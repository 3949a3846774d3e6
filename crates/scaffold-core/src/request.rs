//! Scaffold request: the validated CLI/interactive input

use std::path::PathBuf;

use scaffold_templates::TemplateSource;
use scaffold_tools::ToolSelection;

/// Everything needed to scaffold one project.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Destination project name (becomes the directory name)
    pub name: String,
    /// Selected tools
    pub tools: ToolSelection,
    /// Parent directory the project is created under
    pub parent: PathBuf,
    /// Whether to initialize git and register secret patterns
    pub git: bool,
    /// Where template content comes from
    pub template_source: TemplateSource,
}
