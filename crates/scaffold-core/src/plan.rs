//! Planning: validate everything before the filesystem changes

use scaffold_fs::{NormalizedPath, ProjectPath, validate_project_name};
use scaffold_templates::TemplateSource;
use scaffold_tools::ToolSelection;

use crate::{Error, Result, ScaffoldRequest};

/// A validated, pre-mutation view of the work to do.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub name: String,
    pub tools: ToolSelection,
    pub target: NormalizedPath,
    pub template_dirs: Vec<ProjectPath>,
    pub template_source: TemplateSource,
    pub git: bool,
}

/// Validate a request and compute the target.
///
/// Checks, in order: project name, parent directory existence, target
/// non-existence. Performs no filesystem mutation.
pub fn plan(request: ScaffoldRequest) -> Result<ScaffoldPlan> {
    validate_project_name(&request.name)?;

    if !request.parent.is_dir() {
        return Err(Error::ParentMissing {
            path: request.parent,
        });
    }
    let parent = dunce::canonicalize(&request.parent)
        .map_err(|e| scaffold_fs::Error::io(&request.parent, e))?;

    let target = NormalizedPath::new(parent.join(&request.name));
    if target.exists() {
        return Err(Error::TargetExists {
            path: target.to_native(),
        });
    }

    let template_dirs = request.tools.unique_template_dirs();
    tracing::debug!(
        target = %target,
        tools = %request.tools,
        source = %request.template_source,
        "planned scaffold"
    );

    Ok(ScaffoldPlan {
        name: request.name,
        tools: request.tools,
        target,
        template_dirs,
        template_source: request.template_source,
        git: request.git,
    })
}
