//! README boilerplate generation

use crate::builtin::README_TEMPLATE;

/// Placeholder substituted with the project name.
const NAME_PLACEHOLDER: &str = "{{project_name}}";

/// Render the fixed README boilerplate for a new project.
pub fn readme_boilerplate(project_name: &str) -> String {
    README_TEMPLATE.replace(NAME_PLACEHOLDER, project_name)
}
