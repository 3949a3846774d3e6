//! Execution: materialize a validated plan on the filesystem
//!
//! Steps run in a fixed order: project directory, template directories,
//! README, manifest, then optional git. A failure aborts immediately and
//! leaves already-written files in place for inspection.

use std::fs;

use scaffold_fs::{ProjectPath, io};
use scaffold_templates::{install_template_dir, readme_boilerplate};
use scaffold_tools::probe;

use crate::manifest::{Manifest, ManifestFile};
use crate::{Result, ScaffoldPlan, ScaffoldReport};

/// Execute a plan and report what was created.
pub fn execute(plan: &ScaffoldPlan) -> Result<ScaffoldReport> {
    let target = &plan.target;
    let target_native = target.to_native();
    fs::create_dir(&target_native).map_err(|e| scaffold_fs::Error::io(&target_native, e))?;
    tracing::debug!(target = %target, "created project directory");

    let mut files = Vec::new();
    let mut created_dirs = Vec::new();
    for dir in &plan.template_dirs {
        let dst = target.join(dir.as_str());
        let copied = install_template_dir(&plan.template_source, *dir, &dst)?;
        tracing::debug!(dir = %dir, count = copied.len(), "installed template directory");
        for file in copied {
            files.push(ManifestFile {
                path: format!("{}/{}", dir.as_str(), file.relative),
                checksum: file.checksum,
            });
        }
        created_dirs.push(dir.as_str().to_string());
    }

    let readme = readme_boilerplate(&plan.name);
    io::write_text(&target.join(ProjectPath::Readme.as_str()), &readme)?;
    files.push(ManifestFile {
        path: ProjectPath::Readme.as_str().to_string(),
        checksum: scaffold_fs::checksum::compute_content_checksum(&readme),
    });

    let files_copied = files.len();
    let manifest = Manifest::new(
        plan.name.clone(),
        plan.tools.tools(),
        plan.template_source.describe(),
        files,
    );
    let manifest_path = manifest.save(target)?;

    let mut warnings = probe::optional_tool_warnings();
    let mut git_initialized = false;
    let mut secret_patterns_registered = 0;
    if plan.git {
        git_initialized = scaffold_git::init_repository(target)?;

        if probe::binary_on_path("git-secrets") {
            let outcome = scaffold_git::register_patterns(target)?;
            secret_patterns_registered = outcome.patterns_added;
            warnings.extend(outcome.warnings);
        } else {
            warnings.push(
                "'git-secrets' not found on PATH: secret patterns were not registered".to_string(),
            );
        }

        if let Some(warning) = scaffold_git::initial_commit(target) {
            warnings.push(warning);
        }
    }

    Ok(ScaffoldReport {
        project_root: target.as_str().to_string(),
        tools: plan.tools.tools().to_vec(),
        created_dirs,
        files_copied,
        manifest_path: manifest_path.as_str().to_string(),
        git_initialized,
        secret_patterns_registered,
        warnings,
    })
}
