//! Orchestration layer for the scaffold workspace
//!
//! Splits scaffolding into a validate-only planning step and an execution
//! step, so every precondition is checked before the filesystem changes.

pub mod error;
pub mod execute;
pub mod manifest;
pub mod plan;
pub mod report;
pub mod request;

pub use error::{Error, Result};
pub use execute::execute;
pub use manifest::{Manifest, ManifestFile, manifest_path};
pub use plan::{ScaffoldPlan, plan};
pub use report::ScaffoldReport;
pub use request::ScaffoldRequest;

/// Plan and execute in one call.
pub fn scaffold(request: ScaffoldRequest) -> Result<ScaffoldReport> {
    let plan = plan::plan(request)?;
    execute::execute(&plan)
}
