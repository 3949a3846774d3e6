//! Filesystem layer for the scaffold workspace
//!
//! Provides normalized path handling, atomic I/O, recursive template
//! copying, and checksum utilities.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod copy;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ProjectPath;
pub use copy::CopiedFile;
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_project_name};
