//! Git layer for the scaffold workspace
//!
//! Repository initialization and best-effort initial commit via `git2`,
//! plus `git-secrets` pattern registration via subprocess.

pub mod error;
pub mod init;
pub mod secrets;

pub use error::{Error, Result};
pub use init::{init_repository, initial_commit};
pub use secrets::{RegisterOutcome, SECRET_PATTERNS, register_patterns};
