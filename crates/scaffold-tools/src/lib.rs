//! Tool registry for the scaffold workspace
//!
//! Defines the fixed set of supported AI coding assistants, parsing of
//! user-supplied tool lists, and PATH probing for optional companions.

pub mod error;
pub mod probe;
pub mod registry;
pub mod selection;

pub use error::{Error, Result};
pub use registry::{Tool, ToolRegistry};
pub use selection::ToolSelection;
