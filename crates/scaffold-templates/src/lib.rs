//! Template sources for the scaffold workspace
//!
//! A template source is either an on-disk directory (copied verbatim) or
//! the builtin set embedded at compile time. Discovery resolves the source
//! once, before any filesystem mutation.

pub mod builtin;
pub mod error;
pub mod readme;
pub mod source;

pub use error::{Error, Result};
pub use readme::readme_boilerplate;
pub use source::{TemplateSource, discover, install_template_dir};
