//! Recursive directory copy for template directories
//!
//! Templates are opaque bytes: files are copied verbatim, preserving the
//! relative directory structure of the source.

use std::fs;
use std::path::Path;

use crate::{Error, NormalizedPath, Result, checksum};

/// A single file copied by [`copy_dir_recursive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    /// Path relative to the destination root, forward-slash separated
    pub relative: String,
    /// Canonical `sha256:<hex>` checksum of the copied content
    pub checksum: String,
}

/// Copy a directory tree verbatim from `src` into `dst`.
///
/// `dst` and any missing parents are created. Returns one [`CopiedFile`]
/// per regular file copied, in directory-traversal order. Symlinks and
/// other special entries are skipped.
///
/// # Errors
///
/// Fails with [`Error::CopySourceMissing`] if `src` does not exist, or an
/// I/O error naming the first path that could not be read or written.
pub fn copy_dir_recursive(src: &NormalizedPath, dst: &NormalizedPath) -> Result<Vec<CopiedFile>> {
    let src_native = src.to_native();
    if !src_native.is_dir() {
        return Err(Error::CopySourceMissing { path: src_native });
    }

    let dst_native = dst.to_native();
    fs::create_dir_all(&dst_native).map_err(|e| Error::io(&dst_native, e))?;

    let mut copied = Vec::new();
    copy_into(&src_native, &dst_native, &dst_native, "", &mut copied)?;
    Ok(copied)
}

fn copy_into(
    src: &Path,
    dst: &Path,
    dst_root: &Path,
    prefix: &str,
    copied: &mut Vec<CopiedFile>,
) -> Result<()> {
    let entries = fs::read_dir(src).map_err(|e| Error::io(src, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        let relative = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        let target = dst.join(&name);

        if file_type.is_dir() {
            // Invariant: the walk never descends into the destination
            // itself, even when it is nested under the source.
            if entry.path() == dst_root {
                continue;
            }
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
            copy_into(&entry.path(), &target, dst_root, &relative, copied)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).map_err(|e| Error::io(&target, e))?;
            let checksum =
                checksum::compute_file_checksum(&target).map_err(|e| Error::io(&target, e))?;
            copied.push(CopiedFile {
                relative,
                checksum,
            });
        } else {
            tracing::debug!(path = %entry.path().display(), "skipping special entry");
        }
    }

    Ok(())
}
