//! Directory listing in include order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Symlinks count as regular files when their target is one. Names compare
/// as raw bytes on Unix, so the order does not depend on the locale or on
/// the order the filesystem returns entries in. Subdirectories are never
/// descended into.
///
/// # Errors
///
/// Returns [`Error::ListDirectory`] if the directory cannot be read.
pub fn regular_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let list_error = |source| Error::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
