//! Path canonicalization functions.
//!
//! This module resolves paths to the identity used for cycle detection:
//! - Full canonicalization of existing paths
//! - Partial canonicalization for non-existent paths
//!
//! Two references to the same file (relative and absolute, or through a
//! symlink) always produce the same [`CanonicalPath`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::normalize::{absolutize, resolve_components};
use super::types::CanonicalPath;

/// Canonicalize an existing path by following symlinks.
///
/// # Errors
///
/// Returns an error if the path does not exist, permission is denied, or
/// another I/O error occurs.
///
/// # Examples
///
/// ```no_run
/// use dnsflat::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/etc")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => Error::InvalidPath {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
        _ => Error::Io(e),
    })
}

/// Canonicalize the existing portion of a path.
///
/// For non-existent paths, this function finds the longest existing ancestor
/// and canonicalizes it, returning the non-existent components separately.
///
/// # Errors
///
/// Returns an error if no existing ancestor can be found or the existing
/// ancestor cannot be canonicalized.
///
/// # Examples
///
/// ```no_run
/// use dnsflat::path::canonicalize::canonicalize_existing;
/// use std::path::{Path, PathBuf};
///
/// let (canonical, remainder) =
///     canonicalize_existing(Path::new("/tmp/nonexistent/file.conf")).unwrap();
/// assert_eq!(remainder, Some(PathBuf::from("nonexistent/file.conf")));
/// ```
pub fn canonicalize_existing(path: &Path) -> Result<(PathBuf, Option<PathBuf>)> {
    if let Ok(canonical) = canonicalize(path) {
        return Ok((canonical, None));
    }

    let mut current = path.to_path_buf();
    let mut non_existent = Vec::new();

    loop {
        if current.exists() {
            let canonical = canonicalize(&current)?;

            let remainder = if non_existent.is_empty() {
                None
            } else {
                non_existent.reverse();
                Some(non_existent.into_iter().collect())
            };

            return Ok((canonical, remainder));
        }

        match current.file_name() {
            Some(name) => {
                non_existent.push(name.to_os_string());
                current.pop();
            }
            None => {
                return Err(Error::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "Cannot find any existing portion of path".to_string(),
                });
            }
        }
    }
}

/// Compute the canonical identity of a path.
///
/// Existing paths are fully symlink-resolved. For a path that does not exist,
/// the deepest existing ancestor is resolved and the missing components are
/// appended. If even that fails (for example an unreadable ancestor), the
/// lexically normalized absolute path is used. A missing path is never an
/// error.
///
/// # Errors
///
/// Returns an error only if a relative path cannot be made absolute.
///
/// # Examples
///
/// ```no_run
/// use dnsflat::path::canonicalize::canonical_path;
/// use std::path::Path;
///
/// let a = canonical_path(Path::new("/etc/dnsmasq.conf")).unwrap();
/// let b = canonical_path(Path::new("/etc/../etc/dnsmasq.conf")).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn canonical_path(path: &Path) -> Result<CanonicalPath> {
    let absolute = absolutize(path)?;

    if let Ok(canonical) = canonicalize(&absolute) {
        return Ok(CanonicalPath::from_resolved(canonical));
    }

    let lexical = resolve_components(&absolute);
    let resolved = match canonicalize_existing(&lexical) {
        Ok((base, Some(rest))) => base.join(rest),
        Ok((base, None)) => base,
        Err(_) => lexical,
    };

    Ok(CanonicalPath::from_resolved(resolved))
}
