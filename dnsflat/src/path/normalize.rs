//! Path normalization functions.
//!
//! This module provides lexical normalization:
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! Nothing here touches the filesystem apart from reading the current
//! working directory.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Join a relative path onto the current working directory.
///
/// Absolute paths are returned unchanged. An empty path names the working
/// directory itself.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
///
/// # Examples
///
/// ```
/// use dnsflat::path::normalize::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("dnsmasq.conf")).unwrap();
/// assert!(absolute.is_absolute());
/// assert!(absolute.ends_with("dnsmasq.conf"));
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;

    if path.as_os_str().is_empty() {
        Ok(cwd)
    } else {
        Ok(cwd.join(path))
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// A `..` at the root stays at the root, the same way the kernel treats
/// `/..`.
///
/// # Examples
///
/// ```
/// use dnsflat::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op
                result.pop();
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}

/// Normalize a path to absolute form without consulting symlinks.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
///
/// # Examples
///
/// ```
/// use dnsflat::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("/etc/./dnsmasq.d/../dnsmasq.conf")).unwrap();
/// assert_eq!(normalized, Path::new("/etc/dnsmasq.conf"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    Ok(resolve_components(&absolutize(path)?))
}
