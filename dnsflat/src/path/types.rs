//! Core types for path handling.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// A path in canonical form: absolute, with symlinks and `.`/`..` resolved
/// as far as the filesystem allows.
///
/// Equality and hashing are defined on this form, so it is the key used to
/// recognise a file that has already been visited, however it was spelled
/// at the inclusion site.
///
/// Values are only produced by
/// [`canonical_path`](crate::path::canonicalize::canonical_path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPath(PathBuf);

impl CanonicalPath {
    pub(crate) fn from_resolved(path: PathBuf) -> Self {
        Self(path)
    }

    /// Returns the canonical path as a `Path` reference.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// The final component of the path, lossily converted to UTF-8.
    ///
    /// Returns an empty string for a path without a final component
    /// (the root).
    #[must_use]
    pub fn file_name(&self) -> Cow<'_, str> {
        file_name_of(&self.0)
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// The final component of `path` as used for suffix matching.
///
/// Non-UTF-8 names are converted lossily; a path with no final component
/// yields an empty string.
///
/// # Examples
///
/// ```
/// use dnsflat::path::file_name_of;
/// use std::path::Path;
///
/// assert_eq!(file_name_of(Path::new("/etc/dnsmasq.d/local.conf")), "local.conf");
/// assert_eq!(file_name_of(Path::new("/")), "");
/// ```
#[must_use]
pub fn file_name_of(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
}
