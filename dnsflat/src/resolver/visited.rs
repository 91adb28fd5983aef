//! Traversal state shared by one resolution.

use std::collections::HashSet;

use crate::path::CanonicalPath;

/// The set of files already claimed by a traversal.
///
/// A path is inserted before its file is read and is never removed, so a
/// file reached a second time (through a cycle or a diamond) contributes
/// nothing the second time. Use one set per independently rooted
/// traversal.
///
/// # Examples
///
/// ```no_run
/// use dnsflat::path::canonical_path;
/// use dnsflat::VisitedSet;
/// use std::path::Path;
///
/// let mut visited = VisitedSet::new();
/// let path = canonical_path(Path::new("/etc/dnsmasq.conf")).unwrap();
/// assert!(visited.insert(path.clone()));
/// assert!(!visited.insert(path));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    paths: HashSet<CanonicalPath>,
}

impl VisitedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path`; returns false if it was already present.
    pub fn insert(&mut self, path: CanonicalPath) -> bool {
        self.paths.insert(path)
    }

    /// Check whether `path` has been recorded.
    #[must_use]
    pub fn contains(&self, path: &CanonicalPath) -> bool {
        self.paths.contains(path)
    }

    /// Number of recorded paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over recorded paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalPath> {
        self.paths.iter()
    }
}
