//! Recursive resolution of `conf-file` and `conf-dir` directives.
//!
//! Resolution is a depth-first walk of the include graph. Each file is
//! claimed in the [`VisitedSet`] by its canonical path before it is read,
//! which is what makes cycles and diamond-shaped includes terminate: a file
//! reached again contributes nothing, so its lines appear once, at the
//! position of its first encounter.
//!
//! Missing files and missing directories are silently skipped at every
//! level. A file or directory that exists but cannot be read aborts the
//! whole resolution.
//!
//! # Examples
//!
//! ```no_run
//! use dnsflat::{ConfigResolver, SuffixPatterns, VisitedSet};
//! use std::path::Path;
//!
//! let exclusions = SuffixPatterns::new([".dpkg-dist"]);
//! let resolver = ConfigResolver::new(&exclusions);
//!
//! let mut visited = VisitedSet::new();
//! let lines = resolver.resolve(Path::new("/etc/dnsmasq.conf"), &mut visited).unwrap();
//! for line in lines {
//!     println!("{line}");
//! }
//! ```

pub mod listing;
mod visited;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fs;
use std::path::Path;

use crate::directive::{self, ConfDir, Directive};
use crate::error::{Error, Result};
use crate::filter::SuffixPatterns;
use crate::path::{canonical_path, file_name_of};

pub use visited::VisitedSet;

/// Flattens one configuration tree into its effective directive lines.
///
/// The resolver holds the global exclusion suffixes, which apply unchanged
/// at every inclusion decision of the traversal.
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver<'a> {
    exclusions: &'a SuffixPatterns,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver applying `exclusions` globally.
    #[must_use]
    pub const fn new(exclusions: &'a SuffixPatterns) -> Self {
        Self { exclusions }
    }

    /// The global exclusion suffixes.
    #[must_use]
    pub const fn exclusions(&self) -> &'a SuffixPatterns {
        self.exclusions
    }

    /// Resolve `start` and everything it includes.
    ///
    /// `visited` is shared with every nested inclusion and grows as files
    /// are claimed. Pass a fresh set to resolve a tree independently; pass a
    /// set from an earlier call to skip files that call already produced.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read, an existing
    /// directory cannot be listed, or a relative path cannot be made
    /// absolute.
    pub fn resolve(&self, start: &Path, visited: &mut VisitedSet) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.resolve_into(start, visited, &mut lines)?;
        Ok(lines)
    }

    fn resolve_into(
        &self,
        path: &Path,
        visited: &mut VisitedSet,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let canonical = canonical_path(path)?;
        if visited.contains(&canonical) {
            log::debug!("{canonical}: already visited");
            return Ok(());
        }
        visited.insert(canonical.clone());

        if !canonical.as_path().is_file() {
            log::debug!("{canonical}: not a regular file, skipping");
            return Ok(());
        }

        log::debug!("{canonical}: reading");
        let contents = fs::read_to_string(&canonical).map_err(|source| Error::Read {
            path: canonical.clone().into_path_buf(),
            source,
        })?;

        for line in directive::lines(&contents) {
            match Directive::parse(line) {
                None => {}
                Some(Directive::Setting(setting)) => out.push(setting.to_string()),
                Some(Directive::ConfFile(target)) => {
                    let name = file_name_of(target);
                    if self.exclusions.matches(&name) {
                        log::debug!("{name}: excluded by global pattern");
                    } else {
                        self.resolve_into(target, visited, out)?;
                    }
                }
                Some(Directive::ConfDir(dir)) => self.include_directory(&dir, visited, out)?,
            }
        }

        Ok(())
    }

    fn include_directory(
        &self,
        dir: &ConfDir<'_>,
        visited: &mut VisitedSet,
        out: &mut Vec<String>,
    ) -> Result<()> {
        if !dir.path.is_dir() {
            log::debug!("{}: not a directory, skipping", dir.path.display());
            return Ok(());
        }

        for file in listing::regular_files(dir.path)? {
            if dir.filter.admits(&file_name_of(&file), self.exclusions) {
                self.resolve_into(&file, visited, out)?;
            }
        }

        Ok(())
    }
}

/// Resolve `start` with a fresh [`VisitedSet`].
///
/// # Errors
///
/// See [`ConfigResolver::resolve`].
pub fn resolve_config(start: &Path, exclusions: &SuffixPatterns) -> Result<Vec<String>> {
    ConfigResolver::new(exclusions).resolve(start, &mut VisitedSet::new())
}
