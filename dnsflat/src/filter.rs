//! Filename filtering for include decisions.
//!
//! All patterns are literal filename suffixes: a name matches a pattern when
//! it ends with it. There are no wildcards; the `*` marker seen in
//! `conf-dir` lines only distinguishes an allow-list entry and is stripped
//! before matching.

use crate::directive::INCLUDE_MARKER;

/// An ordered list of filename suffixes.
///
/// # Examples
///
/// ```
/// use dnsflat::SuffixPatterns;
///
/// let patterns = SuffixPatterns::new([".dpkg-dist", ".dpkg-old"]);
/// assert!(patterns.matches("dnsmasq.conf.dpkg-dist"));
/// assert!(!patterns.matches("dnsmasq.conf"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixPatterns(Vec<String>);

impl SuffixPatterns {
    /// Create a pattern list from anything yielding strings.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(patterns.into_iter().map(Into::into).collect())
    }

    /// Create an empty pattern list.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Check whether `name` ends with any of the patterns.
    ///
    /// An empty pattern matches every name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.0.iter().any(|pattern| name.ends_with(pattern.as_str()))
    }

    /// Returns true if there are no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the patterns in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn push(&mut self, pattern: impl Into<String>) {
        self.0.push(pattern.into());
    }
}

impl<S: Into<String>> FromIterator<S> for SuffixPatterns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The local exclude/include pair attached to one `conf-dir` directive.
///
/// # Examples
///
/// ```
/// use dnsflat::{DirectoryFilter, SuffixPatterns};
///
/// let filter = DirectoryFilter::from_modifiers([".bak", "*.conf"]);
/// let global = SuffixPatterns::empty();
///
/// assert!(filter.admits("local.conf", &global));
/// assert!(!filter.admits("notes.txt", &global));
/// assert!(!filter.admits("old.bak", &global));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    /// Suffixes that exclude a file.
    pub exclude: SuffixPatterns,
    /// Suffixes of which a file must match at least one, when non-empty.
    pub include: SuffixPatterns,
}

impl DirectoryFilter {
    /// Build a filter from the comma-separated segments that follow the
    /// directory path.
    ///
    /// Segments starting with `*` go to the allow-list with the marker
    /// removed; all others are exclusions, kept verbatim.
    pub fn from_modifiers<'a, I>(modifiers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut filter = Self::default();
        for modifier in modifiers {
            match modifier.strip_prefix(INCLUDE_MARKER) {
                Some(suffix) => filter.include.push(suffix),
                None => filter.exclude.push(modifier),
            }
        }
        filter
    }

    /// Decide whether a file found in the directory should be included.
    ///
    /// Checks run in order: global exclusions, local exclusions, then the
    /// local allow-list if it has any entries. A global exclusion therefore
    /// wins over an allow-list match.
    #[must_use]
    pub fn admits(&self, name: &str, global: &SuffixPatterns) -> bool {
        if global.matches(name) {
            log::debug!("{name}: excluded by global pattern");
            return false;
        }
        if self.exclude.matches(name) {
            log::debug!("{name}: excluded by directory pattern");
            return false;
        }
        if !self.include.is_empty() && !self.include.matches(name) {
            log::debug!("{name}: not in directory allow-list");
            return false;
        }
        true
    }
}
