//! The packaging defaults file.
//!
//! Distributions ship a small shell-style file (`/etc/default/dnsmasq` on
//! Debian) whose `CONFIG_DIR` entry names a directory the daemon reads in
//! addition to its main config, followed by filename suffixes to ignore
//! everywhere:
//!
//! ```text
//! CONFIG_DIR=/etc/dnsmasq.d,.dpkg-dist,.dpkg-old,.dpkg-new
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::directive::{directory_path, lines};
use crate::error::{Error, Result};
use crate::filter::SuffixPatterns;

/// Well-known location of the defaults file.
pub const DEFAULTS_PATH: &str = "/etc/default/dnsmasq";

/// Key whose value carries the directory and exclusion suffixes.
pub const CONFIG_DIR_KEY: &str = "CONFIG_DIR";

/// Values extracted from the defaults file.
///
/// The default value means "no defaults configured".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    /// Directory whose files are always read after the main config.
    pub config_dir: Option<PathBuf>,
    /// Filename suffixes excluded at every inclusion decision.
    pub exclusions: SuffixPatterns,
}

impl Defaults {
    /// Read defaults from `path`.
    ///
    /// A path that is not a regular file yields [`Defaults::default`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("no defaults file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&contents))
    }

    /// Extract defaults from the text of a defaults file.
    ///
    /// Blank lines and `#` comments are skipped. The first line of the form
    /// `CONFIG_DIR=VALUE` with a non-empty value wins; the value is split on
    /// commas into the directory and the exclusion suffixes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnsflat::Defaults;
    /// use std::path::Path;
    ///
    /// let defaults = Defaults::parse("CONFIG_DIR=/etc/dnsmasq.d,.dpkg-dist\n");
    /// assert_eq!(defaults.config_dir.as_deref(), Some(Path::new("/etc/dnsmasq.d")));
    /// assert!(defaults.exclusions.matches("a.conf.dpkg-dist"));
    /// ```
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        for line in lines(contents) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(value) = line
                .strip_prefix(CONFIG_DIR_KEY)
                .and_then(|rest| rest.strip_prefix('='))
                .filter(|value| !value.is_empty())
            else {
                continue;
            };

            let mut parts = value.split(',');
            let config_dir = parts.next().map(|dir| directory_path(dir).to_path_buf());
            return Self {
                config_dir,
                exclusions: parts.collect(),
            };
        }

        Self::default()
    }
}
