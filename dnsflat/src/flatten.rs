//! The complete flatten pass.
//!
//! A run resolves the primary configuration file and then, when the
//! defaults name a directory, every eligible file in that directory. This
//! mirrors the daemon, which reads the packaging directory on top of
//! whatever the main config includes.
//!
//! Each file of the default-directory pass is resolved with its own empty
//! visited set, independent of the primary pass. A file that the primary
//! config already pulled in through its own `conf-dir` is therefore
//! emitted a second time.

use std::path::Path;

use crate::config::FlattenConfig;
use crate::defaults::Defaults;
use crate::error::Result;
use crate::path::{canonical_path, file_name_of};
use crate::resolver::{listing, ConfigResolver, VisitedSet};

/// Run a flatten pass as described by `config`.
///
/// # Errors
///
/// Returns an error if the defaults file, a configuration file or a
/// directory exists but cannot be read.
///
/// # Examples
///
/// ```no_run
/// use dnsflat::config::FlattenConfig;
///
/// let lines = dnsflat::flatten(&FlattenConfig::default()).unwrap();
/// for line in lines {
///     println!("{line}");
/// }
/// ```
pub fn flatten(config: &FlattenConfig) -> Result<Vec<String>> {
    let defaults = match &config.defaults_path {
        Some(path) => Defaults::load(path)?,
        None => Defaults::default(),
    };
    flatten_with(&config.config_path, &defaults)
}

/// Run a flatten pass over `config_path` with already-loaded defaults.
///
/// # Errors
///
/// See [`flatten`].
pub fn flatten_with(config_path: &Path, defaults: &Defaults) -> Result<Vec<String>> {
    let resolver = ConfigResolver::new(&defaults.exclusions);

    let mut primary_visited = VisitedSet::new();
    let mut lines = resolver.resolve(config_path, &mut primary_visited)?;

    let Some(config_dir) = defaults.config_dir.as_deref() else {
        return Ok(lines);
    };
    if !config_dir.is_dir() {
        log::debug!("{}: default directory missing, skipping", config_dir.display());
        return Ok(lines);
    }

    for file in listing::regular_files(config_dir)? {
        let name = file_name_of(&file);
        if defaults.exclusions.matches(&name) {
            log::debug!("{name}: excluded by global pattern");
            continue;
        }

        if read_by_primary(&file, &primary_visited) {
            log::debug!("{}: already read by the main config, reading again", file.display());
        }

        lines.extend(resolver.resolve(&file, &mut VisitedSet::new())?);
    }

    Ok(lines)
}

/// Whether the primary pass already claimed `file`. Only feeds a trace, so
/// a path that cannot be canonicalized counts as unclaimed.
fn read_by_primary(file: &Path, primary_visited: &VisitedSet) -> bool {
    canonical_path(file).is_ok_and(|canonical| primary_visited.contains(&canonical))
}
