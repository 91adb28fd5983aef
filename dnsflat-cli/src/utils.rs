//! Utility functions for CLI operations.

use crate::error::CliError;
use dnsflat::{FlattenConfig, FlattenConfigBuilder};
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the defaults file location.
    pub defaults_file: Option<PathBuf>,

    /// Run without a defaults file.
    pub no_defaults: bool,
}

/// Build the run configuration from CLI arguments.
///
/// Flags take precedence over `DNSFLAT_*` environment variables, which take
/// precedence over the built-in locations.
pub fn build_flatten_config(global: &GlobalOptions, config: Option<PathBuf>) -> FlattenConfig {
    let mut builder = FlattenConfigBuilder::new();

    if let Some(path) = config {
        builder = builder.with_config_path(path);
    }

    if global.no_defaults {
        builder = builder.without_defaults();
    } else if let Some(ref path) = global.defaults_file {
        builder = builder.with_defaults_path(path);
    }

    builder.build()
}

/// Write `text` to stdout.
///
/// A reader that goes away early (`dnsflat | head`) is not an error.
pub fn write_stdout(text: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match handle.write_all(text.as_bytes()).and_then(|()| handle.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.map_err(CliError::from),
    }
}
