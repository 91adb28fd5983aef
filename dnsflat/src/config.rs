//! Run configuration for a flatten pass.
//!
//! # Configuration Precedence
//!
//! Values are taken from the following sources (highest to lowest):
//!
//! 1. Programmatic overrides (builder setters, used by the CLI flags)
//! 2. Environment variables (`DNSFLAT_*`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use dnsflat::config::FlattenConfigBuilder;
//! use std::path::Path;
//!
//! let config = FlattenConfigBuilder::new()
//!     .skip_env()
//!     .with_config_path("/srv/dnsmasq/main.conf")
//!     .without_defaults()
//!     .build();
//!
//! assert_eq!(config.config_path, Path::new("/srv/dnsmasq/main.conf"));
//! assert!(config.defaults_path.is_none());
//! ```

use std::env;
use std::path::PathBuf;

use crate::defaults::DEFAULTS_PATH;

/// Well-known location of the primary configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/dnsmasq.conf";

/// Overrides the defaults file location; an empty value disables it.
pub const DEFAULTS_FILE_ENV: &str = "DNSFLAT_DEFAULTS_FILE";

/// Inputs of one flatten run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    /// Primary configuration file.
    pub config_path: PathBuf,
    /// Defaults file to consult, or `None` to run without defaults.
    pub defaults_path: Option<PathBuf>,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            defaults_path: Some(PathBuf::from(DEFAULTS_PATH)),
        }
    }
}

/// Builder for [`FlattenConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct FlattenConfigBuilder {
    config_path: Option<PathBuf>,
    defaults_path: Option<Option<PathBuf>>,
    skip_env: bool,
}

impl FlattenConfigBuilder {
    /// Create a builder with nothing overridden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `path` as the primary configuration file.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read defaults from `path` instead of the well-known location.
    pub fn with_defaults_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.defaults_path = Some(Some(path.into()));
        self
    }

    /// Run without a defaults file.
    pub fn without_defaults(mut self) -> Self {
        self.defaults_path = Some(None);
        self
    }

    /// Ignore `DNSFLAT_*` environment variables.
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolve the final configuration.
    #[must_use]
    pub fn build(self) -> FlattenConfig {
        let mut config = FlattenConfig::default();

        if !self.skip_env {
            if let Some(value) = env::var_os(DEFAULTS_FILE_ENV) {
                config.defaults_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
        }

        if let Some(path) = self.config_path {
            config.config_path = path;
        }
        if let Some(defaults_path) = self.defaults_path {
            config.defaults_path = defaults_path;
        }

        config
    }
}
