#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dnsflat
//!
//! A library for flattening dnsmasq configuration trees.
//!
//! dnsmasq configuration can be split across many files with `conf-file=`
//! and `conf-dir=` directives. This library follows those directives and
//! produces the single ordered list of settings the daemon ends up reading.
//!
//! ## Core Types
//!
//! - [`ConfigResolver`] and [`VisitedSet`]: cycle-safe recursive resolution
//! - [`Directive`]: classification of individual configuration lines
//! - [`SuffixPatterns`] and [`DirectoryFilter`]: filename filtering
//! - [`Defaults`]: the packaging defaults file (`/etc/default/dnsmasq`)
//! - [`flatten`] and [`FlattenConfig`]: a complete run
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dnsflat::{resolve_config, SuffixPatterns};
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let extra = dir.path().join("extra.conf");
//! fs::write(&extra, "listen-address=127.0.0.1\n").unwrap();
//! let main = dir.path().join("dnsmasq.conf");
//! fs::write(&main, format!("domain=lan\nconf-file={}\n", extra.display())).unwrap();
//!
//! let lines = resolve_config(&main, &SuffixPatterns::empty()).unwrap();
//! assert_eq!(lines, vec!["domain=lan", "listen-address=127.0.0.1"]);
//! ```

pub mod config;
pub mod defaults;
pub mod directive;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod logging;
pub mod output;
pub mod path;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use config::{FlattenConfig, FlattenConfigBuilder};
pub use defaults::Defaults;
pub use directive::{ConfDir, Directive};
pub use error::{Error, Result};
pub use filter::{DirectoryFilter, SuffixPatterns};
pub use flatten::{flatten, flatten_with};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use resolver::{resolve_config, ConfigResolver, VisitedSet};
