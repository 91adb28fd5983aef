//! Path handling for include resolution.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is purely lexical: relative paths are joined onto the
//! working directory and `.`/`..` components are resolved.
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to get the "real" path on the
//! filesystem. Every path is canonicalized before it is checked against or
//! added to a [`VisitedSet`](crate::resolver::VisitedSet), so the same file
//! reached through different spellings is only processed once. Paths that do
//! not exist still canonicalize; they just resolve as far as their deepest
//! existing ancestor.
//!
//! # Examples
//!
//! ```no_run
//! use dnsflat::path::canonicalize::canonical_path;
//! use std::path::Path;
//!
//! let direct = canonical_path(Path::new("/etc/dnsmasq.conf")).unwrap();
//! let dotted = canonical_path(Path::new("/etc/./dnsmasq.conf")).unwrap();
//! assert_eq!(direct, dotted);
//! ```

pub mod canonicalize;
pub mod normalize;
mod types;

pub use canonicalize::canonical_path;
pub use types::{file_name_of, CanonicalPath};
