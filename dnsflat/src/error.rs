//! Error types for the dnsflat library.
//!
//! Missing files, missing directories and a missing defaults source are not
//! errors anywhere in this crate; they simply contribute nothing. The variants
//! below cover the cases that do abort a run: a file or directory that exists
//! but cannot be read, and failures while producing output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a dnsflat error.
///
/// # Examples
///
/// ```
/// use dnsflat::{Error, Result};
///
/// fn example_operation() -> Result<Vec<String>> {
///     Ok(vec!["server=1.1.1.1".to_string()])
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dnsflat library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration or defaults file exists but could not be read.
    ///
    /// This covers permission problems as well as contents that are not
    /// valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory exists but its entries could not be listed.
    #[error("cannot list directory {}: {source}", path.display())]
    ListDirectory {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Formatting the resolved directives failed.
    #[error("output error: {message}")]
    Output {
        /// A description of the failure.
        message: String,
    },
}

impl Error {
    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnsflat::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Read {
    ///     path: PathBuf::from("/etc/dnsmasq.conf"),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Read { source, .. } | Self::ListDirectory { source, .. } | Self::Io(source) => {
                source.kind() == io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }

    /// Check if error came from reading a file or listing a directory.
    #[must_use]
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::ListDirectory { .. })
    }
}
