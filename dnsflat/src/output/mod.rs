//! Output formatting for resolved directives.
//!
//! The default format writes one directive per line, exactly as the daemon
//! would see them. JSON is available for tooling that wants a structured
//! list.

mod formatters;

use crate::Result;

pub use formatters::{JsonFormatter, LinesFormatter};

/// Trait for rendering a resolved directive sequence.
pub trait OutputFormatter {
    /// Format the given directives into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails.
    fn format(&self, lines: &[String]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One directive per line.
    #[default]
    Lines,
    /// A JSON array of strings.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Lines => Box::new(LinesFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
