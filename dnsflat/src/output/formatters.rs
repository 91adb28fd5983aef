//! Output formatter implementations.

use crate::{Error, Result};

use super::OutputFormatter;

/// Formatter writing one directive per line.
///
/// Every line, including the last, ends with a newline. No directives
/// produce an empty string.
pub struct LinesFormatter;

impl OutputFormatter for LinesFormatter {
    fn format(&self, lines: &[String]) -> Result<String> {
        let capacity = lines.iter().map(|line| line.len() + 1).sum();
        let mut output = String::with_capacity(capacity);
        for line in lines {
            output.push_str(line);
            output.push('\n');
        }
        Ok(output)
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, lines: &[String]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(lines).map_err(|e| Error::Output {
            message: format!("failed to serialize to JSON: {e}"),
        })?;
        output.push('\n');
        Ok(output)
    }
}
