//! Flatten command implementation.
//!
//! Resolves the primary configuration file plus the default directory and
//! writes the resulting directives to stdout.

use crate::error::CliError;
use crate::utils::{build_flatten_config, write_stdout, GlobalOptions};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Print the flattened configuration.
#[derive(Args)]
pub struct FlattenCommand {
    /// Primary configuration file [default: /etc/dnsmasq.conf]
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "lines",
        env = "DNSFLAT_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the flatten command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One directive per line
    Lines,
    /// JSON array of directives
    Json,
}

impl From<OutputFormat> for dnsflat::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Lines => Self::Lines,
            OutputFormat::Json => Self::Json,
        }
    }
}

impl FlattenCommand {
    /// Execute the flatten command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = build_flatten_config(global, self.config);

        let lines = dnsflat::flatten(&config)?;

        let formatter = dnsflat::OutputFormat::from(self.format).create_formatter();
        let output = formatter.format(&lines)?;

        write_stdout(&output)
    }
}
