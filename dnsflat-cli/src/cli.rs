//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! There are no subcommands: the tool does one thing, and the flattening
//! arguments are folded into the top-level parser.

use crate::commands::FlattenCommand;
use clap::Parser;
use std::path::PathBuf;

/// Command-line tool that prints the effective dnsmasq configuration.
#[derive(Parser)]
#[command(name = "dnsflat")]
#[command(version, about = "Print the effective dnsmasq configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Read CONFIG_DIR from this file instead of /etc/default/dnsmasq
    /// (also DNSFLAT_DEFAULTS_FILE; an empty value disables it)
    #[arg(long, value_name = "PATH", conflicts_with = "no_defaults")]
    pub defaults_file: Option<PathBuf>,

    /// Ignore the defaults file entirely
    #[arg(long)]
    pub no_defaults: bool,

    #[command(flatten)]
    pub command: FlattenCommand,
}
