//! Main entry point for the dnsflat CLI.
//!
//! Prints the effective dnsmasq configuration: the primary config file with
//! every `conf-file=` and `conf-dir=` include spliced in, followed by the
//! files of the default directory named in `/etc/default/dnsmasq`.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        defaults_file: cli.defaults_file,
        no_defaults: cli.no_defaults,
    };

    let logger = dnsflat::init_logger(global.verbose, global.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    match cli.command.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
