//! Build script for dnsflat-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/flatten.rs.
fn build_cli() -> Command {
    Command::new("dnsflat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the effective dnsmasq configuration")
        .long_about(
            "Follow conf-file= and conf-dir= includes starting from the primary dnsmasq \
             configuration, then append the default directory named by CONFIG_DIR in \
             /etc/default/dnsmasq, and print every remaining directive in the order \
             dnsmasq reads it",
        )
        .arg(
            Arg::new("config")
                .value_name("CONFIG")
                .help("Primary configuration file [default: /etc/dnsmasq.conf]"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("defaults-file")
                .long("defaults-file")
                .value_name("PATH")
                .help("Read CONFIG_DIR from this file instead of /etc/default/dnsmasq")
                .conflicts_with("no-defaults"),
        )
        .arg(
            Arg::new("no-defaults")
                .long("no-defaults")
                .help("Ignore the defaults file entirely")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["lines", "json"])
                .default_value("lines")
                .env("DNSFLAT_OUTPUT_FORMAT"),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("dnsflat.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
