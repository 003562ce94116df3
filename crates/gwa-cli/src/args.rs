//! Command-line argument definitions for the GWA CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the field delimiter and logging verbosity.

use clap::Parser;

/// Command-line arguments for the GWA round-trip checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input GWA file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Write the re-encoded canonical lines to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field delimiter, overriding the configuration (a single character, or `tab`)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
