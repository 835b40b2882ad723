//! CLI argument definitions for ngr.
//!
//! ngr takes no arguments; clap provides `--help`, `--version` and the
//! usage error for anything else.

use clap::Parser;

/// Pick an npm script with gum filter and run it.
#[derive(Parser, Debug)]
#[command(name = "ngr")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Environment:\n  \
    NGR_NPM  package manager executable (default: npm)\n  \
    NGR_GUM  fuzzy filter executable (default: gum)\n  \
    NGR_LOG  log filter, e.g. debug (default: warn)")]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
