//! Build script for ngr.
//!
//! Generates the man page using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Mirror of the CLI definition for man page generation.
///
/// Kept separate because build scripts cannot depend on the crate itself.
#[derive(Parser)]
#[command(name = "ngr")]
#[command(author, version, about = "Pick an npm script with gum filter and run it")]
#[command(
    long_about = "ngr lists the scripts of the current project with `npm run --json`, \
    lets you pick one with `gum filter`, then runs it with `npm run <script>`.\n\n\
    Pressing Ctrl+C in the filter or choosing nothing exits successfully. \
    A failing script is reported but does not change ngr's exit status."
)]
#[command(after_help = "Environment:\n  \
    NGR_NPM  package manager executable (default: npm)\n  \
    NGR_GUM  fuzzy filter executable (default: gum)\n  \
    NGR_LOG  log filter, e.g. debug (default: warn)")]
struct Cli {}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=NGR_GEN_MANPAGE");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("NGR_GEN_MANPAGE").is_err() {
        return;
    }

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    if let Err(err) = man.render(&mut buffer) {
        println!("cargo:warning=failed to render man page: {err}");
        return;
    }

    if let Err(err) = fs::write(out_dir.join("ngr.1"), buffer) {
        println!("cargo:warning=failed to write man page: {err}");
    }
}
