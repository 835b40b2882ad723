//! The pick-and-run flow.
//!
//! A run moves through [`Stage`]s in a straight line:
//! listing, normalizing, selecting, running. Listing and normalizing errors
//! end the run with an error. Cancelling or choosing nothing ends it early
//! with success. A failed script is logged and still counts as success.

use std::fmt;

use log::{debug, error, info};

use crate::config::Config;
use crate::error::Result;
use crate::package::{parse_manifest, PackageManager};
use crate::runner::run_script;
use crate::selector::{GumFilter, Selection};

/// External effects the flow depends on.
pub trait Toolchain {
    /// Return the raw script listing.
    fn list_scripts(&mut self) -> Result<String>;

    /// Let the user pick one of `candidates`.
    fn select(&mut self, candidates: &[&str]) -> Result<Selection>;

    /// Run the named script with live output.
    fn run_script(&mut self, script: &str) -> Result<()>;
}

/// The real toolchain: a package manager and a fuzzy filter.
#[derive(Debug, Clone, Default)]
pub struct System {
    package_manager: PackageManager,
    filter: GumFilter,
}

impl System {
    /// Create a toolchain from its parts.
    pub fn new(package_manager: PackageManager, filter: GumFilter) -> Self {
        Self {
            package_manager,
            filter,
        }
    }

    /// Create a toolchain using the configured executables.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PackageManager::new(&config.npm),
            GumFilter::new(&config.gum),
        )
    }
}

impl Toolchain for System {
    fn list_scripts(&mut self) -> Result<String> {
        self.package_manager.list_scripts()
    }

    fn select(&mut self, candidates: &[&str]) -> Result<Selection> {
        self.filter.select(candidates)
    }

    fn run_script(&mut self, script: &str) -> Result<()> {
        run_script(&self.package_manager, script)
    }
}

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Listing,
    Normalizing,
    Selecting,
    Running,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Listing => "listing",
            Stage::Normalizing => "normalizing",
            Stage::Selecting => "selecting",
            Stage::Running => "running",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest had no scripts to offer.
    NoScripts,
    /// The user interrupted the selector.
    Cancelled,
    /// The selector returned no choice.
    NothingSelected,
    /// The script was started; `succeeded` reports its result.
    Ran { script: String, succeeded: bool },
}

/// Run the whole flow against a toolchain.
///
/// # Errors
///
/// Returns an error if listing or normalizing fails, or if the selector
/// cannot be started or exits unexpectedly. A failing script is not an error.
pub fn run<T: Toolchain>(tools: &mut T) -> Result<Outcome> {
    enter(Stage::Listing);
    let raw = tools.list_scripts()?;

    enter(Stage::Normalizing);
    let manifest = parse_manifest(&raw)?;
    if let Some(workspace) = manifest.workspace() {
        debug!("using scripts from workspace '{workspace}'");
    }
    if manifest.is_empty() {
        info!("no scripts defined");
        return Ok(Outcome::NoScripts);
    }

    enter(Stage::Selecting);
    let script = match tools.select(&manifest.names())? {
        Selection::Chosen(script) => script,
        Selection::Cancelled => {
            info!("selection cancelled");
            return Ok(Outcome::Cancelled);
        }
        Selection::Empty => {
            info!("no script selected");
            return Ok(Outcome::NothingSelected);
        }
    };

    enter(Stage::Running);
    let succeeded = match tools.run_script(&script) {
        Ok(()) => true,
        Err(err) => {
            error!("error running npm script: {err}");
            false
        }
    };

    enter(Stage::Done);
    Ok(Outcome::Ran { script, succeeded })
}

fn enter(stage: Stage) {
    debug!("stage: {stage}");
}
