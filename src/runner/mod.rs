//! Runner module for ngr.
//!
//! Spawns external commands and runs the selected script.

mod executor;

pub use executor::{
    capture_output, execute, strip_trailing_newline, CommandLine, ExecuteResult, ExecutionResult,
    StdioMode, EXIT_CODE_INTERRUPTED,
};

use std::io::{self, Write};

use log::debug;

use crate::error::{CommandFailure, NgrError, Result};
use crate::package::PackageManager;

/// Run a script with the package manager, streaming its output live.
///
/// The command line is printed to stdout before it starts.
///
/// # Errors
///
/// Returns [`NgrError::ScriptRun`] if the script cannot be started or exits
/// unsuccessfully.
pub fn run_script(package_manager: &PackageManager, script: &str) -> Result<()> {
    let line = package_manager.run_command(script);

    println!("> {}", line.display());
    io::stdout().flush().ok();

    let result = execute(&line, None, StdioMode::Inherit, StdioMode::Inherit).map_err(|cause| {
        NgrError::ScriptRun {
            name: script.to_string(),
            cause,
        }
    })?;

    if !result.success() {
        return Err(NgrError::ScriptRun {
            name: script.to_string(),
            cause: CommandFailure::Exit(result.status),
        });
    }

    debug!("script '{script}' completed");
    Ok(())
}
