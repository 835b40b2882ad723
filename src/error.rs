//! Custom error types for ngr.
//!
//! Uses thiserror for ergonomic error definitions.

use std::fmt;
use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Exit codes for ngr.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Listing scripts through the package manager failed.
    pub const LIST_FAILED: i32 = 2;
    /// The script listing was not in a recognized JSON shape.
    pub const UNRECOGNIZED_SHAPE: i32 = 3;
    /// The interactive filter failed to start or exited unexpectedly.
    pub const SELECTOR_FAILED: i32 = 4;
}

/// Why an external command did not complete successfully.
#[derive(Debug)]
pub enum CommandFailure {
    /// The process could not be started.
    Spawn(io::Error),
    /// The process started but waiting on it failed.
    Io(io::Error),
    /// The process ran but exited unsuccessfully.
    Exit(ExitStatus),
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandFailure::Spawn(err) => write!(f, "{err}"),
            CommandFailure::Io(err) => write!(f, "lost contact with process: {err}"),
            CommandFailure::Exit(status) => match status.code() {
                Some(code) => write!(f, "exited with code {code}"),
                None => write!(f, "terminated by signal"),
            },
        }
    }
}

impl std::error::Error for CommandFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandFailure::Spawn(err) | CommandFailure::Io(err) => Some(err),
            CommandFailure::Exit(_) => None,
        }
    }
}

/// Main error type for ngr.
#[derive(Error, Debug)]
pub enum NgrError {
    /// An external command could not be started or exited abnormally.
    #[error("Command `{command}` failed: {cause}{}", format_stderr(.stderr))]
    CommandExecution {
        command: String,
        #[source]
        cause: CommandFailure,
        stderr: String,
    },

    /// The script listing matched neither the flat nor the workspace shape.
    #[error("Unrecognized output from `npm run --json`: {source}\n\nTip: Expected {{\"name\": \"command\"}} or {{\"workspace\": {{\"name\": \"command\"}}}}")]
    UnrecognizedShape {
        #[source]
        source: serde_json::Error,
    },

    /// The interactive filter could not be started, or exited with something
    /// other than success or cancellation.
    #[error("Selector `{command}` failed: {cause}")]
    Selector {
        command: String,
        cause: CommandFailure,
    },

    /// The selected script did not complete successfully.
    #[error("Script '{name}' failed: {cause}")]
    ScriptRun { name: String, cause: CommandFailure },
}

impl NgrError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NgrError::CommandExecution { .. } => exit_code::LIST_FAILED,
            NgrError::UnrecognizedShape { .. } => exit_code::UNRECOGNIZED_SHAPE,
            NgrError::Selector { .. } => exit_code::SELECTOR_FAILED,
            // Never escalated by the entry point, but still needs a code.
            NgrError::ScriptRun { .. } => exit_code::GENERAL_ERROR,
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n  stderr: {trimmed}")
    }
}

/// Result type alias for ngr operations.
pub type Result<T> = std::result::Result<T, NgrError>;
