//! Interactive script selection.
//!
//! The user picks a script with an external fuzzy filter (`gum filter` by
//! default). The filter's exit status decides what happened.

mod gum;

pub use gum::GumFilter;

use std::process::ExitStatus;

use crate::error::{CommandFailure, NgrError, Result};
use crate::runner::EXIT_CODE_INTERRUPTED;

/// Outcome of an interactive selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user picked a script.
    Chosen(String),
    /// The user interrupted the filter.
    Cancelled,
    /// The filter finished without a choice.
    Empty,
}

/// Interpret a finished filter process.
///
/// `output` is the filter's standard output with the trailing newline
/// already removed.
///
/// # Errors
///
/// Returns [`NgrError::Selector`] for any exit other than success or the
/// interrupt code.
pub fn interpret(command: &str, status: ExitStatus, output: String) -> Result<Selection> {
    match status.code() {
        Some(0) if output.is_empty() => Ok(Selection::Empty),
        Some(0) => Ok(Selection::Chosen(output)),
        Some(EXIT_CODE_INTERRUPTED) => Ok(Selection::Cancelled),
        _ => Err(NgrError::Selector {
            command: command.to_string(),
            cause: CommandFailure::Exit(status),
        }),
    }
}
