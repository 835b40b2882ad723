//! `gum filter` integration.

use log::debug;

use super::{interpret, Selection};
use crate::error::{NgrError, Result};
use crate::runner::{execute, strip_trailing_newline, CommandLine, StdioMode};

/// A fuzzy filter driven like `gum filter --height <n>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GumFilter {
    executable: String,
}

impl Default for GumFilter {
    fn default() -> Self {
        Self::new("gum")
    }
}

impl GumFilter {
    /// Create a filter backed by the given executable.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// The command line for a list of `count` candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use npm_gum_run::selector::GumFilter;
    ///
    /// let cmd = GumFilter::default().command(3);
    /// assert_eq!(cmd.display(), "gum filter --height 3");
    /// ```
    pub fn command(&self, count: usize) -> CommandLine {
        CommandLine::new(
            &self.executable,
            ["filter".to_string(), "--height".to_string(), count.to_string()],
        )
    }

    /// Let the user pick one of `candidates`.
    ///
    /// Candidates are written newline-separated to the filter's stdin. The
    /// filter draws its interface on the inherited stderr; its stdout holds
    /// the choice.
    ///
    /// # Errors
    ///
    /// Returns [`NgrError::Selector`] if the filter cannot be started or exits
    /// unexpectedly.
    pub fn select<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Selection> {
        let line = self.command(candidates.len());
        let input = candidates
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");

        let result = execute(&line, Some(&input), StdioMode::Capture, StdioMode::Inherit)
            .map_err(|cause| NgrError::Selector {
                command: line.display(),
                cause,
            })?;

        let selection = interpret(
            &line.display(),
            result.status,
            strip_trailing_newline(result.stdout),
        )?;
        debug!("selection: {selection:?}");
        Ok(selection)
    }
}
