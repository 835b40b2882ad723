//! Package manager command building and script listing.

use log::debug;

use crate::error::Result;
use crate::runner::{capture_output, CommandLine};

/// The package manager that publishes and runs scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    executable: String,
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::new("npm")
    }
}

impl PackageManager {
    /// Create a package manager backed by the given executable.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// The command listing all scripts as JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use npm_gum_run::package::PackageManager;
    ///
    /// let cmd = PackageManager::default().list_command();
    /// assert_eq!(cmd.display(), "npm run --json");
    /// ```
    pub fn list_command(&self) -> CommandLine {
        CommandLine::new(&self.executable, ["run", "--json"])
    }

    /// The command running a single script.
    ///
    /// # Examples
    ///
    /// ```
    /// use npm_gum_run::package::PackageManager;
    ///
    /// let cmd = PackageManager::default().run_command("test");
    /// assert_eq!(cmd.display(), "npm run test");
    /// ```
    pub fn run_command(&self, script: &str) -> CommandLine {
        CommandLine::new(&self.executable, ["run", script])
    }

    /// List scripts, returning the raw JSON text printed by the package manager.
    ///
    /// # Errors
    ///
    /// Returns [`NgrError::CommandExecution`](crate::NgrError::CommandExecution)
    /// if the listing command cannot be started or exits non-zero.
    pub fn list_scripts(&self) -> Result<String> {
        let raw = capture_output(&self.list_command())?;
        debug!("script listing returned {} bytes", raw.len());
        Ok(raw)
    }
}
