//! ngr - npm gum run
//!
//! Pick one of a project's npm scripts with an interactive fuzzy filter
//! (`gum filter`) and run it with live output.
//!
//! # Modules
//!
//! - [`app`] - The list, select, run flow
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Environment-based configuration
//! - [`error`] - Error types and exit codes
//! - [`package`] - Script listing and `npm run --json` normalization
//! - [`runner`] - External command execution
//! - [`selector`] - Interactive selection
//!
//! # Example
//!
//! ```
//! use npm_gum_run::package::parse_manifest;
//!
//! let manifest = parse_manifest(r#"{"web": {"dev": "vite"}}"#).unwrap();
//! assert_eq!(manifest.workspace(), Some("web"));
//! assert_eq!(manifest.get("dev"), Some("vite"));
//! ```

/// The list, select, run flow.
pub mod app;

/// CLI argument definitions.
pub mod cli;

/// Environment-based configuration.
pub mod config;

/// Error types and exit codes.
pub mod error;

/// Script listing and normalization.
pub mod package;

/// External command execution.
pub mod runner;

/// Interactive selection.
pub mod selector;

// Re-export commonly used types
pub use app::{run, Outcome, System, Toolchain};
pub use cli::Cli;
pub use config::Config;
pub use error::{NgrError, Result};
pub use package::{parse_manifest, PackageManager, ScriptManifest};
pub use selector::{GumFilter, Selection};
