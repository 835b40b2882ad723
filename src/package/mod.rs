//! Package module for ngr.
//!
//! Lists scripts through the package manager and normalizes the listing.

mod manager;
pub mod scripts;

pub use manager::PackageManager;
pub use scripts::{parse_manifest, ScriptManifest};
