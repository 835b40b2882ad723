//! Normalizing the output of `npm run --json`.
//!
//! npm prints one of two shapes depending on whether the project uses
//! workspaces:
//!
//! ```text
//! {"build": "tsc", "test": "jest"}
//! {"pkg-a": {"build": "tsc"}, "pkg-b": {"lint": "eslint ."}}
//! ```
//!
//! Both are flattened into a single [`ScriptManifest`].

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;

use crate::error::{NgrError, Result};

/// Script name to command, as published by the package manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptManifest {
    scripts: BTreeMap<String, String>,
    workspace: Option<String>,
}

impl ScriptManifest {
    /// Create a manifest from a flat mapping.
    pub fn new(scripts: BTreeMap<String, String>) -> Self {
        Self {
            scripts,
            workspace: None,
        }
    }

    /// Create a manifest taken from the named workspace.
    pub fn from_workspace(workspace: impl Into<String>, scripts: BTreeMap<String, String>) -> Self {
        Self {
            scripts,
            workspace: Some(workspace.into()),
        }
    }

    /// Get the number of scripts.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if the manifest is empty.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Get the command for a script.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    /// Script names, in the order they are offered for selection.
    pub fn names(&self) -> Vec<&str> {
        self.scripts.keys().map(String::as_str).collect()
    }

    /// The workspace the scripts were taken from, if the listing was nested.
    pub fn workspace(&self) -> Option<&str> {
        self.workspace.as_deref()
    }
}

/// The accepted JSON shapes, tried in declaration order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestShape {
    Flat(BTreeMap<String, String>),
    Workspace(BTreeMap<String, BTreeMap<String, String>>),
}

/// Parse the raw listing into a flat manifest.
///
/// A flat object is returned unchanged. For a workspace object, the
/// workspace with the lexicographically smallest name wins; callers should
/// only rely on getting exactly one of the nested objects.
///
/// # Errors
///
/// Returns [`NgrError::UnrecognizedShape`] if the text is neither shape, or
/// if a workspace object has no entries.
///
/// # Examples
///
/// ```
/// use npm_gum_run::package::parse_manifest;
///
/// let manifest = parse_manifest(r#"{"build": "tsc", "test": "jest"}"#).unwrap();
/// assert_eq!(manifest.get("test"), Some("jest"));
/// ```
pub fn parse_manifest(raw: &str) -> Result<ScriptManifest> {
    let shape: ManifestShape = match serde_json::from_str(raw) {
        Ok(shape) => shape,
        Err(source) => {
            // Untagged errors say nothing useful; report the generic JSON view instead.
            let source = serde_json::from_str::<serde_json::Value>(raw)
                .err()
                .unwrap_or(source);
            return Err(NgrError::UnrecognizedShape { source });
        }
    };

    match shape {
        ManifestShape::Flat(scripts) => {
            debug!("flat script listing with {} scripts", scripts.len());
            Ok(ScriptManifest::new(scripts))
        }
        ManifestShape::Workspace(workspaces) => {
            debug!("workspace script listing with {} workspaces", workspaces.len());
            match workspaces.into_iter().next() {
                Some((workspace, scripts)) => Ok(ScriptManifest::from_workspace(workspace, scripts)),
                // Unreachable from text: `{}` is already accepted as an empty flat listing.
                None => Err(NgrError::UnrecognizedShape {
                    source: serde::de::Error::custom("workspace listing has no entries"),
                }),
            }
        }
    }
}
