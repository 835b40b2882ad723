//! Test helpers for stubbing the external programs ngr drives.
//!
//! The stubs are shell scripts. They record what they were asked to do in
//! files next to themselves so tests can inspect the calls afterwards.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// What the stub `gum` does when invoked.
#[derive(Debug, Clone)]
pub enum GumBehavior {
    /// Print the given line and exit 0.
    Choose(&'static str),
    /// Print nothing and exit 0.
    ChooseNothing,
    /// Print nothing and exit with the given code.
    Exit(i32),
}

/// A temporary directory holding stub `npm` and `gum` executables.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Create a sandbox whose `npm run --json` prints `listing`, whose
    /// scripts exit with `script_exit`, and whose `gum` behaves as given.
    pub fn new(listing: &str, script_exit: i32, gum: GumBehavior) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join("listing.json"), listing).expect("Failed to write listing");

        let sandbox = Self { dir };
        sandbox.write_npm("cat \"$HERE/listing.json\"\n  echo\n  exit 0", script_exit);
        sandbox.write_gum(gum);
        sandbox
    }

    /// Create a sandbox whose `npm run --json` fails with `stderr`.
    pub fn failing_listing(stderr: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let sandbox = Self { dir };
        sandbox.write_npm(&format!("echo '{stderr}' >&2\n  exit 1"), 0);
        sandbox.write_gum(GumBehavior::ChooseNothing);
        sandbox
    }

    /// Path to the stub package manager.
    pub fn npm(&self) -> PathBuf {
        self.dir.path().join("npm")
    }

    /// Path to the stub filter.
    pub fn gum(&self) -> PathBuf {
        self.dir.path().join("gum")
    }

    /// The ngr binary wired to the stubs.
    pub fn ngr(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ngr");
        cmd.current_dir(self.dir.path())
            .env("NGR_NPM", self.npm())
            .env("NGR_GUM", self.gum())
            .env_remove("NGR_LOG");
        cmd
    }

    /// Scripts the stub `npm` was asked to run, in order.
    pub fn ran(&self) -> Vec<String> {
        self.read_lines("ran.log")
    }

    /// Candidates the stub `gum` received on stdin.
    pub fn candidates(&self) -> Vec<String> {
        self.read_lines("candidates.txt")
    }

    /// Arguments the stub `gum` was invoked with, or `None` if never invoked.
    pub fn gum_args(&self) -> Option<String> {
        fs::read_to_string(self.dir.path().join("gum-args.txt"))
            .ok()
            .map(|s| s.trim_end().to_string())
    }

    fn read_lines(&self, name: &str) -> Vec<String> {
        fs::read_to_string(self.dir.path().join(name))
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    fn write_npm(&self, listing_body: &str, script_exit: i32) {
        let script = format!(
            r#"#!/bin/sh
HERE="$(dirname "$0")"
if [ "$1" = "run" ] && [ "$2" = "--json" ]; then
  {listing_body}
fi
if [ "$1" = "run" ]; then
  echo "$2" >> "$HERE/ran.log"
  echo "running $2"
  echo "script stderr for $2" >&2
  exit {script_exit}
fi
exit 64
"#
        );
        write_executable(&self.npm(), &script);
    }

    fn write_gum(&self, behavior: GumBehavior) {
        let action = match behavior {
            GumBehavior::Choose(choice) => format!("printf '%s\\n' '{choice}'\nexit 0"),
            GumBehavior::ChooseNothing => "exit 0".to_string(),
            GumBehavior::Exit(code) => format!("exit {code}"),
        };
        let script = format!(
            r#"#!/bin/sh
HERE="$(dirname "$0")"
echo "$@" > "$HERE/gum-args.txt"
cat > "$HERE/candidates.txt"
{action}
"#
        );
        write_executable(&self.gum(), &script);
    }
}

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).expect("Failed to write stub");
    let mut perms = fs::metadata(path).expect("Failed to stat stub").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod stub");
}

/// A flat listing with two scripts.
pub const FLAT_LISTING: &str = r#"{"build":"tsc","test":"jest"}"#;

/// A workspace listing with two workspaces.
pub const WORKSPACE_LISTING: &str = r#"{"pkgA":{"build":"tsc"},"pkgB":{"lint":"eslint ."}}"#;
