//! Configuration for ngr.
//!
//! There is no configuration file. The external programs and the log filter
//! can be overridden through environment variables:
//!
//! - `NGR_NPM` - package manager executable (default `npm`)
//! - `NGR_GUM` - fuzzy filter executable (default `gum`)
//! - `NGR_LOG` - log filter in `env_logger` syntax (default `warn`)

use std::env;

/// Environment variable naming the package manager executable.
pub const NPM_ENV: &str = "NGR_NPM";
/// Environment variable naming the fuzzy filter executable.
pub const GUM_ENV: &str = "NGR_GUM";
/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NGR_LOG";

const DEFAULT_NPM: &str = "npm";
const DEFAULT_GUM: &str = "gum";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Package manager used to list and run scripts.
    pub npm: String,
    /// Interactive filter used to pick a script.
    pub gum: String,
    /// Log filter directives.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            npm: DEFAULT_NPM.to_string(),
            gum: DEFAULT_GUM.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset and blank values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(npm) = get(NPM_ENV) {
            config.npm = npm;
        }
        if let Some(gum) = get(GUM_ENV) {
            config.gum = gum;
        }
        if let Some(filter) = get(LOG_ENV) {
            config.log_filter = filter;
        }

        config
    }
}
