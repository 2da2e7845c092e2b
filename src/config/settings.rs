//! Bootstrap settings
//!
//! Controls which parts of the startup sequence run. Values come from
//! defaults, then environment variables, then command-line flags (applied by
//! the host).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    /// Read the default config during startup
    pub enable_config: bool,
    /// Install the tracing subscriber during startup
    pub enable_log: bool,
    pub debug: bool,
    /// Emit JSON log lines instead of human readable output
    pub log_json: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            enable_config: true,
            enable_log: true,
            debug: false,
            log_json: false,
        }
    }
}

impl AppOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        let mut options = Self::default();
        load_from_env(&mut options, |key| std::env::var(key).ok());
        options
    }
}

fn parse_bool(value: &str) -> bool {
    value.to_lowercase() == "true" || value == "1"
}

fn load_from_env<F>(options: &mut AppOptions, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = var("APPBOOT_ENABLE_CONFIG") {
        options.enable_config = parse_bool(&value);
    }

    if let Some(value) = var("APPBOOT_ENABLE_LOG") {
        options.enable_log = parse_bool(&value);
    }

    if let Some(value) = var("APPBOOT_LOG_JSON") {
        options.log_json = parse_bool(&value);
    }

    if let Some(value) = var("DEBUG") {
        options.debug = parse_bool(&value);
    }
}
