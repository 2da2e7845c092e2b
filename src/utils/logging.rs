//! Logger setup
//!
//! The filter comes from `APPBOOT_LOG`, then `RUST_LOG`, then a default of
//! `appboot=info` (`appboot=debug` in debug mode). Log lines go to stderr so
//! command output on stdout stays clean.

use crate::config::AppOptions;
use crate::error::{AppbootError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "APPBOOT_LOG";

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Whether [`init_logging`] already installed a subscriber in this process
pub fn is_initialized() -> bool {
    INSTALLED.load(Ordering::SeqCst)
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "appboot=debug"
    } else {
        "appboot=info"
    }
}

fn build_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| default_directive(debug).into())
}

/// Install the global tracing subscriber.
///
/// Fails if another subscriber is already set for the process.
pub fn init_logging(options: &AppOptions) -> Result<()> {
    let json_layer = options
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!options.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(build_filter(options.debug))
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| AppbootError::logging(e.to_string()))?;

    INSTALLED.store(true, Ordering::SeqCst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "appboot=info");
        assert_eq!(default_directive(true), "appboot=debug");
    }

    #[test]
    fn test_second_install_fails() {
        let options = AppOptions::default();
        // Another test in this binary may already have installed one
        let _ = init_logging(&options);

        assert!(init_logging(&options).is_err());
        assert!(is_initialized());
    }
}
