//! appboot - application bootstrap helper
//!
//! Parses command-line flags, loads named JSON configuration files,
//! initializes logging and runs start/close hooks for a host program.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use app::App;
pub use cli::{FlagSet, FlagStore};
pub use config::{AppOptions, ConfigRegistry};
pub use error::{AppbootError, Result};
