//! Configuration management module
//!
//! This module handles named JSON config files (loading, lookups, in-memory
//! updates and persistence) and the settings that drive application startup.

pub mod backend;
pub mod handle;
pub mod registry;
pub mod settings;

pub use backend::{ConfigBackend, JsonFileBackend};
pub use handle::{ConfigHandle, ConfigMap};
pub use registry::*;
pub use settings::*;
