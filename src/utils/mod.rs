//! Utility functions module
//!
//! This module contains executable path resolution, logger setup and output
//! formatting helpers.

pub mod exe;
pub mod format;
pub mod logging;

pub use exe::*;
pub use format::*;
pub use logging::*;
