//! CLI module for appboot
//!
//! This module contains the runtime flag registry used by host programs and
//! the command definitions of the `appboot` binary.

pub mod commands;
pub mod flags;

pub use commands::*;
pub use flags::{FlagSet, FlagSpec, FlagStore, CONFIG_FLAG};
