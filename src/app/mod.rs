//! Application lifecycle
//!
//! ```text
//! start:  read default config → install logger → pre-start hook
//! close:  close hook
//! ```

pub mod lifecycle;

pub use lifecycle::{App, Hook};
