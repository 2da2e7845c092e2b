//! Location of the running executable

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

static EXE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Directory containing the running executable.
///
/// Resolved on first call and cached for the rest of the process. If the
/// executable path can't be determined the current directory (`.`) is used.
pub fn exe_dir() -> &'static Path {
    EXE_DIR.get_or_init(|| {
        resolve_exe_dir().unwrap_or_else(|e| {
            warn!("Unable to determine executable directory: {}", e);
            PathBuf::from(".")
        })
    })
}

/// Resolve the executable directory without caching
pub fn resolve_exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
