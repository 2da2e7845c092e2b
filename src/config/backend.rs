//! Config file backends
//!
//! A backend knows how to turn a file on disk into a key/value map and back.
//! The registry only talks to the [`ConfigBackend`] trait so tests can swap
//! in a mock and hosts can plug in another storage format.

use crate::config::handle::ConfigMap;
use crate::error::{AppbootError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Loads and persists whole config files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigBackend: Send + Sync {
    /// Read the file at `path` into memory.
    async fn load(&self, path: &Path) -> Result<ConfigMap>;

    /// Replace the file at `path` with `values`.
    async fn write(&self, values: &ConfigMap, path: &Path) -> Result<()>;
}

/// JSON file backend. The file must hold a single top-level object.
#[derive(Debug, Clone, Default)]
pub struct JsonFileBackend;

impl JsonFileBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfigBackend for JsonFileBackend {
    async fn load(&self, path: &Path) -> Result<ConfigMap> {
        let content = tokio::fs::read_to_string(path).await?;

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(values) => {
                debug!("Loaded {} keys from {}", values.len(), path.display());
                Ok(values)
            }
            other => Err(AppbootError::invalid_config(
                path,
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    async fn write(&self, values: &ConfigMap, path: &Path) -> Result<()> {
        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(values)?;

        tokio::fs::write(path, content).await?;

        debug!("Saved {} keys to {}", values.len(), path.display());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
