//! In-memory view of one loaded config file

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Key/value contents of a config file, in file order.
pub type ConfigMap = serde_json::Map<String, Value>;

/// One loaded configuration file and the path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigHandle {
    path: PathBuf,
    values: ConfigMap,
}

impl ConfigHandle {
    pub fn new<P: Into<PathBuf>>(path: P, values: ConfigMap) -> Self {
        Self {
            path: path.into(),
            values,
        }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn values(&self) -> &ConfigMap {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value stored under `key`, or `default` if the key is absent
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(default)
    }

    /// Typed lookup. Values that don't deserialize into `T` count as absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
    }

    /// Set `key` in memory only; [`ConfigRegistry::write_config`] persists it.
    ///
    /// [`ConfigRegistry::write_config`]: crate::config::ConfigRegistry::write_config
    pub fn set<K: Into<String>>(&mut self, key: K, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
