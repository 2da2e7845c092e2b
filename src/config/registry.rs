//! Named configuration registry
//!
//! Holds any number of named, file-backed configs. The name `"default"` is
//! used whenever a caller passes an empty name, and it is the only config
//! whose path may be omitted: it then comes from the `--config` flag or
//! falls back to `app.json` next to the executable.
//!
//! Loading a config reinitializes the registry, so only the most recently
//! read config stays accessible.

use crate::cli::flags::{FlagStore, CONFIG_FLAG};
use crate::config::backend::{ConfigBackend, JsonFileBackend};
use crate::config::handle::{ConfigHandle, ConfigMap};
use crate::error::{AppbootError, Result};
use crate::utils::exe::exe_dir;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Reserved name used when no config name is given
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// File name of the default config inside the executable directory
pub const DEFAULT_CONFIG_FILE: &str = "app.json";

/// Map an empty config name to [`DEFAULT_CONFIG_NAME`]
pub fn effective_name(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_CONFIG_NAME
    } else {
        name
    }
}

pub struct ConfigRegistry {
    configs: RwLock<HashMap<String, ConfigHandle>>,
    flags: FlagStore,
    exe_dir: PathBuf,
    backend: Arc<dyn ConfigBackend>,
}

impl std::fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigRegistry")
            .field("flags", &self.flags)
            .field("exe_dir", &self.exe_dir)
            .finish_non_exhaustive()
    }
}

impl ConfigRegistry {
    /// Create a registry backed by JSON files, resolving the default path
    /// relative to the running executable
    pub fn new(flags: FlagStore) -> Self {
        Self::with_backend(flags, exe_dir(), Arc::new(JsonFileBackend::new()))
    }

    pub fn with_backend<P: Into<PathBuf>>(
        flags: FlagStore,
        exe_dir: P,
        backend: Arc<dyn ConfigBackend>,
    ) -> Self {
        Self {
            configs: RwLock::new(HashMap::new()),
            flags,
            exe_dir: exe_dir.into(),
            backend,
        }
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    /// Executable directory this registry resolves the default path against
    pub fn exe_dir(&self) -> &Path {
        &self.exe_dir
    }

    /// Work out which file `read_config` would load for `name`.
    ///
    /// An explicit, non-empty `path` always wins. Without one, the default
    /// config uses the `--config` flag, then `<exe_dir>/app.json`; any other
    /// name is an error.
    pub fn resolve_path(&self, name: &str, path: Option<&Path>) -> Result<PathBuf> {
        let name = effective_name(name);

        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(path.to_path_buf());
        }

        if name != DEFAULT_CONFIG_NAME {
            return Err(AppbootError::missing_path(name));
        }

        let flag_path = self.flags.flag(CONFIG_FLAG);
        if !flag_path.is_empty() {
            return Ok(PathBuf::from(flag_path));
        }

        Ok(self.exe_dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Load the config file for `name` and make it the registry's only entry.
    ///
    /// Once the path is resolved the registry is reinitialized, dropping
    /// handles loaded earlier under any name, even if the load then fails. A
    /// missing path leaves the registry untouched.
    pub async fn read_config(&self, name: &str, path: Option<&Path>) -> Result<()> {
        let name = effective_name(name);
        let path = self.resolve_path(name, path)?;

        let mut configs = self.configs.write().await;
        if !configs.is_empty() {
            debug!("Reinitializing registry, dropping {} config(s)", configs.len());
        }
        configs.clear();

        debug!("Reading config '{}' from {}", name, path.display());
        let values = self
            .backend
            .load(&path)
            .await
            .map_err(|e| AppbootError::config_load(&path, e))?;

        configs.insert(name.to_string(), ConfigHandle::new(&path, values));

        info!("Loaded config '{}' from {}", name, path.display());
        Ok(())
    }

    /// Value of `key` in config `name`, or `default` if either is missing
    pub async fn config<V: Into<Value>>(&self, name: &str, key: &str, default: V) -> Value {
        self.lookup(name, key)
            .await
            .unwrap_or_else(|| default.into())
    }

    /// Typed variant of [`config`](Self::config). Values that don't
    /// deserialize into `T` also yield `default`.
    pub async fn config_as<T: DeserializeOwned>(&self, name: &str, key: &str, default: T) -> T {
        let configs = self.configs.read().await;
        configs
            .get(effective_name(name))
            .and_then(|handle| handle.get_as(key))
            .unwrap_or(default)
    }

    /// Soft lookup without a default
    pub async fn lookup(&self, name: &str, key: &str) -> Option<Value> {
        let configs = self.configs.read().await;
        configs
            .get(effective_name(name))
            .and_then(|handle| handle.get(key))
            .cloned()
    }

    /// Strict lookup: a missing config or key is an error
    pub async fn try_config(&self, name: &str, key: &str) -> Result<Value> {
        let name = effective_name(name);
        let configs = self.configs.read().await;
        let handle = configs
            .get(name)
            .ok_or_else(|| AppbootError::not_initialized(name))?;

        handle
            .get(key)
            .cloned()
            .ok_or_else(|| AppbootError::key_not_found(name, key))
    }

    /// Set `key` in memory. Does nothing if config `name` isn't loaded.
    pub async fn set_config<V: Into<Value>>(&self, name: &str, key: &str, value: V) {
        let name = effective_name(name);
        let mut configs = self.configs.write().await;

        match configs.get_mut(name) {
            Some(handle) => {
                handle.set(key, value.into());
                debug!("Set '{}' in config '{}'", key, name);
            }
            None => debug!("Ignoring set of '{}': config '{}' not loaded", key, name),
        }
    }

    /// Persist config `name` to its backing file
    pub async fn write_config(&self, name: &str) -> Result<()> {
        let name = effective_name(name);
        let configs = self.configs.read().await;
        let handle = configs
            .get(name)
            .ok_or_else(|| AppbootError::not_initialized(name))?;

        self.backend
            .write(handle.values(), handle.path())
            .await
            .map_err(|e| AppbootError::config_write(handle.path(), e))?;

        info!("Wrote config '{}' to {}", name, handle.path().display());
        Ok(())
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.configs.read().await.contains_key(effective_name(name))
    }

    /// Names of the currently loaded configs, sorted
    pub async fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.configs.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    /// Backing file of config `name`, if loaded
    pub async fn path(&self, name: &str) -> Option<PathBuf> {
        let configs = self.configs.read().await;
        configs
            .get(effective_name(name))
            .map(|handle| handle.path().to_path_buf())
    }

    /// Copy of the in-memory contents of config `name`
    pub async fn snapshot(&self, name: &str) -> Option<ConfigMap> {
        let configs = self.configs.read().await;
        configs
            .get(effective_name(name))
            .map(|handle| handle.values().clone())
    }
}
