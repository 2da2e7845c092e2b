//! Application start and close sequence

use crate::cli::flags::FlagStore;
use crate::config::{AppOptions, ConfigRegistry};
use crate::error::{AppbootError, Result};
use crate::utils::logging;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};

/// User supplied start/close callback
pub type Hook =
    Box<dyn Fn(Arc<ConfigRegistry>) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Bootstrap state for a host program.
///
/// `start` reads the default config, installs the logger and then runs the
/// pre-start hook. `close` runs the close hook.
pub struct App {
    options: AppOptions,
    registry: Arc<ConfigRegistry>,
    pre_fn: Option<Hook>,
    close_fn: Option<Hook>,
}

impl App {
    pub fn new(options: AppOptions, flags: FlagStore) -> Self {
        Self::with_registry(options, ConfigRegistry::new(flags))
    }

    pub fn with_registry(options: AppOptions, registry: ConfigRegistry) -> Self {
        Self {
            options,
            registry: Arc::new(registry),
            pre_fn: None,
            close_fn: None,
        }
    }

    pub fn options(&self) -> &AppOptions {
        &self.options
    }

    pub fn registry(&self) -> &Arc<ConfigRegistry> {
        &self.registry
    }

    pub fn flags(&self) -> &FlagStore {
        self.registry.flags()
    }

    /// Value of flag `name`, empty if unset
    pub fn flag(&self, name: &str) -> &str {
        self.registry.flags().flag(name)
    }

    /// Register the hook that runs at the end of [`start`](Self::start)
    pub fn set_pre_fn<F, Fut>(&mut self, hook: F)
    where
        F: Fn(Arc<ConfigRegistry>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.pre_fn = Some(Box::new(
            move |registry: Arc<ConfigRegistry>| -> BoxFuture<'static, anyhow::Result<()>> {
                Box::pin(hook(registry))
            },
        ));
    }

    /// Register the hook that runs on [`close`](Self::close)
    pub fn set_close_fn<F, Fut>(&mut self, hook: F)
    where
        F: Fn(Arc<ConfigRegistry>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.close_fn = Some(Box::new(
            move |registry: Arc<ConfigRegistry>| -> BoxFuture<'static, anyhow::Result<()>> {
                Box::pin(hook(registry))
            },
        ));
    }

    pub async fn start(&self) -> Result<()> {
        if self.options.enable_config {
            self.registry
                .read_config("", None)
                .await
                .map_err(|e| AppbootError::startup("error reading config file", e))?;
        }

        if self.options.enable_log && !logging::is_initialized() {
            logging::init_logging(&self.options)
                .map_err(|e| AppbootError::startup("error preparing log", e))?;
        }

        if let Some(pre_fn) = &self.pre_fn {
            debug!("Running pre-start hook");
            pre_fn(Arc::clone(&self.registry))
                .await
                .map_err(AppbootError::Hook)?;
        }

        info!("Application started");
        Ok(())
    }

    pub async fn close(&self) -> Result<()> {
        if let Some(close_fn) = &self.close_fn {
            debug!("Running close hook");
            close_fn(Arc::clone(&self.registry))
                .await
                .map_err(AppbootError::Hook)?;
        }

        info!("Application closed");
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("options", &self.options)
            .field("registry", &self.registry)
            .field("pre_fn", &self.pre_fn.is_some())
            .field("close_fn", &self.close_fn.is_some())
            .finish()
    }
}
