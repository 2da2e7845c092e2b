use std::path::PathBuf;
use thiserror::Error;

/// Main error type for appboot operations
#[derive(Debug, Error)]
pub enum AppbootError {
    #[error("path can't be empty for config '{name}'")]
    MissingPath { name: String },

    #[error("failed to load config file {}: {source}", .path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: Box<AppbootError>,
    },

    #[error("failed to write config file {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: Box<AppbootError>,
    },

    #[error("can not write config. config {name} is not yet initialized")]
    NotInitialized { name: String },

    #[error("key '{key}' not found in config '{name}'")]
    KeyNotFound { name: String, key: String },

    #[error("invalid config file {}: {details}", .path.display())]
    InvalidConfig { path: PathBuf, details: String },

    #[error("Flag error: {0}")]
    Flag(String),

    #[error("{stage}. {source}")]
    Startup {
        stage: &'static str,
        #[source]
        source: Box<AppbootError>,
    },

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Hook failed: {0}")]
    Hook(#[source] anyhow::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppbootError {
    pub fn missing_path<S: Into<String>>(name: S) -> Self {
        Self::MissingPath { name: name.into() }
    }

    pub fn config_load<P: Into<PathBuf>>(path: P, source: AppbootError) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn config_write<P: Into<PathBuf>>(path: P, source: AppbootError) -> Self {
        Self::ConfigWrite {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn not_initialized<S: Into<String>>(name: S) -> Self {
        Self::NotInitialized { name: name.into() }
    }

    pub fn key_not_found<S: Into<String>>(name: S, key: S) -> Self {
        Self::KeyNotFound {
            name: name.into(),
            key: key.into(),
        }
    }

    pub fn invalid_config<P: Into<PathBuf>, S: Into<String>>(path: P, details: S) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            details: details.into(),
        }
    }

    pub fn flag<S: Into<String>>(msg: S) -> Self {
        Self::Flag(msg.into())
    }

    pub fn startup(stage: &'static str, source: AppbootError) -> Self {
        Self::Startup {
            stage,
            source: Box::new(source),
        }
    }

    pub fn logging<S: Into<String>>(msg: S) -> Self {
        Self::Logging(msg.into())
    }
}

/// Result type alias for appboot operations
pub type Result<T> = std::result::Result<T, AppbootError>;

impl From<clap::Error> for AppbootError {
    fn from(error: clap::Error) -> Self {
        Self::Flag(error.to_string())
    }
}
