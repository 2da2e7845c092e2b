//! Application lifecycle tests
//!
//! Tests for the start/close sequence: default config loading, flag
//! handling and hook execution.

use appboot::cli::{FlagSet, CONFIG_FLAG};
use appboot::{App, AppOptions, AppbootError};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

fn options_without_log() -> AppOptions {
    AppOptions {
        enable_log: false,
        ..AppOptions::default()
    }
}

#[cfg(test)]
mod start_tests {
    use super::*;

    #[tokio::test]
    async fn test_start_loads_config_from_flag() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.json");
        std::fs::write(&path, r#"{"greeting": "hello"}"#).unwrap();

        let flags = FlagSet::new();
        let store = flags
            .parse_from(["host", "--config", path.to_str().unwrap()])
            .unwrap();
        let app = App::new(options_without_log(), store);

        app.start().await.unwrap();

        assert_eq!(app.flag(CONFIG_FLAG), path.to_str().unwrap());
        assert_eq!(
            app.registry().config("", "greeting", "").await,
            json!("hello")
        );
    }

    #[tokio::test]
    async fn test_start_skips_config_when_disabled() {
        let flags = FlagSet::new();
        let store = flags
            .parse_from(["host", "--config", "/does/not/exist.json"])
            .unwrap();
        let options = AppOptions {
            enable_config: false,
            ..options_without_log()
        };
        let app = App::new(options, store);

        app.start().await.unwrap();
        assert!(app.registry().names().await.is_empty());
    }

    #[tokio::test]
    async fn test_start_reports_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let store = FlagSet::new()
            .parse_from(["host", "--config", path.to_str().unwrap()])
            .unwrap();
        let app = App::new(options_without_log(), store);

        let err = app.start().await.unwrap_err();
        match err {
            AppbootError::Startup { stage, source } => {
                assert_eq!(stage, "error reading config file");
                assert!(matches!(*source, AppbootError::ConfigLoad { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_pre_fn_sees_loaded_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.json");
        std::fs::write(&path, r#"{"workers": 4}"#).unwrap();

        let mut flags = FlagSet::new();
        flags.set_flag("mode", "serve", "Run mode");
        let store = flags
            .parse_from(["host", "--config", path.to_str().unwrap()])
            .unwrap();

        let mut app = App::new(options_without_log(), store);
        assert_eq!(app.flag("mode"), "serve");

        let saw_workers = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&saw_workers);
        app.set_pre_fn(move |registry| {
            let flag = Arc::clone(&flag);
            async move {
                let workers = registry.config_as::<u32>("", "workers", 1).await;
                flag.store(workers == 4, Ordering::SeqCst);
                Ok(())
            }
        });

        app.start().await.unwrap();
        assert!(saw_workers.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_pre_fn_error_fails_start() {
        let options = AppOptions {
            enable_config: false,
            ..options_without_log()
        };
        let mut app = App::new(options, FlagSet::new().parse_from(["host"]).unwrap());
        app.set_pre_fn(|_registry| async { anyhow::bail!("not ready") });

        let err = app.start().await.unwrap_err();
        assert!(matches!(err, AppbootError::Hook(_)));
    }
}

#[cfg(test)]
mod close_tests {
    use super::*;

    #[tokio::test]
    async fn test_close_persists_through_hook() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.json");
        std::fs::write(&path, r#"{"runs": 0}"#).unwrap();

        let store = FlagSet::new()
            .parse_from(["host", "--config", path.to_str().unwrap()])
            .unwrap();
        let mut app = App::new(options_without_log(), store);
        app.set_close_fn(|registry| async move {
            registry.set_config("", "runs", 1).await;
            registry.write_config("").await?;
            Ok(())
        });

        app.start().await.unwrap();
        app.close().await.unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({"runs": 1}));
    }

    #[tokio::test]
    async fn test_close_without_hook_is_ok() {
        let options = AppOptions {
            enable_config: false,
            ..options_without_log()
        };
        let app = App::new(options, Default::default());
        app.close().await.unwrap();
    }
}
