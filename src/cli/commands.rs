//! CLI commands and argument parsing
//!
//! This module defines the `appboot` command-line interface using clap and
//! runs each command against the application's config registry.

use crate::app::App;
use crate::config::{effective_name, AppOptions, ConfigRegistry, DEFAULT_CONFIG_NAME};
use crate::error::Result;
use crate::utils::exe::exe_dir;
use crate::utils::format::{ConfigFormatter, OutputFormat};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "appboot")]
#[command(about = "Inspect and edit named JSON config files")]
#[command(version, author)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config name to operate on
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_NAME)]
    pub name: String,

    /// Config file for the named config (required unless the name is "default")
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all settings of the config
    Show,
    /// Print one setting
    Get {
        /// Setting name
        key: String,
        /// Value to print when the setting is missing
        #[arg(long)]
        default: Option<String>,
    },
    /// Set a setting and write the config file
    Set {
        /// Setting name
        key: String,
        /// Setting value, parsed as JSON when possible
        value: String,
    },
    /// Show the config file path
    Path,
    /// Show the directory of the running executable
    ExeDir,
}

impl Commands {
    fn reads_config(&self) -> bool {
        matches!(self, Commands::Show | Commands::Get { .. } | Commands::Set { .. })
    }
}

impl Cli {
    /// Whether startup can load the config by itself: the command reads a
    /// config and it's the default one without an explicit file
    pub fn uses_default_config(&self) -> bool {
        self.command.reads_config()
            && effective_name(&self.name) == DEFAULT_CONFIG_NAME
            && self.file.is_none()
    }

    /// Layer the command line over `options`. Flags can only turn debug on
    /// and startup config loading off.
    pub fn apply_options(&self, options: &mut AppOptions) {
        options.debug |= self.debug;
        options.enable_config &= self.uses_default_config();
    }

    pub async fn execute(self, app: &App) -> Result<()> {
        let registry = app.registry();
        let formatter = ConfigFormatter::new(self.format, self.no_color);
        let name = effective_name(&self.name);
        let file = self.file.as_deref();

        match self.command {
            Commands::Show => {
                ensure_loaded(registry, name, file).await?;
                let values = registry.snapshot(name).await.unwrap_or_default();
                println!("{}", formatter.format_config(&values)?);
            }
            Commands::Get { key, default } => {
                ensure_loaded(registry, name, file).await?;
                let value = match default {
                    Some(default) => registry.config(name, &key, parse_value(&default)).await,
                    None => registry.try_config(name, &key).await?,
                };
                println!("{}", formatter.format_value(&value)?);
            }
            Commands::Set { key, value } => {
                ensure_loaded(registry, name, file).await?;
                registry.set_config(name, &key, parse_value(&value)).await;
                registry.write_config(name).await?;
                info!("Updated '{}' in config '{}'", key, name);
                println!("Set {} in config {}", key, name);
            }
            Commands::Path => {
                let path = registry.resolve_path(name, file)?;
                println!("{}", path.display());
            }
            Commands::ExeDir => {
                println!("{}", exe_dir().display());
            }
        }
        Ok(())
    }
}

async fn ensure_loaded(registry: &ConfigRegistry, name: &str, file: Option<&Path>) -> Result<()> {
    if !registry.contains(name).await {
        registry.read_config(name, file).await?;
    }
    Ok(())
}

/// Interpret a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("8080"), json!(8080));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value(r#"{"a": 1}"#), json!({"a": 1}));
        assert_eq!(parse_value("plain text"), json!("plain text"));
        assert_eq!(parse_value(r#""quoted""#), json!("quoted"));
    }

    #[test]
    fn test_uses_default_config() {
        let cli = Cli::try_parse_from(["appboot", "show"]).unwrap();
        assert!(cli.uses_default_config());

        let cli = Cli::try_parse_from(["appboot", "--name", "db", "show"]).unwrap();
        assert!(!cli.uses_default_config());

        let cli = Cli::try_parse_from(["appboot", "show", "--file", "/tmp/x.json"]).unwrap();
        assert!(!cli.uses_default_config());

        let cli = Cli::try_parse_from(["appboot", "path"]).unwrap();
        assert!(!cli.uses_default_config());
    }

    #[test]
    fn test_apply_options_keeps_disabled_config() {
        let cli = Cli::try_parse_from(["appboot", "show"]).unwrap();
        let mut options = AppOptions {
            enable_config: false,
            ..AppOptions::default()
        };

        cli.apply_options(&mut options);

        assert!(!options.enable_config);
        assert!(!options.debug);
    }

    #[test]
    fn test_apply_options_from_flags() {
        let cli = Cli::try_parse_from(["appboot", "--debug", "show"]).unwrap();
        let mut options = AppOptions::default();
        cli.apply_options(&mut options);
        assert!(options.enable_config);
        assert!(options.debug);

        let cli = Cli::try_parse_from(["appboot", "--name", "db", "show"]).unwrap();
        let mut options = AppOptions {
            debug: true,
            ..AppOptions::default()
        };
        cli.apply_options(&mut options);
        assert!(!options.enable_config);
        assert!(options.debug);
    }

    #[test]
    fn test_get_parses_default() {
        let cli = Cli::try_parse_from(["appboot", "get", "port", "--default", "80"]).unwrap();
        match cli.command {
            Commands::Get { key, default } => {
                assert_eq!(key, "port");
                assert_eq!(default.as_deref(), Some("80"));
            }
            _ => panic!("expected get command"),
        }
    }
}
