//! Output formatting for config contents
//!
//! Renders a config map as a table, as JSON, or as plain `key=value` lines.

use crate::config::ConfigMap;
use crate::error::Result;
use serde_json::Value;
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Padding, Style},
    Table, Tabled,
};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Raw,
}

#[derive(Debug, Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
}

/// Render a value for display. Strings are shown without quotes.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Formats config maps for the terminal
pub struct ConfigFormatter {
    format: OutputFormat,
    no_color: bool,
}

impl ConfigFormatter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self { format, no_color }
    }

    pub fn format_config(&self, values: &ConfigMap) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
            OutputFormat::Raw => Ok(self.format_as_raw(values)),
            OutputFormat::Table if values.is_empty() => Ok("No settings to display".to_string()),
            OutputFormat::Table => Ok(self.format_as_table(values)),
        }
    }

    /// Format a single value
    pub fn format_value(&self, value: &Value) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Table | OutputFormat::Raw => Ok(render_value(value)),
        }
    }

    fn format_as_table(&self, values: &ConfigMap) -> String {
        let rows: Vec<ConfigRow> = values
            .iter()
            .map(|(key, value)| ConfigRow {
                key: key.clone(),
                value: render_value(value),
                kind: value_kind(value),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Padding::new(1, 1, 0, 0));

        if !self.no_color {
            table.with(Modify::new(Rows::first()).with(Color::FG_BLUE));
        }

        table.to_string()
    }

    fn format_as_raw(&self, values: &ConfigMap) -> String {
        values
            .iter()
            .map(|(key, value)| format!("{}={}", key, render_value(value)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigMap {
        let mut values = ConfigMap::new();
        values.insert("name".to_string(), json!("svc"));
        values.insert("port".to_string(), json!(8080));
        values
    }

    #[test]
    fn test_render_value_unquotes_strings() {
        assert_eq!(render_value(&json!("svc")), "svc");
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
        assert_eq!(render_value(&json!(null)), "null");
    }

    #[test]
    fn test_table_formatting() {
        let output = ConfigFormatter::new(OutputFormat::Table, true)
            .format_config(&sample())
            .unwrap();

        assert!(output.contains("Key"));
        assert!(output.contains("svc"));
        assert!(output.contains("number"));
    }

    #[test]
    fn test_empty_table() {
        let output = ConfigFormatter::new(OutputFormat::Table, true)
            .format_config(&ConfigMap::new())
            .unwrap();
        assert_eq!(output, "No settings to display");
    }

    #[test]
    fn test_raw_formatting() {
        let output = ConfigFormatter::new(OutputFormat::Raw, true)
            .format_config(&sample())
            .unwrap();
        assert_eq!(output, "name=svc\nport=8080");
    }

    #[test]
    fn test_json_value_keeps_quotes() {
        let output = ConfigFormatter::new(OutputFormat::Json, true)
            .format_value(&json!("svc"))
            .unwrap();
        assert_eq!(output, "\"svc\"");
    }
}
