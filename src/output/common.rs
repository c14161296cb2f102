//! Common utilities for output formatters

use chrono::DateTime;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Result, TfeError};

/// Reformat an RFC 3339 timestamp from the service for display,
/// e.g. `2024-12-01T17:00:58.518Z` becomes `2024-Dec-01 17:00`
pub fn format_timestamp(timestamp: &str) -> Result<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| TfeError::Timestamp(format!("'{}': {}", timestamp, e)))?;
    Ok(parsed.format("%Y-%b-%d %H:%M").to_string())
}

/// Reformat a timestamp that may be absent; missing renders as empty
pub fn format_optional_timestamp(timestamp: Option<&str>) -> Result<String> {
    match timestamp {
        Some(ts) => format_timestamp(ts),
        None => Ok(String::new()),
    }
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a serializable value as YAML
pub fn print_yaml<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_yml::to_string(data)?);
    Ok(())
}

/// Output raw JSON/YAML for a single object from an API response.
/// Extracts just the "data" part, removing the wrapper.
pub fn output_raw(raw: &serde_json::Value, format: &OutputFormat) -> Result<()> {
    let data = &raw["data"];
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Yaml => print_yaml(data),
        OutputFormat::Text => unreachable!("output_raw is only for structured formats"),
    }
}

/// Output a list of names: one per line for text, an array for JSON/YAML
pub fn output_names(names: &[&str], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for name in names {
                println!("{}", name);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&names),
        OutputFormat::Yaml => print_yaml(&names),
    }
}
