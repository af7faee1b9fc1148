//! Shared presentation helpers.

use crate::config::ValidationError;
use crate::error::ApiError;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::Cli(format!("Failed to serialize output: {}", e)))
}

pub fn format_config_validation(result: &Result<(), Vec<ValidationError>>) -> String {
    match result {
        Ok(()) => "Configuration is valid".to_string(),
        Err(errors) => {
            let mut s = format!("Configuration has {} error(s):", errors.len());
            for e in errors {
                s.push_str(&format!("\n  - {}", e));
            }
            s
        }
    }
}
