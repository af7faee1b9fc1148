//! Status, user and namespace presentation.

use super::shared::{format_section_heading, to_json};
use crate::auth::{Authorization, UserInfo};
use crate::context::ContextValue;
use crate::error::ApiError;
use crate::namespace::{Namespace, NamespaceSelection};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;

/// Snapshot of the application context for `status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub available: bool,
    pub application: Option<String>,
    pub host_path: Option<String>,
    pub namespaces: Vec<String>,
    pub base_url: String,
}

impl StatusReport {
    pub fn new(
        value: &ContextValue,
        application: Option<String>,
        namespaces: &NamespaceSelection,
        base_url: &str,
    ) -> Self {
        Self {
            available: value.api_state.is_available(),
            application,
            host_path: value.api_state.host_path().map(|p| p.to_string()),
            namespaces: namespaces.iter().map(str::to_string).collect(),
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    #[serde(flatten)]
    pub user: UserInfo,
    #[serde(flatten)]
    pub authorization: Authorization,
}

pub fn format_status(report: &StatusReport, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(report);
    }

    let mut out = format!("{}\n\n", format_section_heading("API Status"));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.add_row(vec![
        "Available".to_string(),
        if report.available { "yes" } else { "no" }.to_string(),
    ]);
    table.add_row(vec![
        "Application".to_string(),
        report
            .application
            .clone()
            .unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Host path".to_string(),
        report.host_path.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Namespaces".to_string(),
        if report.namespaces.is_empty() {
            "-".to_string()
        } else {
            report.namespaces.join(", ")
        },
    ]);
    table.add_row(vec!["BFF".to_string(), report.base_url.clone()]);
    out.push_str(&table.to_string());
    if !report.available {
        out.push_str("\n\nNo application configured; the API is not ready.");
    }
    Ok(out)
}

pub fn format_user(report: &UserReport, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(report);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.add_row(vec!["User ID", report.user.user_id.as_str()]);
    table.add_row(vec!["Display Name", report.user.display_label()]);
    table.add_row(vec![
        "Is Admin",
        if report.user.is_admin { "Yes" } else { "No" },
    ]);
    table.add_row(vec![
        "Cluster Admin",
        if report.authorization.cluster_admin {
            "Yes"
        } else {
            "No"
        },
    ]);
    Ok(format!("{}\n\n{}", format_section_heading("User"), table))
}

pub fn format_namespaces(namespaces: &[Namespace], format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(&namespaces);
    }
    if namespaces.is_empty() {
        return Ok("No namespaces.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Name", "Display Name"]);
    for ns in namespaces {
        table.add_row(vec![
            ns.name.clone(),
            ns.display_name.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    Ok(table.to_string())
}
