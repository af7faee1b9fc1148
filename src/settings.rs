//! Settings page content.
//!
//! Builds the three sections of the settings page (user information,
//! application configuration, system information) as label/value rows.
//! Layout is left to the presentation layer.

use crate::auth::{UserInfo, UserStatus};
use crate::config::AdminConfig;
use crate::error::ApiError;
use chrono::NaiveDate;
use serde::Serialize;

pub const NOT_AVAILABLE: &str = "Not available";
pub const NOT_CONFIGURED: &str = "Not configured";
pub const APPLICATION_NAME: &str = "Model Registry";

/// Load state of a page.
#[derive(Debug)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    LoadError(ApiError),
}

impl<T> PageState<T> {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, PageState::Loading)
    }

    pub fn load_error(&self) -> Option<&ApiError> {
        match self {
            PageState::LoadError(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub sections: Vec<Section>,
}

impl SettingsView {
    pub fn build(user: Option<&UserInfo>, config: &AdminConfig, today: NaiveDate) -> Self {
        Self {
            sections: vec![
                user_section(user),
                configuration_section(config),
                system_section(config, today),
            ],
        }
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn value(&self, section: &str, label: &str) -> Option<&str> {
        self.section(section)?
            .fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Page state for a user load outcome.
pub fn settings_page(
    status: UserStatus,
    config: &AdminConfig,
    today: NaiveDate,
) -> PageState<SettingsView> {
    match status {
        UserStatus::NotReady => PageState::Loading,
        UserStatus::Loaded(user) => {
            PageState::Ready(SettingsView::build(Some(&user), config, today))
        }
        UserStatus::Failed(err) => PageState::LoadError(err),
    }
}

fn or_configured(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_CONFIGURED.to_string(),
    }
}

fn user_section(user: Option<&UserInfo>) -> Section {
    let user_id = user
        .map(|u| u.user_id.as_str())
        .filter(|id| !id.is_empty())
        .unwrap_or(NOT_AVAILABLE);
    let display_name = user
        .map(|u| u.display_label())
        .filter(|name| !name.is_empty())
        .unwrap_or(NOT_AVAILABLE);
    let is_admin = if user.is_some_and(|u| u.is_admin) {
        "Yes"
    } else {
        "No"
    };

    Section {
        title: "User Information",
        fields: vec![
            Field::new("User ID", user_id),
            Field::new("Display Name", display_name),
            Field::new("Is Admin", is_admin),
        ],
    }
}

fn configuration_section(config: &AdminConfig) -> Section {
    Section {
        title: "Application Configuration",
        fields: vec![
            Field::new(
                "Platform Mode",
                or_configured(config.platform.platform_mode.as_deref()),
            ),
            Field::new(
                "Deployment Mode",
                or_configured(config.platform.deployment_mode.as_deref()),
            ),
            Field::new(
                "API Version",
                or_configured(Some(config.bff.api_version.as_str())),
            ),
            Field::new("Base URL", or_configured(Some(config.bff.base_url.as_str()))),
        ],
    }
}

fn system_section(config: &AdminConfig, today: NaiveDate) -> Section {
    Section {
        title: "System Information",
        fields: vec![
            Field::new("Application Name", APPLICATION_NAME),
            Field::new("Environment", config.platform.environment.clone()),
            Field::new("Build Version", config.platform.build_version.clone()),
            Field::new("Last Updated", today.format("%Y-%m-%d").to_string()),
        ],
    }
}
