//! Configuration System
//!
//! Layered configuration for the admin client: built-in defaults, the global
//! config file, workspace config files and `REGISTRY_ADMIN__*` environment
//! variables, merged in that order. Tests included.

use crate::endpoint::{EndpointConfig, BFF_API_VERSION, URL_PREFIX};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// BFF connection settings
    #[serde(default)]
    pub bff: BffConfig,

    /// Platform information shown on the settings page
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the BFF lives and which application to talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BffConfig {
    /// Origin of the BFF, e.g. `http://localhost:4000`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Application the context resolves; unset means unconfigured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_url_prefix() -> String {
    URL_PREFIX.to_string()
}

fn default_api_version() -> String {
    BFF_API_VERSION.to_string()
}

impl Default for BffConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            url_prefix: default_url_prefix(),
            api_version: default_api_version(),
            application: None,
        }
    }
}

impl BffConfig {
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(self.url_prefix.clone(), self.api_version.clone())
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base_url '{}': {}", self.base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "Invalid base_url '{}': scheme must be http or https",
                self.base_url
            ));
        }

        if self.api_version.is_empty() || self.api_version.contains('/') {
            return Err(format!(
                "Invalid api_version '{}': must be a single path segment",
                self.api_version
            ));
        }

        if !self.url_prefix.is_empty()
            && (!self.url_prefix.starts_with('/') || self.url_prefix.ends_with('/'))
        {
            return Err(format!(
                "Invalid url_prefix '{}': must start with '/' and not end with '/'",
                self.url_prefix
            ));
        }

        if let Some(application) = &self.application {
            validate_application(application)?;
        }

        Ok(())
    }
}

/// An application name becomes one segment of the host path.
pub fn validate_application(application: &str) -> Result<(), String> {
    if application.is_empty()
        || application == "."
        || application == ".."
        || application.contains(['/', '\\', '?', '#', '%'])
    {
        return Err(format!(
            "Invalid application '{}': must be a single path segment",
            application
        ));
    }
    Ok(())
}

/// Deployment details displayed on the settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_mode: Option<String>,

    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_build_version")]
    pub build_version: String,
}

fn default_environment() -> String {
    "Development".to_string()
}

fn default_build_version() -> String {
    "Development Build".to_string()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            platform_mode: None,
            deployment_mode: None,
            environment: default_environment(),
            build_version: default_build_version(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Bff(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Bff(msg) => write!(f, "BFF: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Fold validation errors into one [`ApiError::ConfigError`].
pub fn validation_failed(errors: &[ValidationError]) -> ApiError {
    let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    ApiError::ConfigError(format!(
        "Configuration validation failed:\n{}",
        error_msgs.join("\n")
    ))
}

impl AdminConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.bff.validate() {
            errors.push(ValidationError::Bff(e));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
