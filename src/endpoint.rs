//! Endpoint resolution
//!
//! Maps an application name to the BFF host path its client talks to. Pure:
//! no network access and no fallible step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// URL prefix the BFF is mounted under.
pub const URL_PREFIX: &str = "";

/// BFF API version segment.
pub const BFF_API_VERSION: &str = "v1";

/// Path of an application-scoped BFF root, e.g. `/api/v1/app/registry-ui`.
///
/// Only produced by [`EndpointConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HostPath(String);

impl HostPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a sub-path below this host path.
    pub fn join(&self, sub_path: &str) -> String {
        format!("{}/{}", self.0, sub_path.trim_start_matches('/'))
    }
}

impl fmt::Display for HostPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HostPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// URL prefix and API version the resolver composes host paths from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url_prefix: String,
    pub api_version: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url_prefix: URL_PREFIX.to_string(),
            api_version: BFF_API_VERSION.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn new(url_prefix: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            api_version: api_version.into(),
        }
    }

    /// Root of the non app-scoped BFF endpoints (`/user`, `/namespaces`).
    pub fn bff_root(&self) -> String {
        format!("{}/api/{}", self.url_prefix, self.api_version)
    }

    /// Resolve the host path for an application.
    ///
    /// `None` and the empty string both mean "no endpoint configured".
    pub fn resolve(&self, application: Option<&str>) -> Option<HostPath> {
        match application {
            Some(name) if !name.is_empty() => {
                Some(HostPath(format!("{}/app/{}", self.bff_root(), name)))
            }
            _ => None,
        }
    }
}

/// Resolve with the compiled-in prefix and version.
pub fn resolve(application: Option<&str>) -> Option<HostPath> {
    EndpointConfig::default().resolve(application)
}
