//! Merge rules: defaults, override order, conflict handling.

use crate::endpoint::{BFF_API_VERSION, URL_PREFIX};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("bff.base_url", "http://localhost:4000")?
        .set_default("bff.url_prefix", URL_PREFIX)?
        .set_default("bff.api_version", BFF_API_VERSION)?
        .set_default("platform.environment", "Development")?
        .set_default("platform.build_version", "Development Build")
}
