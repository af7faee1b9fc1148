//! Global config file source: $XDG_CONFIG_HOME/registry-admin/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::PathBuf;
use tracing::warn;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| {
        dirs.config_dir()
            .join("registry-admin")
            .join("config.toml")
    })
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(config_path) = global_config_path() {
        if config_path.exists() {
            builder = builder.add_source(File::from(config_path).required(false));
        } else {
            warn!(
                config_path = %config_path.display(),
                "Global configuration file not found. \
                 Consider creating it for user-level defaults."
            );
        }
    }
    Ok(builder)
}
