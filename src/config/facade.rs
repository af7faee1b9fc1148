//! Config loader: assembles the layered sources and deserializes the result.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::{validation_failed, AdminConfig};
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`AdminConfig`] from defaults, files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, workspace files, then environment.
    pub fn load(workspace_root: &Path) -> Result<AdminConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: AdminConfig = builder.build()?.try_deserialize()?;
        debug!(workspace_root = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Defaults, the given file (required), then environment.
    pub fn load_from_file(path: &Path) -> Result<AdminConfig, ApiError> {
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: AdminConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    /// Load and validate, folding validation errors into one message.
    pub fn load_validated(
        workspace_root: &Path,
        config_path: Option<&Path>,
    ) -> Result<AdminConfig, ApiError> {
        let config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load(workspace_root)?,
        };

        config.validate().map_err(|errors| validation_failed(&errors))?;

        Ok(config)
    }
}
