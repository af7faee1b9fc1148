//! CLI route: single route table and run context. Mounts the application
//! context and dispatches to the library and presentation.

use crate::api::BffClientFactory;
use crate::auth::{derive_authorization, load_user, UserStatus};
use crate::cli::parse::{Commands, ConfigCommands};
use crate::cli::presentation::{
    format_config_validation, format_namespaces, format_route_match, format_settings_page,
    format_status, format_user, StatusReport, UserReport,
};
use crate::config::{validate_application, validation_failed, AdminConfig, ConfigLoader, ValidationError};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::namespace::NamespaceSelection;
use crate::rest::ApiOptions;
use crate::routes::{match_route, Route, RouteMatch, SETTINGS_PATH};
use crate::settings::settings_page;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: effective configuration plus the
/// application identity and namespace selection the context is mounted with.
pub struct RunContext {
    config: AdminConfig,
    application: Option<String>,
    namespaces: NamespaceSelection,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    /// `--app` overrides `bff.application`.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        application: Option<String>,
        namespaces: Option<String>,
    ) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::from_config(config, application, namespaces))
    }

    pub fn from_config(
        config: AdminConfig,
        application: Option<String>,
        namespaces: Option<String>,
    ) -> Self {
        let application = application
            .or_else(|| config.bff.application.clone())
            .filter(|name| !name.is_empty());
        let namespaces = namespaces
            .as_deref()
            .map(NamespaceSelection::parse_list)
            .unwrap_or_default();
        Self {
            config,
            application,
            namespaces,
        }
    }

    /// Add the `ns` values of a page query string (`ns=a&ns=b`) to the
    /// namespace selection.
    pub fn with_page_query(mut self, query: Option<&str>) -> Self {
        if let Some(query) = query {
            self.namespaces = self.namespaces.union(NamespaceSelection::from_query(query));
        }
        self
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        if let Commands::Config { command } = command {
            return self.execute_config(command);
        }

        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::Cli(format!("Failed to create runtime: {}", e)))?;
        rt.block_on(self.execute_async(command))
    }

    /// Async dispatch; usable from an existing runtime.
    pub async fn execute_async(&self, command: &Commands) -> Result<String, ApiError> {
        if let Commands::Config { command } = command {
            return self.execute_config(command);
        }

        self.validate()?;
        let context = self.mount().await?;
        let opts = ApiOptions::default();

        match command {
            Commands::Status { format } => {
                let report = StatusReport::new(
                    &context.value(),
                    context.application(),
                    &context.namespaces(),
                    &self.config.bff.base_url,
                );
                format_status(&report, format)
            }
            Commands::User { format } => {
                let user = match load_user(&context.api_state(), &opts).await {
                    UserStatus::Loaded(user) => user,
                    UserStatus::NotReady => return Err(not_ready()),
                    UserStatus::Failed(err) => return Err(err),
                };
                let report = UserReport {
                    authorization: derive_authorization(Some(&user)),
                    user,
                };
                format_user(&report, format)
            }
            Commands::Namespaces { format } => {
                let state = context.api_state();
                let client = state.require_client()?;
                let namespaces = client.get_namespaces(&opts).await?;
                format_namespaces(&namespaces, format)
            }
            Commands::Settings { format } => {
                let status = load_user(&context.api_state(), &opts).await;
                self.render_settings(status, format)
            }
            Commands::Route { path, format } => {
                let status = load_user(&context.api_state(), &opts).await;
                let matched = match_route(path, &status.authorization());
                format_route_match(path, &matched, format)
            }
            Commands::Config { command } => self.execute_config(command),
        }
    }

    /// Settings page for a user load outcome. For a loaded non-admin user
    /// the route does not exist and resolves to not-found.
    fn render_settings(&self, status: UserStatus, format: &str) -> Result<String, ApiError> {
        if status.user().is_some() {
            let matched = match_route(SETTINGS_PATH, &status.authorization());
            if matches!(matched, RouteMatch::Render { route: Route::NotFound }) {
                return format_route_match(SETTINGS_PATH, &matched, format);
            }
        }
        let today = chrono::Local::now().date_naive();
        format_settings_page(&settings_page(status, &self.config, today), format)
    }

    fn execute_config(&self, command: &ConfigCommands) -> Result<String, ApiError> {
        match command {
            ConfigCommands::Show => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::Cli(format!("Failed to serialize configuration: {}", e))),
            ConfigCommands::Validate => Ok(format_config_validation(&self.config.validate())),
        }
    }

    /// Validate the configuration and the effective application, which may
    /// come from `--app` rather than the file.
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = self.config.validate().err().unwrap_or_default();
        if let Some(application) = &self.application {
            if let Err(e) = validate_application(application) {
                errors.push(ValidationError::Bff(e));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(validation_failed(&errors))
        }
    }

    async fn mount(&self) -> Result<AppContext, ApiError> {
        let endpoint = self.config.bff.endpoint();
        let factory = BffClientFactory::new(&self.config.bff.base_url, endpoint.clone())?;
        let context = AppContext::mount(
            self.application.clone(),
            self.namespaces.clone(),
            endpoint,
            Arc::new(factory),
        )
        .await;
        info!(
            application = self.application.as_deref(),
            available = context.api_state().is_available(),
            "Application context mounted"
        );
        debug!(namespaces = %self.namespaces, "Namespace selection");
        Ok(context)
    }
}

fn not_ready() -> ApiError {
    ApiError::Unavailable("no application endpoint configured".to_string())
}
