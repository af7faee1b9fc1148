//! Registry Admin: Model Registry administration client
//!
//! Resolves the backend-for-frontend endpoint for an application, builds a
//! typed client bound to it, and tracks whether that client is ready for use.
//! The settings page and the route table are derived from the user the
//! client reports.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod rest;
pub mod routes;
pub mod settings;
pub mod state;

pub use api::{BffClientFactory, ClientFactory, ClientHandle, RegistryApi};
pub use auth::{derive_authorization, Authorization, UserInfo};
pub use context::{AppContext, ContextValue, Refresher, Resolution};
pub use endpoint::{resolve, EndpointConfig, HostPath};
pub use error::ApiError;
pub use namespace::{Namespace, NamespaceSelection};
pub use state::{compute_state, ApiState};
