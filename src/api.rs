//! BFF API clients
//!
//! [`RegistryApi`] is the typed client a consumer gets out of the API state.
//! [`ClientFactory`] builds one per host path; building never touches the
//! network, only the returned operations do.

use crate::auth::UserInfo;
use crate::endpoint::{EndpointConfig, HostPath};
use crate::error::ApiError;
use crate::namespace::{Namespace, NamespaceSelection};
use crate::rest::{build_http_client, parse_envelope, ApiOptions, RestClient};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Shared handle to a client bound to one host path.
pub type ClientHandle = Arc<dyn RegistryApi>;

/// Operations exposed by the BFF.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Host path this client is bound to.
    fn host_path(&self) -> &HostPath;

    /// Namespace selection forwarded on app-scoped requests.
    fn namespaces(&self) -> &NamespaceSelection;

    /// Current user (`GET <bff root>/user`).
    async fn get_user(&self, opts: &ApiOptions) -> Result<UserInfo, ApiError>;

    /// Visible namespaces (`GET <bff root>/namespaces`).
    async fn get_namespaces(&self, opts: &ApiOptions) -> Result<Vec<Namespace>, ApiError>;

    /// App-scoped GET below the host path; returns the envelope payload.
    async fn get_app(&self, sub_path: &str, opts: &ApiOptions) -> Result<Value, ApiError>;
}

/// Builds clients for a host path.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn build(&self, host_path: HostPath, namespaces: NamespaceSelection) -> ClientHandle;
}

/// Client for a live BFF.
pub struct BffClient {
    rest: RestClient,
    endpoint: EndpointConfig,
    host_path: HostPath,
    namespaces: NamespaceSelection,
}

impl BffClient {
    pub fn new(
        rest: RestClient,
        endpoint: EndpointConfig,
        host_path: HostPath,
        namespaces: NamespaceSelection,
    ) -> Self {
        Self {
            rest,
            endpoint,
            host_path,
            namespaces,
        }
    }

    fn bff_path(&self, resource: &str) -> String {
        format!("{}/{}", self.endpoint.bff_root(), resource)
    }
}

#[async_trait]
impl RegistryApi for BffClient {
    fn host_path(&self) -> &HostPath {
        &self.host_path
    }

    fn namespaces(&self) -> &NamespaceSelection {
        &self.namespaces
    }

    async fn get_user(&self, opts: &ApiOptions) -> Result<UserInfo, ApiError> {
        let body = self.rest.get(&self.bff_path("user"), &[], opts).await?;
        parse_envelope(body)
    }

    async fn get_namespaces(&self, opts: &ApiOptions) -> Result<Vec<Namespace>, ApiError> {
        let body = self.rest.get(&self.bff_path("namespaces"), &[], opts).await?;
        parse_envelope(body)
    }

    async fn get_app(&self, sub_path: &str, opts: &ApiOptions) -> Result<Value, ApiError> {
        let query = self.namespaces.query_pairs();
        let body = self
            .rest
            .get(&self.host_path.join(sub_path), &query, opts)
            .await?;
        parse_envelope(body)
    }
}

/// Factory for [`BffClient`]s against one BFF origin.
///
/// The underlying connection pool is shared; every `build` returns a new
/// client.
#[derive(Debug, Clone)]
pub struct BffClientFactory {
    rest: RestClient,
    endpoint: EndpointConfig,
}

impl BffClientFactory {
    pub fn new(base_url: &str, endpoint: EndpointConfig) -> Result<Self, ApiError> {
        let http = build_http_client()?;
        Ok(Self {
            rest: RestClient::new(http, base_url),
            endpoint,
        })
    }

    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }
}

#[async_trait]
impl ClientFactory for BffClientFactory {
    async fn build(&self, host_path: HostPath, namespaces: NamespaceSelection) -> ClientHandle {
        Arc::new(BffClient::new(
            self.rest.clone(),
            self.endpoint.clone(),
            host_path,
            namespaces,
        ))
    }
}
