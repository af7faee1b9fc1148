//! API availability state
//!
//! `available` is a readiness flag: it says a client exists for the current
//! host path, not that the BFF is reachable. Request failures surface from
//! the individual client calls.

use crate::api::{ClientFactory, ClientHandle};
use crate::endpoint::HostPath;
use crate::error::ApiError;
use crate::namespace::NamespaceSelection;
use std::fmt;
use std::sync::Arc;

/// `{ available, client }` pair. `available` holds iff a client is present.
#[derive(Clone, Default)]
pub struct ApiState {
    client: Option<ClientHandle>,
}

impl ApiState {
    /// No application configured.
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    pub fn ready(client: ClientHandle) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    pub fn client(&self) -> Option<&ClientHandle> {
        self.client.as_ref()
    }

    /// Client or [`ApiError::Unavailable`] for callers that need one.
    pub fn require_client(&self) -> Result<&ClientHandle, ApiError> {
        self.client
            .as_ref()
            .ok_or_else(|| ApiError::Unavailable("no application endpoint configured".to_string()))
    }

    pub fn host_path(&self) -> Option<&HostPath> {
        self.client.as_ref().map(|client| client.host_path())
    }

    /// Same availability and same client instance.
    pub fn same_client(&self, other: &ApiState) -> bool {
        match (&self.client, &other.client) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ApiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiState")
            .field("available", &self.is_available())
            .field("host_path", &self.host_path())
            .finish()
    }
}

/// Compute the state for a resolved host path. `None` yields the
/// unconfigured state without building anything.
pub async fn compute_state(
    factory: &dyn ClientFactory,
    host_path: Option<HostPath>,
    namespaces: &NamespaceSelection,
) -> ApiState {
    match host_path {
        None => ApiState::unconfigured(),
        Some(host_path) => ApiState::ready(factory.build(host_path, namespaces.clone()).await),
    }
}
