//! Application context
//!
//! Owns the [`ApiState`] for one application scope and re-resolves it when
//! the application name or the namespace selection changes, or when a
//! consumer asks for a refresh. Consumers get read-only snapshots through
//! [`ContextValue`] or a `watch` receiver and request recomputation through
//! a [`Refresher`]; only the context writes the state.
//!
//! Every resolution takes a generation number when it starts. A result is
//! committed only if no newer resolution has started in the meantime, so a
//! slow resolution for superseded inputs can never overwrite a newer one.

use crate::api::ClientFactory;
use crate::endpoint::{EndpointConfig, HostPath};
use crate::namespace::NamespaceSelection;
use crate::state::{compute_state, ApiState};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Outcome of a resolution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The computed state was published.
    Committed { generation: u64 },
    /// A newer resolution started first; the result was dropped.
    Superseded { generation: u64 },
    /// Inputs were equal to the current ones; nothing was recomputed.
    Unchanged,
    /// The context is gone.
    Detached,
}

impl Resolution {
    pub fn is_committed(&self) -> bool {
        matches!(self, Resolution::Committed { .. })
    }
}

struct Inputs {
    application: Option<String>,
    namespaces: NamespaceSelection,
    generation: u64,
    closed: bool,
}

struct ContextInner {
    endpoint: EndpointConfig,
    factory: Arc<dyn ClientFactory>,
    inputs: Mutex<Inputs>,
    state: watch::Sender<Arc<ApiState>>,
    refresher: Refresher,
}

impl ContextInner {
    async fn resolve(&self) -> Resolution {
        let (generation, host_path, namespaces) = {
            let mut inputs = self.inputs.lock();
            if inputs.closed {
                return Resolution::Detached;
            }
            inputs.generation += 1;
            (
                inputs.generation,
                self.endpoint.resolve(inputs.application.as_deref()),
                inputs.namespaces.clone(),
            )
        };
        debug!(
            generation,
            host_path = host_path.as_ref().map(HostPath::as_str),
            namespaces = %namespaces,
            "Resolving API state"
        );

        let state = compute_state(self.factory.as_ref(), host_path, &namespaces).await;
        self.commit(generation, state)
    }

    fn commit(&self, generation: u64, state: ApiState) -> Resolution {
        // Held across the check and the publish so a newer resolution cannot
        // start and finish in between.
        let inputs = self.inputs.lock();
        if inputs.closed {
            debug!(generation, "Context closed; discarding API state");
            return Resolution::Detached;
        }
        if inputs.generation != generation {
            debug!(
                generation,
                current = inputs.generation,
                "Discarding superseded API state"
            );
            return Resolution::Superseded { generation };
        }
        debug!(generation, available = state.is_available(), "API state committed");
        self.state.send_replace(Arc::new(state));
        Resolution::Committed { generation }
    }
}

/// Stable handle consumers use to request a recomputation.
///
/// Every clone refers to the same context; [`Refresher::ptr_eq`] compares
/// identity. A refresher outliving its context does nothing.
#[derive(Clone)]
pub struct Refresher {
    inner: Weak<ContextInner>,
}

impl Refresher {
    fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn ptr_eq(&self, other: &Refresher) -> bool {
        Weak::ptr_eq(&self.inner, &other.inner)
    }

    /// Recompute with the current inputs and wait for the outcome.
    pub async fn refresh_now(&self) -> Resolution {
        match self.inner.upgrade() {
            Some(inner) => inner.resolve().await,
            None => Resolution::Detached,
        }
    }

    /// Fire-and-forget recomputation on the current tokio runtime.
    pub fn refresh(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    inner.resolve().await;
                });
            }
            Err(e) => warn!(error = %e, "Refresh requested outside of a tokio runtime"),
        }
    }
}

impl std::fmt::Debug for Refresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refresher")
            .field("attached", &(self.inner.strong_count() > 0))
            .finish()
    }
}

/// The `{ api_state, refresh }` pair handed to consumers.
///
/// Two values taken while nothing changed share the same state allocation
/// and the same refresher, so [`ContextValue::ptr_eq`] holds between them.
#[derive(Clone, Debug)]
pub struct ContextValue {
    pub api_state: Arc<ApiState>,
    pub refresh: Refresher,
}

impl ContextValue {
    /// Value seen outside of any context: unavailable, refresh is a no-op.
    pub fn detached() -> Self {
        Self {
            api_state: Arc::new(ApiState::unconfigured()),
            refresh: Refresher::detached(),
        }
    }

    pub fn ptr_eq(&self, other: &ContextValue) -> bool {
        Arc::ptr_eq(&self.api_state, &other.api_state) && self.refresh.ptr_eq(&other.refresh)
    }
}

impl Default for ContextValue {
    fn default() -> Self {
        Self::detached()
    }
}

/// Owner of the API state for one application scope.
///
/// Dropping the context discards any resolution still in flight.
pub struct AppContext {
    inner: Arc<ContextInner>,
}

impl AppContext {
    /// Create a context in the initial `{ available: false }` state without
    /// resolving anything yet.
    pub fn new(
        application: Option<String>,
        namespaces: NamespaceSelection,
        endpoint: EndpointConfig,
        factory: Arc<dyn ClientFactory>,
    ) -> Self {
        let (state, _) = watch::channel(Arc::new(ApiState::unconfigured()));
        let inner = Arc::new_cyclic(|weak| ContextInner {
            endpoint,
            factory,
            inputs: Mutex::new(Inputs {
                application,
                namespaces,
                generation: 0,
                closed: false,
            }),
            state,
            refresher: Refresher {
                inner: weak.clone(),
            },
        });
        Self { inner }
    }

    /// Create a context and run the initial resolution.
    pub async fn mount(
        application: Option<String>,
        namespaces: NamespaceSelection,
        endpoint: EndpointConfig,
        factory: Arc<dyn ClientFactory>,
    ) -> Self {
        let context = Self::new(application, namespaces, endpoint, factory);
        context.inner.resolve().await;
        context
    }

    pub fn application(&self) -> Option<String> {
        self.inner.inputs.lock().application.clone()
    }

    pub fn namespaces(&self) -> NamespaceSelection {
        self.inner.inputs.lock().namespaces.clone()
    }

    /// Host path for the current inputs.
    pub fn host_path(&self) -> Option<HostPath> {
        let inputs = self.inner.inputs.lock();
        self.inner.endpoint.resolve(inputs.application.as_deref())
    }

    /// Latest committed state.
    pub fn api_state(&self) -> Arc<ApiState> {
        self.inner.state.borrow().clone()
    }

    pub fn value(&self) -> ContextValue {
        ContextValue {
            api_state: self.api_state(),
            refresh: self.inner.refresher.clone(),
        }
    }

    pub fn refresher(&self) -> Refresher {
        self.inner.refresher.clone()
    }

    /// Receiver notified on every committed state.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ApiState>> {
        self.inner.state.subscribe()
    }

    /// Switch the application. Re-resolves only when the name changed.
    pub async fn set_application(&self, application: Option<String>) -> Resolution {
        {
            let mut inputs = self.inner.inputs.lock();
            if inputs.application == application {
                return Resolution::Unchanged;
            }
            inputs.application = application;
        }
        self.inner.resolve().await
    }

    /// Switch the namespace selection. Re-resolves only when it changed.
    pub async fn set_namespaces(&self, namespaces: NamespaceSelection) -> Resolution {
        {
            let mut inputs = self.inner.inputs.lock();
            if inputs.namespaces == namespaces {
                return Resolution::Unchanged;
            }
            inputs.namespaces = namespaces;
        }
        self.inner.resolve().await
    }

    /// Recompute with the current inputs.
    pub async fn refresh(&self) -> Resolution {
        self.inner.resolve().await
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        let mut inputs = self.inner.inputs.lock();
        inputs.closed = true;
        inputs.generation += 1;
    }
}
