//! Data provider - shared launch data and filter state
//!
//! The provider owns the fetch lifecycle. Views never touch its state
//! directly: they resolve the current provider with [`use_api`] while
//! inside [`ApiProvider::provide`], read what they need, and request
//! changes through [`ApiHandle::handle_filter_change`].
//!
//! Every filter change spawns one fetch task. Tasks are not sequenced or
//! cancelled, so when two overlap the one that *completes* last decides
//! what is stored.

use super::client::LaunchClient;
use super::error::{ContextError, FetchError};
use super::filters::{FilterChange, Filters};
use super::models::Launch;
use crate::config::Config;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Provider events are only redraw hints; a full channel drops them
const EVENT_BUFFER: usize = 64;

tokio::task_local! {
    static API_CONTEXT: ApiHandle;
}

/// Everything the provider exposes to views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiState {
    pub launch_data: Vec<Launch>,
    pub filters: Filters,
}

/// Outcome of a finished fetch, sent to the UI loop
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    Loaded { count: usize },
    Failed { message: String },
}

/// Cloneable handle onto the provider's shared state
#[derive(Debug, Clone)]
pub struct ApiHandle {
    state: Arc<Mutex<ApiState>>,
    in_flight: Arc<AtomicUsize>,
    client: LaunchClient,
    events: mpsc::Sender<ProviderEvent>,
}

impl ApiHandle {
    fn lock(&self) -> MutexGuard<'_, ApiState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current result set
    pub fn launch_data(&self) -> Vec<Launch> {
        self.lock().launch_data.clone()
    }

    /// Current filter state
    pub fn filters(&self) -> Filters {
        self.lock().filters.clone()
    }

    /// Result set and filters read under one lock
    pub fn snapshot(&self) -> ApiState {
        self.lock().clone()
    }

    /// Number of fetches started but not yet resolved
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    /// Merge one filter change and refetch with the new criteria
    ///
    /// Returns the spawned fetch task; callers in the UI drop it, tests and
    /// the headless command await it.
    pub fn handle_filter_change(&self, change: FilterChange) -> JoinHandle<()> {
        let filters = {
            let mut state = self.lock();
            state.filters = state.filters.merged(change.clone());
            state.filters.clone()
        };

        tracing::info!("Filter changed: {} (now: {})", change, filters.summary());
        self.spawn_fetch(filters)
    }

    /// Refetch with the current filters
    pub fn refresh(&self) -> JoinHandle<()> {
        let filters = self.filters();
        self.spawn_fetch(filters)
    }

    fn spawn_fetch(&self, filters: Filters) -> JoinHandle<()> {
        let handle = self.clone();
        // Counted before spawning so is_loading() is true immediately
        handle.in_flight.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(async move {
            let result = handle.client.fetch_launches(&filters).await;
            handle.apply(result);
            handle.in_flight.fetch_sub(1, Ordering::SeqCst);
        })
    }

    /// Store a fetch result: success replaces the data, failure keeps it
    fn apply(&self, result: Result<Vec<Launch>, FetchError>) {
        let event = match result {
            Ok(launches) => {
                let count = launches.len();
                self.lock().launch_data = launches;
                tracing::info!("Loaded {} launches", count);
                ProviderEvent::Loaded { count }
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                ProviderEvent::Failed {
                    message: e.to_string(),
                }
            }
        };

        // Use try_send to avoid blocking if the UI is behind
        let _ = self.events.try_send(event);
    }
}

/// Owner of the shared launch state
///
/// Construct once, [`mount`](Self::mount) to issue the initial fetch, then
/// wrap any code that needs the state in [`provide`](Self::provide).
pub struct ApiProvider {
    handle: ApiHandle,
}

impl ApiProvider {
    /// Create a provider with unset filters and an empty result set
    ///
    /// The returned receiver yields one [`ProviderEvent`] per resolved fetch.
    pub fn new(config: &Config) -> Result<(Self, mpsc::Receiver<ProviderEvent>), FetchError> {
        let (events, events_rx) = mpsc::channel(EVENT_BUFFER);
        let handle = ApiHandle {
            state: Arc::new(Mutex::new(ApiState::default())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            client: LaunchClient::new(config)?,
            events,
        };

        Ok((Self { handle }, events_rx))
    }

    /// Issue the initial fetch (no filters set yet)
    pub fn mount(&self) -> JoinHandle<()> {
        tracing::debug!("Provider mounted, fetching initial launches");
        self.handle.refresh()
    }

    /// Run `f` with this provider in scope for [`use_api`]
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        API_CONTEXT.sync_scope(self.handle.clone(), f)
    }

    /// Async counterpart of [`provide`](Self::provide)
    pub async fn provide_async<F: Future>(&self, fut: F) -> F::Output {
        API_CONTEXT.scope(self.handle.clone(), fut).await
    }
}

/// Resolve the enclosing provider
///
/// Fails with [`ContextError::OutsideProvider`] when called outside
/// [`ApiProvider::provide`] / [`ApiProvider::provide_async`].
pub fn use_api() -> Result<ApiHandle, ContextError> {
    API_CONTEXT
        .try_with(ApiHandle::clone)
        .map_err(|_| ContextError::OutsideProvider)
}
