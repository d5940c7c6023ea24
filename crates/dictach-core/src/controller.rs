use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dictach_store::ResourceStore;
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;
use crate::lifecycle::{Phase, Transition};
use crate::resource::ResourceKey;
use crate::view::ScreenView;

/// What happened to one fetch request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Resource applied and the continuation ran
    Loaded,
    /// Fetch rejected; error stored on the screen
    Failed(FetchError),
    /// Rejected by the lifecycle guard, nothing was fetched
    Skipped,
    /// A later fetch started before this one completed; result dropped
    Superseded,
    /// Screen detached before completion; result dropped
    Detached,
}

/// Read-only copy of a screen's state
#[derive(Debug, Clone)]
pub struct ScreenSnapshot<R> {
    pub phase: Phase,
    pub resource: Option<R>,
    pub last_error: Option<FetchError>,
}

struct ScreenState<R> {
    phase: Phase,
    mounted: bool,
    /// Bumped on every issued fetch; only the latest may apply its result
    generation: u64,
    resource: Option<R>,
    last_error: Option<FetchError>,
}

/// Drives fetch on mount, guarded refresh and detach for one resource.
///
/// Cheap to clone: clones share state, so a pending completion and a new
/// request from the host can both refer to the same screen.
pub struct ScreenController<K: ResourceKey> {
    key: K,
    store: Arc<dyn ResourceStore>,
    state: Arc<Mutex<ScreenState<K::Resource>>>,
    cancel: CancellationToken,
}

impl<K: ResourceKey> Clone for ScreenController<K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            store: self.store.clone(),
            state: self.state.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<K: ResourceKey> ScreenController<K> {
    pub fn new(key: K, store: Arc<dyn ResourceStore>) -> Self {
        Self {
            key,
            store,
            state: Arc::new(Mutex::new(ScreenState {
                phase: Phase::Loading,
                mounted: false,
                generation: 0,
                resource: None,
                last_error: None,
            })),
            cancel: CancellationToken::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    fn lock(&self) -> MutexGuard<'_, ScreenState<K::Resource>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Initial fetch. Only the first call issues a request.
    pub async fn on_mount<F>(&self, on_loaded: F) -> FetchOutcome
    where
        F: FnOnce(&K::Resource),
    {
        self.run(Transition::Mount, on_loaded).await
    }

    /// Pull-to-refresh. No-op while another fetch is in flight.
    pub async fn on_refresh<F>(&self, then: F) -> FetchOutcome
    where
        F: FnOnce(&K::Resource),
    {
        self.run(Transition::Refresh, then).await
    }

    /// Refetch after a mutation elsewhere. Supersedes an in-flight fetch.
    pub async fn reload<F>(&self, then: F) -> FetchOutcome
    where
        F: FnOnce(&K::Resource),
    {
        self.run(Transition::Reload, then).await
    }

    /// Screen went away. Pending completions become no-ops.
    pub fn on_detach(&self) {
        tracing::debug!(key = ?self.key, "screen detached");
        self.cancel.cancel();
    }

    pub fn is_detached(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn resource(&self) -> Option<K::Resource> {
        self.lock().resource.clone()
    }

    pub fn last_error(&self) -> Option<FetchError> {
        self.lock().last_error.clone()
    }

    pub fn snapshot(&self) -> ScreenSnapshot<K::Resource> {
        let state = self.lock();
        ScreenSnapshot {
            phase: state.phase,
            resource: state.resource.clone(),
            last_error: state.last_error.clone(),
        }
    }

    /// Project the current state into a view. Pure with respect to the snapshot.
    pub fn render<V>(&self, project: impl FnOnce(&K::Resource) -> V) -> ScreenView<V> {
        let state = self.lock();
        match (&state.resource, state.phase) {
            (Some(resource), phase) if phase.has_data() => ScreenView::Content {
                body: project(resource),
                refreshing: phase == Phase::Refreshing,
                error: state.last_error.clone(),
            },
            _ => ScreenView::Loading {
                error: state.last_error.clone(),
            },
        }
    }

    /// Apply `transition` and hand out a fetch ticket, or refuse
    fn begin(&self, transition: Transition) -> Option<u64> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let mut state = self.lock();
        if transition == Transition::Mount {
            if state.mounted {
                return None;
            }
            state.mounted = true;
        }

        let next = state.phase.next(transition)?;
        tracing::debug!(key = ?self.key, from = ?state.phase, to = ?next, ?transition, "screen transition");
        state.phase = next;
        state.generation += 1;
        Some(state.generation)
    }

    async fn run<F>(&self, transition: Transition, then: F) -> FetchOutcome
    where
        F: FnOnce(&K::Resource),
    {
        let Some(ticket) = self.begin(transition) else {
            tracing::debug!(key = ?self.key, ?transition, "fetch skipped");
            return FetchOutcome::Skipped;
        };

        let result = tokio::select! {
            _ = self.cancel.cancelled() => return FetchOutcome::Detached,
            result = self.key.fetch(self.store.as_ref()) => result.map_err(FetchError::from),
        };

        self.complete(ticket, result, then)
    }

    fn complete<F>(
        &self,
        ticket: u64,
        result: Result<K::Resource, FetchError>,
        then: F,
    ) -> FetchOutcome
    where
        F: FnOnce(&K::Resource),
    {
        let mut state = self.lock();

        if self.cancel.is_cancelled() {
            return FetchOutcome::Detached;
        }
        if ticket != state.generation {
            tracing::debug!(key = ?self.key, ticket, latest = state.generation, "stale fetch dropped");
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(resource) => {
                state.phase = state.phase.next(Transition::Loaded).unwrap_or(Phase::Ready);
                state.resource = Some(resource.clone());
                state.last_error = None;
                drop(state);

                then(&resource);
                FetchOutcome::Loaded
            }
            Err(err) => {
                tracing::warn!(key = ?self.key, "fetch failed: {err}");
                state.phase = state.phase.next(Transition::Failed).unwrap_or(Phase::Failed);
                state.last_error = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }
}
