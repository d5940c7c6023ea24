/// Where a screen is in its fetch lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No data yet, fetch in flight
    #[default]
    Loading,
    /// No data, the last fetch failed. Rendered like `Loading` plus an error.
    Failed,
    /// Data present, nothing in flight
    Ready,
    /// Data present, fetch in flight
    Refreshing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Initial fetch issued by the host attaching the screen
    Mount,
    /// User pulled to refresh. Single-flight.
    Refresh,
    /// Cascade-triggered refetch. Supersedes whatever is in flight.
    Reload,
    Loaded,
    Failed,
}

impl Phase {
    /// Pure transition table. `None` means the event is rejected and must
    /// not issue a fetch.
    pub fn next(self, transition: Transition) -> Option<Phase> {
        use Phase::*;

        match (self, transition) {
            (Loading | Failed, Transition::Mount) => Some(Loading),
            (Ready | Refreshing, Transition::Mount) => None,

            (Ready, Transition::Refresh) => Some(Refreshing),
            (Failed, Transition::Refresh) => Some(Loading),
            (Loading | Refreshing, Transition::Refresh) => None,

            (Loading | Failed, Transition::Reload) => Some(Loading),
            (Ready | Refreshing, Transition::Reload) => Some(Refreshing),

            (_, Transition::Loaded) => Some(Ready),

            (Loading | Failed, Transition::Failed) => Some(Failed),
            // Keep showing the stale data
            (Ready | Refreshing, Transition::Failed) => Some(Ready),
        }
    }

    /// True while the loading view is shown
    pub fn is_loading(self) -> bool {
        matches!(self, Phase::Loading | Phase::Failed)
    }

    pub fn has_data(self) -> bool {
        matches!(self, Phase::Ready | Phase::Refreshing)
    }
}
