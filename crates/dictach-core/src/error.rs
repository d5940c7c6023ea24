use dictach_store::StoreError;

/// Initial or refresh fetch failed. Kept in screen state, hence `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Fetch failed: {0}")]
    Store(String),
}

impl From<StoreError> for FetchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => FetchError::NotFound(what),
            other => FetchError::Store(other.to_string()),
        }
    }
}

/// Edit or delete was not accepted by the store. No cascade effects ran.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("Failed to update word: {0}")]
    Update(#[source] StoreError),

    #[error("Failed to delete word: {0}")]
    Destroy(#[source] StoreError),
}

/// Chrome update failed. Logged, never blocks data flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Navigation channel closed")]
    Closed,

    #[error("Navigation queue is full")]
    Full,

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
}
