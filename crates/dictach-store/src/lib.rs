mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use dictach_types::{Dictionary, DictionaryId, Word, WordId, WordPatch};

/// Single writable owner of dictionary and word data.
///
/// Screens only ever hold snapshots returned by the fetch calls; every
/// mutation goes through `update_word` / `destroy_word`.
#[async_trait::async_trait]
pub trait ResourceStore: Send + Sync {
    /// Fetch the current snapshot of a dictionary
    async fn fetch_dictionary(&self, id: DictionaryId) -> Result<Dictionary, StoreError>;

    /// Fetch the current snapshot of a word inside its dictionary
    async fn fetch_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<Word, StoreError>;

    /// Persist an edit. Resolves once the store has accepted it.
    async fn update_word(
        &self,
        dictionary_id: DictionaryId,
        patch: WordPatch,
    ) -> Result<(), StoreError>;

    /// Remove a word. Resolves once it is gone from the store.
    async fn destroy_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
