use std::fmt::Debug;

use dictach_store::{ResourceStore, StoreError};
use dictach_types::{Dictionary, DictionaryId, Word, WordId};

/// Identifies one remote resource and knows how to fetch it
#[async_trait::async_trait]
pub trait ResourceKey: Clone + Debug + Send + Sync + 'static {
    type Resource: Clone + Send + Sync + 'static;

    async fn fetch(&self, store: &dyn ResourceStore) -> Result<Self::Resource, StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryKey(pub DictionaryId);

/// Fixed for the whole lifetime of a word screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordKey {
    pub dictionary_id: DictionaryId,
    pub word_id: WordId,
}

#[async_trait::async_trait]
impl ResourceKey for DictionaryKey {
    type Resource = Dictionary;

    async fn fetch(&self, store: &dyn ResourceStore) -> Result<Dictionary, StoreError> {
        store.fetch_dictionary(self.0).await
    }
}

#[async_trait::async_trait]
impl ResourceKey for WordKey {
    type Resource = Word;

    async fn fetch(&self, store: &dyn ResourceStore) -> Result<Word, StoreError> {
        store.fetch_word(self.dictionary_id, self.word_id).await
    }
}
