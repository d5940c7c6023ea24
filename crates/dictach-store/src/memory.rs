use std::collections::HashMap;

use dictach_types::{Dictionary, DictionaryId, Word, WordId, WordPatch, WordSummary};
use tokio::sync::RwLock;

use crate::{ResourceStore, StoreError};

#[derive(Default)]
struct Tables {
    dictionaries: HashMap<DictionaryId, Dictionary>,
    words: HashMap<(DictionaryId, WordId), Word>,
}

/// In-process store, used for demos and as a backing store in tests
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a dictionary. Its word list is rebuilt from the inserted words.
    pub async fn insert_dictionary(&self, mut dictionary: Dictionary) {
        let mut tables = self.tables.write().await;
        dictionary.words.clear();
        tables.dictionaries.insert(dictionary.id, dictionary);
    }

    /// Seed a word under its `dictionary_id`
    pub async fn insert_word(&self, word: Word) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let dictionary = tables
            .dictionaries
            .get_mut(&word.dictionary_id)
            .ok_or_else(|| StoreError::NotFound(format!("dictionary {}", word.dictionary_id)))?;

        dictionary.words.retain(|w| w.id != word.id);
        dictionary.words.push(WordSummary {
            id: word.id,
            title: word.title.clone(),
        });
        tables.words.insert((word.dictionary_id, word.id), word);
        Ok(())
    }
}

fn word_not_found(dictionary_id: DictionaryId, word_id: WordId) -> StoreError {
    StoreError::NotFound(format!("word {word_id} in dictionary {dictionary_id}"))
}

#[async_trait::async_trait]
impl ResourceStore for MemoryStore {
    async fn fetch_dictionary(&self, id: DictionaryId) -> Result<Dictionary, StoreError> {
        let tables = self.tables.read().await;
        tables
            .dictionaries
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("dictionary {id}")))
    }

    async fn fetch_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<Word, StoreError> {
        let tables = self.tables.read().await;
        tables
            .words
            .get(&(dictionary_id, word_id))
            .cloned()
            .ok_or_else(|| word_not_found(dictionary_id, word_id))
    }

    async fn update_word(
        &self,
        dictionary_id: DictionaryId,
        patch: WordPatch,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let word_id = patch.id;
        let title = patch.title.clone();

        let word = tables
            .words
            .get_mut(&(dictionary_id, word_id))
            .ok_or_else(|| word_not_found(dictionary_id, word_id))?;
        word.apply(patch);

        if let Some(dictionary) = tables.dictionaries.get_mut(&dictionary_id) {
            for summary in dictionary.words.iter_mut().filter(|w| w.id == word_id) {
                summary.title = title.clone();
            }
        }

        tracing::debug!("Updated word {word_id} in dictionary {dictionary_id}");
        Ok(())
    }

    async fn destroy_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .words
            .remove(&(dictionary_id, word_id))
            .ok_or_else(|| word_not_found(dictionary_id, word_id))?;

        if let Some(dictionary) = tables.dictionaries.get_mut(&dictionary_id) {
            dictionary.words.retain(|w| w.id != word_id);
        }

        tracing::debug!("Destroyed word {word_id} in dictionary {dictionary_id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use dictach_types::{Description, DescriptionId, WordDraft};

    use super::*;

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_dictionary(Dictionary {
                id: DictionaryId(3),
                title: "Spanish".to_string(),
                language: "es".to_string(),
                alphabeth: vec!["a".to_string(), "h".to_string()],
                tags: BTreeSet::new(),
                words: vec![],
            })
            .await;
        store
            .insert_word(Word {
                id: WordId(7),
                dictionary_id: DictionaryId(3),
                title: "Hola".to_string(),
                descriptions: vec![Description {
                    id: DescriptionId(1),
                    text: "hello".to_string(),
                }],
            })
            .await
            .expect("dictionary exists");
        store
    }

    #[tokio::test]
    async fn test_destroy_removes_word_from_dictionary_listing() {
        let store = seeded().await;

        store
            .destroy_word(DictionaryId(3), WordId(7))
            .await
            .expect("word exists");

        let dictionary = store.fetch_dictionary(DictionaryId(3)).await.unwrap();
        assert!(dictionary.words.is_empty());
        assert!(matches!(
            store.fetch_word(DictionaryId(3), WordId(7)).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_renames_summary() {
        let store = seeded().await;
        let patch = WordPatch::new(
            WordId(7),
            WordDraft {
                title: "Adios".to_string(),
                descriptions: vec![],
            },
        );

        store.update_word(DictionaryId(3), patch).await.unwrap();

        let word = store.fetch_word(DictionaryId(3), WordId(7)).await.unwrap();
        assert_eq!(word.title, "Adios");
        assert!(word.descriptions.is_empty());

        let dictionary = store.fetch_dictionary(DictionaryId(3)).await.unwrap();
        assert_eq!(dictionary.words[0].title, "Adios");
    }

    #[tokio::test]
    async fn test_update_unknown_word_is_not_found() {
        let store = seeded().await;
        let patch = WordPatch::new(WordId(99), WordDraft::default());

        let result = store.update_word(DictionaryId(3), patch).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
