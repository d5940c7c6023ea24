use std::time::Duration;

use dictach_types::{Dictionary, DictionaryId, Word, WordId, WordPatch};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ResourceStore, StoreError};

/// REST client for the dictionaries API
#[derive(Clone)]
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn dictionary_url(&self, id: DictionaryId) -> String {
        format!("{}/dictionaries/{}", self.base_url, id)
    }

    fn word_url(&self, dictionary_id: DictionaryId, word_id: WordId) -> String {
        format!("{}/words/{}", self.dictionary_url(dictionary_id), word_id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T, StoreError> {
        tracing::debug!("GET {url}");
        let response = check_status(self.client.get(url).send().await?, what).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::InvalidResponse(format!("{what}: {e}")))
    }
}

/// Map non-2xx responses onto store errors
async fn check_status(response: Response, what: &str) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(StoreError::NotFound(what.to_string()));
    }

    let message = response.text().await.unwrap_or_default();
    Err(StoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait::async_trait]
impl ResourceStore for HttpStore {
    async fn fetch_dictionary(&self, id: DictionaryId) -> Result<Dictionary, StoreError> {
        let what = format!("dictionary {id}");
        self.get_json(&self.dictionary_url(id), &what).await
    }

    async fn fetch_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<Word, StoreError> {
        let what = format!("word {word_id} in dictionary {dictionary_id}");
        let mut word: Word = self
            .get_json(&self.word_url(dictionary_id, word_id), &what)
            .await?;

        // The API does not always echo the owner back
        word.dictionary_id = dictionary_id;
        Ok(word)
    }

    async fn update_word(
        &self,
        dictionary_id: DictionaryId,
        patch: WordPatch,
    ) -> Result<(), StoreError> {
        let url = self.word_url(dictionary_id, patch.id);
        let what = format!("word {} in dictionary {dictionary_id}", patch.id);
        tracing::debug!("PATCH {url}");

        let response = self.client.patch(&url).json(&patch).send().await?;
        check_status(response, &what).await?;
        Ok(())
    }

    async fn destroy_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<(), StoreError> {
        let url = self.word_url(dictionary_id, word_id);
        let what = format!("word {word_id} in dictionary {dictionary_id}");
        tracing::debug!("DELETE {url}");

        let response = self.client.delete(&url).send().await?;
        check_status(response, &what).await?;
        Ok(())
    }
}
