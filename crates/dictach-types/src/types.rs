use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptionId(pub u64);

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dictionary as served by the store. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    pub id: DictionaryId,
    pub title: String,
    pub language: String,
    /// Ordered letters; defines how the word list is grouped
    pub alphabeth: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Word headers, when the store sends them along with the dictionary
    #[serde(default)]
    pub words: Vec<WordSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSummary {
    pub id: WordId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: WordId,
    /// Owning dictionary; only used for lookups and refresh routing
    #[serde(default)]
    pub dictionary_id: DictionaryId,
    pub title: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub id: DescriptionId,
    pub text: String,
}

/// Values submitted by the word form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordDraft {
    pub title: String,
    pub descriptions: Vec<Description>,
}

/// Update payload for a word. Always carries the word id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPatch {
    pub id: WordId,
    pub title: String,
    pub descriptions: Vec<Description>,
}

impl WordPatch {
    pub fn new(id: WordId, draft: WordDraft) -> Self {
        Self {
            id,
            title: draft.title,
            descriptions: draft.descriptions,
        }
    }
}

impl Word {
    /// Form values for editing this word
    pub fn draft(&self) -> WordDraft {
        WordDraft {
            title: self.title.clone(),
            descriptions: self.descriptions.clone(),
        }
    }

    pub fn apply(&mut self, patch: WordPatch) {
        self.title = patch.title;
        self.descriptions = patch.descriptions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_deserializes_camel_case_back_reference() {
        let json = r#"{"id":7,"dictionaryId":3,"title":"Hola","descriptions":[{"id":1,"text":"hello"}]}"#;
        let word: Word = serde_json::from_str(json).expect("valid word json");

        assert_eq!(word.id, WordId(7));
        assert_eq!(word.dictionary_id, DictionaryId(3));
        assert_eq!(word.descriptions.len(), 1);
    }

    #[test]
    fn test_dictionary_defaults_missing_tags_and_words() {
        let json = r#"{"id":1,"title":"Spanish","language":"es","alphabeth":["a","b"]}"#;
        let dictionary: Dictionary = serde_json::from_str(json).expect("valid dictionary json");

        assert!(dictionary.tags.is_empty());
        assert!(dictionary.words.is_empty());
        assert_eq!(dictionary.alphabeth, vec!["a", "b"]);
    }

    #[test]
    fn test_patch_keeps_word_id() {
        let draft = WordDraft {
            title: "Adios".to_string(),
            descriptions: vec![],
        };
        let patch = WordPatch::new(WordId(7), draft);
        let value = serde_json::to_value(&patch).expect("serializable patch");

        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Adios");
    }
}
