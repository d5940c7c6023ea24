use serde::{Deserialize, Serialize};

fn default_word_form_id() -> String {
    "dictach.modal.wordForm".to_string()
}

fn default_edit_form_title() -> String {
    "Edit Word".to_string()
}

fn default_empty_descriptions() -> String {
    "You don`t have any descriptions yet".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Modal id of the word form
    #[serde(default = "default_word_form_id")]
    pub word_form_id: String,
    #[serde(default = "default_edit_form_title")]
    pub edit_form_title: String,
    /// Placeholder shown when a word has no descriptions
    #[serde(default = "default_empty_descriptions")]
    pub empty_descriptions: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            word_form_id: default_word_form_id(),
            edit_form_title: default_edit_form_title(),
            empty_descriptions: default_empty_descriptions(),
        }
    }
}
