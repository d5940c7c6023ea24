use std::sync::Arc;

use dictach_types::{Dictionary, Word};

use crate::navigation::{NavigationPort, ScreenId};

/// Title of the dictionary screen
pub fn dictionary_title(dictionary: &Dictionary) -> String {
    dictionary.title.clone()
}

/// Title of the word screen, e.g. `"Spanish / Hola"`
pub fn word_title(dictionary_title: &str, word: &Word) -> String {
    format!("{} / {}", dictionary_title, word.title)
}

/// Pushes derived titles to one screen's title bar
#[derive(Clone)]
pub struct TitleSync {
    screen: ScreenId,
    nav: Arc<dyn NavigationPort>,
}

impl TitleSync {
    pub fn new(screen: ScreenId, nav: Arc<dyn NavigationPort>) -> Self {
        Self { screen, nav }
    }

    pub fn push(&self, text: &str) {
        tracing::debug!(screen = %self.screen, "title -> {text}");
        if let Err(e) = self.nav.set_title(&self.screen, text) {
            tracing::warn!(screen = %self.screen, "failed to set title: {e}");
        }
    }
}
