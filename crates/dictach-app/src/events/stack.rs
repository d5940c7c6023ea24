use std::sync::Arc;

use dictach_core::view::{DictionaryView, WordView};
use dictach_core::{
    DictionaryScreen, FetchOutcome, NavigationPort, ScreenId, ScreenView, WordScreen,
    WordScreenOptions,
};
use dictach_store::ResourceStore;
use dictach_types::{DictionaryId, WordId};

/// Word screen on top of the stack plus the modals it has open
pub struct WordEntry {
    pub screen: WordScreen,
    pub form_open: bool,
    pub confirm_pending: bool,
}

/// Dictionary screen at the bottom, at most one word screen above it
pub struct ScreenStack {
    pub dictionary: DictionaryScreen,
    pub word: Option<WordEntry>,
    options: WordScreenOptions,
}

impl ScreenStack {
    pub fn new(
        dictionary_id: DictionaryId,
        store: Arc<dyn ResourceStore>,
        nav: Arc<dyn NavigationPort>,
        options: WordScreenOptions,
    ) -> Self {
        let screen_id = ScreenId::new(format!("dictionary-{dictionary_id}"));
        Self {
            dictionary: DictionaryScreen::open(screen_id, dictionary_id, store, nav),
            word: None,
            options,
        }
    }

    pub async fn mount_dictionary(&self) {
        let outcome = self.dictionary.on_mount().await;
        log_outcome(self.dictionary.id(), &outcome);
        self.show();
    }

    pub async fn open_word(&mut self, word_id: WordId) {
        if let Some(previous) = self.word.take() {
            previous.screen.on_detach();
        }

        let screen_id = ScreenId::new(format!(
            "word-{}-{}",
            self.dictionary.dictionary_id(),
            word_id
        ));
        let screen = self
            .dictionary
            .open_word(screen_id, word_id, self.options.clone());

        let outcome = screen.on_mount().await;
        log_outcome(screen.id(), &outcome);

        self.word = Some(WordEntry {
            screen,
            form_open: false,
            confirm_pending: false,
        });
        self.show();
    }

    pub async fn refresh(&self) {
        let outcome = match &self.word {
            Some(entry) => entry.screen.on_refresh().await,
            None => self.dictionary.on_refresh().await,
        };
        if outcome == FetchOutcome::Skipped {
            tracing::info!("refresh already in progress");
        }
        self.show();
    }

    /// User navigated back from the word screen
    pub fn back(&mut self) {
        match self.word.take() {
            Some(entry) => {
                entry.screen.on_detach();
                self.show();
            }
            None => tracing::info!("already at the dictionary screen"),
        }
    }

    /// Chrome confirmed a pop
    pub fn popped(&mut self, screen: &ScreenId) {
        let is_top = self
            .word
            .as_ref()
            .is_some_and(|entry| entry.screen.id() == screen);

        if is_top {
            self.back();
        } else {
            tracing::debug!("pop for unknown screen {screen}");
        }
    }

    pub fn detach_all(&mut self) {
        if let Some(entry) = self.word.take() {
            entry.screen.on_detach();
        }
        self.dictionary.on_detach();
    }

    /// Log whatever the top screen would render
    pub fn show(&self) {
        match &self.word {
            Some(entry) => log_word(entry.screen.id(), &entry.screen.render()),
            None => log_dictionary(self.dictionary.id(), &self.dictionary.render()),
        }
    }
}

fn log_outcome(screen: &ScreenId, outcome: &FetchOutcome) {
    if let FetchOutcome::Failed(e) = outcome {
        tracing::warn!("[{screen}] {e}");
    }
}

fn log_dictionary(screen: &ScreenId, view: &ScreenView<DictionaryView>) {
    match view {
        ScreenView::Loading { error: None } => tracing::info!("[{screen}] loading"),
        ScreenView::Loading { error: Some(e) } => {
            tracing::warn!("[{screen}] could not load: {e}; `refresh` to retry")
        }
        ScreenView::Content {
            body, refreshing, ..
        } => {
            let letters: Vec<String> = body
                .letters
                .iter()
                .map(|g| {
                    let words: Vec<&str> = g.words.iter().map(|w| w.title.as_str()).collect();
                    format!("{}: [{}]", g.letter, words.join(", "))
                })
                .collect();
            tracing::info!(
                refreshing,
                "[{screen}] Language: {} | {}",
                body.language,
                letters.join(" ")
            );
        }
    }
}

fn log_word(screen: &ScreenId, view: &ScreenView<WordView>) {
    match view {
        ScreenView::Loading { error: None } => tracing::info!("[{screen}] loading"),
        ScreenView::Loading { error: Some(e) } => {
            tracing::warn!("[{screen}] could not load: {e}; `refresh` to retry")
        }
        ScreenView::Content {
            body, refreshing, ..
        } => {
            if let Some(message) = &body.empty_message {
                tracing::info!(refreshing, "[{screen}] {message}");
            }
            for row in &body.descriptions {
                tracing::info!(refreshing, "[{screen}] {}. {}", row.index + 1, row.text);
            }
        }
    }
}
