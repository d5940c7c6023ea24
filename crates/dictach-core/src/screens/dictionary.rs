use std::sync::Arc;

use dictach_store::ResourceStore;
use dictach_types::{Dictionary, DictionaryId, WordId};

use crate::controller::{FetchOutcome, ScreenController};
use crate::navigation::{NavigationPort, ScreenId};
use crate::resource::{DictionaryKey, WordKey};
use crate::screens::word::{WordScreen, WordScreenOptions};
use crate::title::{TitleSync, dictionary_title};
use crate::view::{DictionaryView, ScreenView};

/// Dictionary detail screen: language header and words grouped by letter
#[derive(Clone)]
pub struct DictionaryScreen {
    id: ScreenId,
    controller: ScreenController<DictionaryKey>,
    store: Arc<dyn ResourceStore>,
    nav: Arc<dyn NavigationPort>,
    title: TitleSync,
}

impl DictionaryScreen {
    pub fn open(
        id: ScreenId,
        dictionary_id: DictionaryId,
        store: Arc<dyn ResourceStore>,
        nav: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            title: TitleSync::new(id.clone(), nav.clone()),
            controller: ScreenController::new(DictionaryKey(dictionary_id), store.clone()),
            id,
            store,
            nav,
        }
    }

    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    pub fn dictionary_id(&self) -> DictionaryId {
        self.controller.key().0
    }

    pub fn controller(&self) -> &ScreenController<DictionaryKey> {
        &self.controller
    }

    pub async fn on_mount(&self) -> FetchOutcome {
        self.controller.on_mount(|d| self.sync_title(d)).await
    }

    pub async fn on_refresh(&self) -> FetchOutcome {
        self.controller.on_refresh(|d| self.sync_title(d)).await
    }

    /// Refetch on behalf of a child screen that mutated one of our words
    pub async fn reload(&self) -> FetchOutcome {
        self.controller.reload(|d| self.sync_title(d)).await
    }

    pub fn on_detach(&self) {
        self.controller.on_detach();
    }

    pub fn render(&self) -> ScreenView<DictionaryView> {
        self.controller.render(DictionaryView::from_dictionary)
    }

    /// Title of the last fetched snapshot
    pub fn title(&self) -> Option<String> {
        self.controller.resource().map(|d| d.title)
    }

    pub fn language(&self) -> Option<String> {
        self.controller.resource().map(|d| d.language)
    }

    /// Open a word screen for one of this dictionary's words
    pub fn open_word(
        &self,
        screen_id: ScreenId,
        word_id: WordId,
        options: WordScreenOptions,
    ) -> WordScreen {
        let key = WordKey {
            dictionary_id: self.dictionary_id(),
            word_id,
        };
        WordScreen::new(
            screen_id,
            key,
            self.clone(),
            self.store.clone(),
            self.nav.clone(),
            options,
        )
    }

    fn sync_title(&self, dictionary: &Dictionary) {
        self.title.push(&dictionary_title(dictionary));
    }
}
