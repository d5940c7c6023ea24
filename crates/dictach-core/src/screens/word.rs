use std::sync::Arc;

use dictach_config::ui::UiConfig;
use dictach_store::ResourceStore;
use dictach_types::{Word, WordSummary};

use crate::action::{ActionOutcome, WordAction};
use crate::cascade;
use crate::controller::{FetchOutcome, ScreenController};
use crate::error::MutationError;
use crate::navigation::{ModalRequest, NavigationPort, ScreenId};
use crate::resource::WordKey;
use crate::screens::dictionary::DictionaryScreen;
use crate::title::{TitleSync, word_title};
use crate::view::{ScreenView, WordView};

#[derive(Debug, Clone)]
pub struct WordScreenOptions {
    pub form_id: String,
    pub edit_form_title: String,
    pub empty_descriptions: String,
}

impl From<&UiConfig> for WordScreenOptions {
    fn from(ui: &UiConfig) -> Self {
        Self {
            form_id: ui.word_form_id.clone(),
            edit_form_title: ui.edit_form_title.clone(),
            empty_descriptions: ui.empty_descriptions.clone(),
        }
    }
}

impl Default for WordScreenOptions {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

/// Word detail screen with edit and delete actions.
///
/// Bound to one `(dictionary_id, word_id)` pair for its whole life.
#[derive(Clone)]
pub struct WordScreen {
    id: ScreenId,
    controller: ScreenController<WordKey>,
    parent: DictionaryScreen,
    store: Arc<dyn ResourceStore>,
    nav: Arc<dyn NavigationPort>,
    title: TitleSync,
    options: WordScreenOptions,
}

impl WordScreen {
    pub(crate) fn new(
        id: ScreenId,
        key: WordKey,
        parent: DictionaryScreen,
        store: Arc<dyn ResourceStore>,
        nav: Arc<dyn NavigationPort>,
        options: WordScreenOptions,
    ) -> Self {
        Self {
            title: TitleSync::new(id.clone(), nav.clone()),
            controller: ScreenController::new(key, store.clone()),
            id,
            parent,
            store,
            nav,
            options,
        }
    }

    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    pub fn key(&self) -> WordKey {
        *self.controller.key()
    }

    pub fn controller(&self) -> &ScreenController<WordKey> {
        &self.controller
    }

    pub fn parent(&self) -> &DictionaryScreen {
        &self.parent
    }

    pub(crate) fn store(&self) -> &dyn ResourceStore {
        self.store.as_ref()
    }

    pub async fn on_mount(&self) -> FetchOutcome {
        self.controller.on_mount(|w| self.sync_title(w)).await
    }

    pub async fn on_refresh(&self) -> FetchOutcome {
        self.controller.on_refresh(|w| self.sync_title(w)).await
    }

    pub(crate) async fn reload(&self) -> FetchOutcome {
        self.controller.reload(|w| self.sync_title(w)).await
    }

    pub fn on_detach(&self) {
        self.controller.on_detach();
    }

    pub fn render(&self) -> ScreenView<WordView> {
        let empty = &self.options.empty_descriptions;
        self.controller.render(|w| WordView::from_word(w, empty))
    }

    /// Entry point for navigation bar buttons
    pub async fn on_navigation_button(
        &self,
        button_id: &str,
    ) -> Result<ActionOutcome, MutationError> {
        match WordAction::from_button_id(button_id) {
            Some(action) => self.handle(action).await,
            None => {
                tracing::debug!(screen = %self.id, "ignoring unknown button '{button_id}'");
                Ok(ActionOutcome::Ignored)
            }
        }
    }

    /// Errors are mutation failures only; the screen stays as it was and
    /// the caller may retry.
    pub async fn handle(&self, action: WordAction) -> Result<ActionOutcome, MutationError> {
        match action {
            WordAction::EditRequested => Ok(self.open_edit_form()),
            WordAction::EditSubmitted(draft) => cascade::edit(self, draft).await,
            WordAction::DeleteRequested => Ok(self.request_delete()),
            WordAction::DeleteConfirmed => cascade::delete(self).await,
        }
    }

    pub(crate) fn sync_title(&self, word: &Word) {
        // Bare word title until the parent dictionary has loaded
        match self.parent.title() {
            Some(dictionary_title) => self.title.push(&word_title(&dictionary_title, word)),
            None => self.title.push(&word.title),
        }
    }

    pub(crate) fn pop(&self) {
        if let Err(e) = self.nav.pop(&self.id) {
            tracing::warn!(screen = %self.id, "failed to pop screen: {e}");
        }
    }

    fn open_edit_form(&self) -> ActionOutcome {
        let Some(word) = self.controller.resource() else {
            tracing::debug!(screen = %self.id, "edit requested before the word loaded");
            return ActionOutcome::Ignored;
        };

        let request = ModalRequest {
            form_id: self.options.form_id.clone(),
            title: self.options.edit_form_title.clone(),
            dictionary_id: self.key().dictionary_id,
            language: self.parent.language().unwrap_or_default(),
            initial: word.draft(),
        };

        match self.nav.push_modal(&self.id, request) {
            Ok(()) => ActionOutcome::FormOpened,
            Err(e) => {
                tracing::warn!(screen = %self.id, "failed to open word form: {e}");
                ActionOutcome::Ignored
            }
        }
    }

    fn request_delete(&self) -> ActionOutcome {
        let key = self.key();
        let summary = WordSummary {
            id: key.word_id,
            title: self
                .controller
                .resource()
                .map(|w| w.title)
                .unwrap_or_default(),
        };

        match self.nav.confirm_delete(&self.id, &summary) {
            Ok(()) => ActionOutcome::ConfirmationRequested,
            Err(e) => {
                tracing::warn!(screen = %self.id, "failed to ask for delete confirmation: {e}");
                ActionOutcome::Ignored
            }
        }
    }
}
