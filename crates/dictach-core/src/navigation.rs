use std::fmt;

use dictach_types::{DictionaryId, WordDraft, WordSummary};

use crate::error::NavigationError;

/// Host-assigned id of a mounted screen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenId(pub String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Word form to open as a modal, pre-filled with `initial`
#[derive(Debug, Clone, PartialEq)]
pub struct ModalRequest {
    pub form_id: String,
    pub title: String,
    pub dictionary_id: DictionaryId,
    pub language: String,
    pub initial: WordDraft,
}

/// Navigation chrome owned by the host (title bar, modal stack, screen stack).
///
/// Calls are fire-and-forget; the controllers only log returned errors.
pub trait NavigationPort: Send + Sync {
    fn set_title(&self, screen: &ScreenId, text: &str) -> Result<(), NavigationError>;

    fn push_modal(&self, screen: &ScreenId, request: ModalRequest) -> Result<(), NavigationError>;

    /// Ask the user to confirm deleting `word`. The host answers with
    /// `WordAction::DeleteConfirmed` on the same screen.
    fn confirm_delete(&self, screen: &ScreenId, word: &WordSummary) -> Result<(), NavigationError>;

    fn pop(&self, screen: &ScreenId) -> Result<(), NavigationError>;
}
