use dictach_types::WordDraft;

pub const EDIT_BUTTON_ID: &str = "edit";
pub const DELETE_BUTTON_ID: &str = "delete";

/// Everything the word screen can be asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum WordAction {
    /// Open the word form pre-filled with the current word
    EditRequested,
    /// Form submitted with new values
    EditSubmitted(WordDraft),
    /// Ask for confirmation before deleting
    DeleteRequested,
    /// User confirmed the delete
    DeleteConfirmed,
}

impl WordAction {
    /// Map a navigation bar button id. Unknown ids map to `None`.
    pub fn from_button_id(button_id: &str) -> Option<Self> {
        match button_id {
            EDIT_BUTTON_ID => Some(WordAction::EditRequested),
            DELETE_BUTTON_ID => Some(WordAction::DeleteRequested),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Ignored,
    FormOpened,
    ConfirmationRequested,
    /// Word updated; parent, word and title refreshed
    Updated,
    /// Word destroyed; parent refreshed and screen popped
    Deleted,
    /// Mutation went through but the screen was gone; cascade stopped
    Detached,
}
