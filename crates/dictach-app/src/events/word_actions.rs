use dictach_core::{ActionOutcome, WordAction};

use super::stack::ScreenStack;

pub async fn handle_button(stack: &mut ScreenStack, button_id: &str) {
    let Some(entry) = stack.word.as_mut() else {
        tracing::info!("no word screen open");
        return;
    };

    let result = entry.screen.on_navigation_button(button_id).await;
    match result {
        Ok(ActionOutcome::FormOpened) => entry.form_open = true,
        Ok(ActionOutcome::ConfirmationRequested) => entry.confirm_pending = true,
        Ok(outcome) => tracing::debug!("button '{button_id}': {outcome:?}"),
        Err(e) => tracing::error!("{e}"),
    }
}

pub async fn handle_confirm(stack: &mut ScreenStack) {
    let Some(entry) = stack.word.as_mut() else {
        tracing::info!("no word screen open");
        return;
    };
    if !entry.confirm_pending {
        tracing::info!("nothing to confirm");
        return;
    }
    entry.confirm_pending = false;

    let result = entry.screen.handle(WordAction::DeleteConfirmed).await;
    match result {
        // Screen leaves the stack once the chrome reports the pop
        Ok(outcome) => tracing::debug!("delete: {outcome:?}"),
        // Screen stays as it was
        Err(e) => tracing::error!("{e}"),
    }
}

pub async fn handle_submit(stack: &mut ScreenStack, title: String) {
    let Some(entry) = stack.word.as_mut() else {
        tracing::info!("no word screen open");
        return;
    };
    if !entry.form_open {
        tracing::info!("word form is not open; press `edit` first");
        return;
    }
    let Some(word) = entry.screen.controller().resource() else {
        tracing::info!("word not loaded yet");
        return;
    };

    let mut draft = word.draft();
    draft.title = title;

    let result = entry.screen.handle(WordAction::EditSubmitted(draft)).await;
    match result {
        Ok(_) => {
            entry.form_open = false;
            stack.show();
        }
        // Form stays open for another try
        Err(e) => tracing::error!("{e}"),
    }
}
