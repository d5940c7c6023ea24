//! Ordered side effects after a word mutation.
//!
//! Every step runs strictly after the store acknowledged the mutation. A
//! rejected mutation returns before any of them.

use dictach_types::{WordDraft, WordPatch};

use crate::action::ActionOutcome;
use crate::controller::FetchOutcome;
use crate::error::MutationError;
use crate::screens::WordScreen;

/// update -> parent refetch -> word reload -> title
pub(crate) async fn edit(
    screen: &WordScreen,
    draft: WordDraft,
) -> Result<ActionOutcome, MutationError> {
    let key = screen.key();
    let patch = WordPatch::new(key.word_id, draft);

    tracing::info!(screen = %screen.id(), word = %key.word_id, "updating word");
    if let Err(e) = screen.store().update_word(key.dictionary_id, patch).await {
        tracing::error!(screen = %screen.id(), "word update failed: {e}");
        return Err(MutationError::Update(e));
    }

    if screen.controller().is_detached() {
        tracing::debug!(screen = %screen.id(), "screen detached during update, cascade stopped");
        return Ok(ActionOutcome::Detached);
    }

    log_refetch("dictionary", screen.parent().reload().await);
    // Title is pushed from the reload continuation, after the parent title is fresh
    log_refetch("word", screen.reload().await);

    tracing::info!(screen = %screen.id(), word = %key.word_id, "word updated");
    Ok(ActionOutcome::Updated)
}

/// destroy -> parent refetch -> pop
pub(crate) async fn delete(screen: &WordScreen) -> Result<ActionOutcome, MutationError> {
    let key = screen.key();

    tracing::info!(screen = %screen.id(), word = %key.word_id, "deleting word");
    if let Err(e) = screen
        .store()
        .destroy_word(key.dictionary_id, key.word_id)
        .await
    {
        tracing::error!(screen = %screen.id(), "word delete failed: {e}");
        return Err(MutationError::Destroy(e));
    }

    if screen.controller().is_detached() {
        tracing::debug!(screen = %screen.id(), "screen detached during delete, cascade stopped");
        return Ok(ActionOutcome::Detached);
    }

    // Parent list must drop the word before the user can see it again
    log_refetch("dictionary", screen.parent().reload().await);
    screen.pop();

    tracing::info!(screen = %screen.id(), word = %key.word_id, "word deleted");
    Ok(ActionOutcome::Deleted)
}

fn log_refetch(what: &str, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Loaded => {}
        FetchOutcome::Failed(e) => tracing::warn!("{what} refetch after mutation failed: {e}"),
        other => tracing::debug!("{what} refetch after mutation: {other:?}"),
    }
}
