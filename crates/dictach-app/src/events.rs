use std::sync::Arc;

use dictach_core::{NavigationPort, WordScreenOptions};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use crate::types::{AppEvent, Command, Launch};

pub mod stack;
pub mod word_actions;

use stack::ScreenStack;
use word_actions::{handle_button, handle_confirm, handle_submit};

/// Screen event loop. Owns the screen stack; runs until `Shutdown`.
pub async fn event_loop(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<AppEvent>,
    nav: Arc<dyn NavigationPort>,
    launch: Launch,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let options = {
        let config = state.config.read().await;
        WordScreenOptions::from(&config.ui)
    };

    let mut stack = ScreenStack::new(launch.dictionary_id, state.store.clone(), nav, options);
    stack.mount_dictionary().await;
    if let Some(word_id) = launch.word_id {
        stack.open_word(word_id).await;
    }
    for button_id in &launch.presses {
        handle_button(&mut stack, button_id).await;
    }

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = event_rx.recv() => event?,
        };
        tracing::debug!(?event, "app event");

        match event {
            AppEvent::Shutdown => break,
            AppEvent::Popped(screen) => stack.popped(&screen),
            AppEvent::Command(command) => handle_command(&mut stack, command).await,
        }
    }

    stack.detach_all();
    tracing::info!("event loop stopping");
    Ok(())
}

async fn handle_command(stack: &mut ScreenStack, command: Command) {
    match command {
        Command::Refresh => stack.refresh().await,
        Command::Open(word_id) => stack.open_word(word_id).await,
        Command::Back => stack.back(),
        Command::Show => stack.show(),
        Command::Button(button_id) => handle_button(stack, &button_id).await,
        Command::Confirm => handle_confirm(stack).await,
        Command::Submit(title) => handle_submit(stack, title).await,
    }
}
