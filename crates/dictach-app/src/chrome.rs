use dictach_core::{ModalRequest, NavigationError, NavigationPort, ScreenId};
use dictach_types::WordSummary;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::types::{AppEvent, ChromeEvent};

/// Navigation port that queues chrome effects for the chrome loop
#[derive(Clone)]
pub struct ChannelNav {
    tx: AsyncSender<ChromeEvent>,
}

impl ChannelNav {
    pub fn new(tx: AsyncSender<ChromeEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: ChromeEvent) -> Result<(), NavigationError> {
        match self.tx.try_send(event) {
            Ok(true) => Ok(()),
            Ok(false) => Err(NavigationError::Full),
            Err(_) => Err(NavigationError::Closed),
        }
    }
}

impl NavigationPort for ChannelNav {
    fn set_title(&self, screen: &ScreenId, text: &str) -> Result<(), NavigationError> {
        self.send(ChromeEvent::SetTitle {
            screen: screen.clone(),
            text: text.to_string(),
        })
    }

    fn push_modal(&self, screen: &ScreenId, request: ModalRequest) -> Result<(), NavigationError> {
        self.send(ChromeEvent::PushModal {
            screen: screen.clone(),
            request,
        })
    }

    fn confirm_delete(
        &self,
        screen: &ScreenId,
        word: &WordSummary,
    ) -> Result<(), NavigationError> {
        self.send(ChromeEvent::ConfirmDelete {
            screen: screen.clone(),
            word: word.clone(),
        })
    }

    fn pop(&self, screen: &ScreenId) -> Result<(), NavigationError> {
        self.send(ChromeEvent::Pop {
            screen: screen.clone(),
        })
    }
}

/// Terminal stand-in for the title bar and modal stack
pub async fn chrome_loop(
    chrome_rx: AsyncReceiver<ChromeEvent>,
    app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = chrome_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        match event {
            ChromeEvent::SetTitle { screen, text } => {
                tracing::info!("[{screen}] title: {text}");
            }
            ChromeEvent::PushModal { screen, request } => {
                tracing::info!(
                    "[{screen}] {} ({}): '{}' with {} description(s); `submit <title>` to save",
                    request.title,
                    request.form_id,
                    request.initial.title,
                    request.initial.descriptions.len()
                );
            }
            ChromeEvent::ConfirmDelete { screen, word } => {
                tracing::info!("[{screen}] delete '{}'? `confirm` to proceed", word.title);
            }
            ChromeEvent::Pop { screen } => {
                tracing::info!("[{screen}] popped");
                if let Err(e) = app_tx.send(AppEvent::Popped(screen)).await {
                    tracing::error!("Failed to report pop to app: {e}");
                    break;
                }
            }
        }
    }

    tracing::debug!("chrome loop stopping");
    Ok(())
}
