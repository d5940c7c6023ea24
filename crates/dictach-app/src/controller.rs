use std::sync::Arc;

use dictach_core::NavigationPort;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::chrome::{ChannelNav, chrome_loop};
use crate::events::event_loop;
use crate::io::stdin_loop;
use crate::state::AppState;
use crate::types::{AppEvent, ChromeEvent, Launch};

/// Centralized channel management
pub struct ChannelSet {
    pub app_events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub chrome: (AsyncSender<ChromeEvent>, AsyncReceiver<ChromeEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_events: kanal::bounded_async(64),
            chrome: kanal::bounded_async(128),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, launch: Launch) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        let nav: Arc<dyn NavigationPort> =
            Arc::new(ChannelNav::new(self.channels.chrome.0.clone()));

        // Screens
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.app_events.1.clone(),
            nav,
            launch,
            self.cancel_token.child_token(),
        ));

        // Chrome
        tasks.spawn(chrome_loop(
            self.channels.chrome.1.clone(),
            self.channels.app_events.0.clone(),
            self.cancel_token.child_token(),
        ));

        // User input
        tasks.spawn(stdin_loop(
            self.channels.app_events.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
