use std::sync::Arc;

use dictach_config::Config;
use dictach_store::ResourceStore;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: RwLock<Config>,
    pub store: Arc<dyn ResourceStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ResourceStore>) -> Self {
        Self {
            config: RwLock::new(config),
            store,
        }
    }
}
