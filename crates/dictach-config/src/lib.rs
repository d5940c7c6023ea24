use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::store::StoreConfig;
use self::ui::UiConfig;

pub mod log;
pub mod store;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build config from the environment, reading `.env` first if present
    pub fn new() -> Self {
        // A missing .env is the normal case
        let _ = dotenvy::dotenv();

        Config {
            store: StoreConfig::new(),
            ui: UiConfig::default(),
            log: LogConfig::new(),
        }
    }
}
