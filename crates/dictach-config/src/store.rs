use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root of the dictionaries REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let base_url = env::var("DICTACH_API_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = env::var("DICTACH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            timeout_seconds,
        }
    }
}
