use clap::Parser;
use dictach_config::Config;
use dictach_types::{DictionaryId, WordId};

use crate::types::Launch;

#[derive(Debug, Parser)]
#[command(name = "dictach", about = "Headless host for the dictionary and word screens")]
pub struct Args {
    /// Dictionary to open
    #[arg(long)]
    pub dictionary: u64,

    /// Word to open on top of the dictionary screen
    #[arg(long)]
    pub word: Option<u64>,

    /// Navigation button to press on the word screen once it loads; repeatable
    #[arg(long = "press", value_name = "BUTTON")]
    pub press: Vec<String>,

    /// API root, overrides DICTACH_API_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout, overrides DICTACH_TIMEOUT_SECONDS
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Use a seeded in-memory store instead of the HTTP API
    #[arg(long)]
    pub demo: bool,
}

impl Args {
    pub fn launch(&self) -> Launch {
        Launch {
            dictionary_id: DictionaryId(self.dictionary),
            word_id: self.word.map(WordId),
            presses: self.press.clone(),
        }
    }

    /// CLI flags win over environment config
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.store.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.store.timeout_seconds = timeout;
        }
    }
}
