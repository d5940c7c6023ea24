pub mod dictionary;
pub mod word;

pub use dictionary::DictionaryScreen;
pub use word::{WordScreen, WordScreenOptions};
