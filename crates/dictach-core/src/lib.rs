//! Screen controllers for the dictionary and word detail screens.
//!
//! - [`controller::ScreenController`] - fetch on mount, guarded refresh, detach
//! - [`title`] - navigation bar titles derived from fetched resources
//! - [`cascade`] - ordered side effects after a word is edited or deleted
//! - [`screens`] - the two concrete screens built on the above

pub mod action;
pub mod cascade;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod navigation;
pub mod resource;
pub mod screens;
pub mod title;
pub mod view;

pub use action::{ActionOutcome, WordAction};
pub use controller::{FetchOutcome, ScreenController, ScreenSnapshot};
pub use error::{FetchError, MutationError, NavigationError};
pub use lifecycle::{Phase, Transition};
pub use navigation::{ModalRequest, NavigationPort, ScreenId};
pub use screens::{DictionaryScreen, WordScreen, WordScreenOptions};
pub use view::{DictionaryView, ScreenView, WordView};

#[cfg(test)]
mod tests;
