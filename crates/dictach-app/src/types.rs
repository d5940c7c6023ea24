use anyhow::{Context, bail};
use dictach_core::{ModalRequest, ScreenId};
use dictach_types::{DictionaryId, WordId, WordSummary};

/// Screens to open at startup and buttons to press on the word screen
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub dictionary_id: DictionaryId,
    pub word_id: Option<WordId>,
    pub presses: Vec<String>,
}

/// Events consumed by the screen event loop
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Command(Command),
    /// Chrome finished popping a screen
    Popped(ScreenId),
    Shutdown,
}

/// User input typed into the host
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pull-to-refresh on the top screen
    Refresh,
    /// Push a word screen for the given word
    Open(WordId),
    /// Leave the word screen
    Back,
    /// Navigation bar button press, by button id
    Button(String),
    /// Answer the delete confirmation
    Confirm,
    /// Submit the open word form with a new title
    Submit(String),
    /// Log the current view again
    Show,
}

/// Side effects the screens ask the chrome to perform
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeEvent {
    SetTitle { screen: ScreenId, text: String },
    PushModal { screen: ScreenId, request: ModalRequest },
    ConfirmDelete { screen: ScreenId, word: WordSummary },
    Pop { screen: ScreenId },
}

impl AppEvent {
    /// Parse one line of user input
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(head, rest)| (head, rest.trim()))
            .unwrap_or((line, ""));

        let command = match head {
            "quit" | "exit" => return Ok(AppEvent::Shutdown),
            "refresh" => Command::Refresh,
            "back" => Command::Back,
            "show" => Command::Show,
            "confirm" => Command::Confirm,
            "edit" | "delete" => Command::Button(head.to_string()),
            "button" if !rest.is_empty() => Command::Button(rest.to_string()),
            "open" => {
                let id = rest
                    .parse()
                    .with_context(|| format!("invalid word id '{rest}'"))?;
                Command::Open(WordId(id))
            }
            "submit" if !rest.is_empty() => Command::Submit(rest.to_string()),
            "button" | "submit" => bail!("'{head}' needs an argument"),
            other => bail!("unknown command '{other}'"),
        };

        Ok(AppEvent::Command(command))
    }
}
