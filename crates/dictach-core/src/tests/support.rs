//! Recording doubles for the store and the navigation chrome.
//!
//! Both write into one shared call log so tests can assert the exact
//! interleaving of store calls and chrome effects.

use std::collections::{BTreeSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use dictach_store::{ResourceStore, StoreError};
use dictach_types::{
    Description, DescriptionId, Dictionary, DictionaryId, Word, WordId, WordPatch, WordSummary,
};
use tokio::sync::Notify;

use crate::error::NavigationError;
use crate::navigation::{ModalRequest, NavigationPort, ScreenId};
use crate::screens::{DictionaryScreen, WordScreen, WordScreenOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchDictionary(u64),
    FetchWord(u64, u64),
    Update(u64, u64),
    Destroy(u64, u64),
    SetTitle(String, String),
    PushModal(String, String),
    ConfirmDelete(String, u64),
    Pop(String),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

pub fn clear(log: &CallLog) {
    log.lock().unwrap().clear();
}

pub fn title(screen: &str, text: &str) -> Call {
    Call::SetTitle(screen.to_string(), text.to_string())
}

fn rejected() -> StoreError {
    StoreError::Rejected {
        status: 500,
        message: "boom".to_string(),
    }
}

pub struct TestStore {
    log: CallLog,
    pub dictionary: Mutex<Dictionary>,
    pub word: Mutex<Word>,
    pub fail_fetch: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_destroy: AtomicBool,
    gates: Mutex<VecDeque<Arc<Notify>>>,
}

impl TestStore {
    pub fn new(log: CallLog, dictionary: Dictionary, word: Word) -> Self {
        Self {
            log,
            dictionary: Mutex::new(dictionary),
            word: Mutex::new(word),
            fail_fetch: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_destroy: AtomicBool::new(false),
            gates: Mutex::new(VecDeque::new()),
        }
    }

    /// The next store call records itself, then waits until the returned
    /// gate is notified before completing.
    pub fn hold_next_call(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().push_back(gate.clone());
        gate
    }

    pub fn rename_dictionary(&self, title: &str) {
        self.dictionary.lock().unwrap().title = title.to_string();
    }

    fn record(&self, call: Call) {
        self.log.lock().unwrap().push(call);
    }

    async fn wait_gate(&self) {
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait::async_trait]
impl ResourceStore for TestStore {
    async fn fetch_dictionary(&self, id: DictionaryId) -> Result<Dictionary, StoreError> {
        self.record(Call::FetchDictionary(id.0));
        let snapshot = self.dictionary.lock().unwrap().clone();
        self.wait_gate().await;

        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(rejected());
        }
        Ok(snapshot)
    }

    async fn fetch_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<Word, StoreError> {
        self.record(Call::FetchWord(dictionary_id.0, word_id.0));
        let snapshot = self.word.lock().unwrap().clone();
        self.wait_gate().await;

        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(rejected());
        }
        Ok(snapshot)
    }

    async fn update_word(
        &self,
        dictionary_id: DictionaryId,
        patch: WordPatch,
    ) -> Result<(), StoreError> {
        self.record(Call::Update(dictionary_id.0, patch.id.0));
        self.wait_gate().await;

        if self.fail_update.load(Ordering::SeqCst) {
            return Err(rejected());
        }
        self.word.lock().unwrap().apply(patch);
        Ok(())
    }

    async fn destroy_word(
        &self,
        dictionary_id: DictionaryId,
        word_id: WordId,
    ) -> Result<(), StoreError> {
        self.record(Call::Destroy(dictionary_id.0, word_id.0));
        self.wait_gate().await;

        if self.fail_destroy.load(Ordering::SeqCst) {
            return Err(rejected());
        }
        self.dictionary
            .lock()
            .unwrap()
            .words
            .retain(|w| w.id != word_id);
        Ok(())
    }
}

pub struct RecordingNav {
    log: CallLog,
    pub fail_all: AtomicBool,
}

impl RecordingNav {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_all: AtomicBool::new(false),
        }
    }

    fn record(&self, call: Call) -> Result<(), NavigationError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(NavigationError::Closed);
        }
        self.log.lock().unwrap().push(call);
        Ok(())
    }
}

impl NavigationPort for RecordingNav {
    fn set_title(&self, screen: &ScreenId, text: &str) -> Result<(), NavigationError> {
        self.record(Call::SetTitle(screen.0.clone(), text.to_string()))
    }

    fn push_modal(&self, screen: &ScreenId, request: ModalRequest) -> Result<(), NavigationError> {
        self.record(Call::PushModal(screen.0.clone(), request.form_id))
    }

    fn confirm_delete(
        &self,
        screen: &ScreenId,
        word: &WordSummary,
    ) -> Result<(), NavigationError> {
        self.record(Call::ConfirmDelete(screen.0.clone(), word.id.0))
    }

    fn pop(&self, screen: &ScreenId) -> Result<(), NavigationError> {
        self.record(Call::Pop(screen.0.clone()))
    }
}

pub fn spanish() -> Dictionary {
    Dictionary {
        id: DictionaryId(3),
        title: "Spanish".to_string(),
        language: "es".to_string(),
        alphabeth: vec!["a".to_string(), "h".to_string()],
        tags: BTreeSet::from(["basics".to_string()]),
        words: vec![WordSummary {
            id: WordId(7),
            title: "Hola".to_string(),
        }],
    }
}

pub fn hola() -> Word {
    Word {
        id: WordId(7),
        dictionary_id: DictionaryId(3),
        title: "Hola".to_string(),
        descriptions: vec![Description {
            id: DescriptionId(1),
            text: "hello".to_string(),
        }],
    }
}

pub struct Fixture {
    pub log: CallLog,
    pub store: Arc<TestStore>,
    pub nav: Arc<RecordingNav>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with(spanish(), hola())
    }

    pub fn with(dictionary: Dictionary, word: Word) -> Self {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        Self {
            store: Arc::new(TestStore::new(log.clone(), dictionary, word)),
            nav: Arc::new(RecordingNav::new(log.clone())),
            log,
        }
    }

    pub fn dictionary_screen(&self) -> DictionaryScreen {
        let id = self.store.dictionary.lock().unwrap().id;
        DictionaryScreen::open(
            ScreenId::new("dict"),
            id,
            self.store.clone(),
            self.nav.clone(),
        )
    }

    /// Mounted dictionary and word screens with the call log cleared
    pub async fn mounted_word_screen(&self) -> (DictionaryScreen, WordScreen) {
        let dictionary = self.dictionary_screen();
        dictionary.on_mount().await;

        let word = dictionary.open_word(
            ScreenId::new("word"),
            WordId(7),
            WordScreenOptions::default(),
        );
        word.on_mount().await;

        clear(&self.log);
        (dictionary, word)
    }
}
