#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use parking_lot::Mutex;
use tokio::sync::Notify;

use vocab_flashcards::config::Config;
use vocab_flashcards::services::vocabulary::VocabularyStore;
use vocab_flashcards::services::word_source::{WordSource, WordSourceError};
use vocab_flashcards::session::WordPair;

pub fn pair(english: &str, german: &str) -> WordPair {
    WordPair::new(english, german).unwrap()
}

pub fn test_config() -> Config {
    Config::default()
}

pub fn create_test_app(words: &[(&str, &str)]) -> Router {
    let store = VocabularyStore::new(words.iter().map(|(e, g)| pair(e, g)).collect());
    vocab_flashcards::create_app_with_vocabulary(&test_config(), store)
}

/// Replays canned outcomes in order and records every call.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<WordPair, WordSourceError>>>,
    excludes: Mutex<Vec<Option<String>>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<WordPair, WordSourceError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            excludes: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, response: Result<WordPair, WordSourceError>) {
        self.responses.lock().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.excludes.lock().len()
    }

    pub fn excludes(&self) -> Vec<Option<String>> {
        self.excludes.lock().clone()
    }
}

impl WordSource for ScriptedSource {
    async fn fetch_word(&self, exclude: Option<&str>) -> Result<WordPair, WordSourceError> {
        self.excludes.lock().push(exclude.map(str::to_string));
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(WordSourceError::Transport("script exhausted".into())))
    }
}

/// Holds every fetch until the test opens the gate.
pub struct GatedSource {
    pair: WordPair,
    pub started: Notify,
    pub gate: Notify,
    calls: AtomicUsize,
}

impl GatedSource {
    pub fn new(pair: WordPair) -> Self {
        Self {
            pair,
            started: Notify::new(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WordSource for GatedSource {
    async fn fetch_word(&self, _exclude: Option<&str>) -> Result<WordPair, WordSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.gate.notified().await;
        Ok(self.pair.clone())
    }
}

pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
