use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load words";
pub const NO_DATA_MESSAGE: &str = "No data found";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordPairError {
    #[error("english word is empty")]
    EmptyEnglish,
    #[error("german word is empty")]
    EmptyGerman,
}

/// Both sides are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWordPair")]
pub struct WordPair {
    english: String,
    german: String,
}

impl WordPair {
    pub fn new(
        english: impl Into<String>,
        german: impl Into<String>,
    ) -> Result<Self, WordPairError> {
        let english = english.into().trim().to_string();
        let german = german.into().trim().to_string();

        if english.is_empty() {
            return Err(WordPairError::EmptyEnglish);
        }
        if german.is_empty() {
            return Err(WordPairError::EmptyGerman);
        }

        Ok(Self { english, german })
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn german(&self) -> &str {
        &self.german
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWordPair {
    #[serde(alias = "english_word")]
    pub english: String,
    #[serde(alias = "german_word")]
    pub german: String,
}

impl TryFrom<RawWordPair> for WordPair {
    type Error = WordPairError;

    fn try_from(raw: RawWordPair) -> Result<Self, Self::Error> {
        WordPair::new(raw.english, raw.german)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Loaded { pair: WordPair, revealed: bool },
    Empty,
    Error { message: String },
}

impl SessionState {
    pub fn loaded(pair: WordPair) -> Self {
        SessionState::Loaded {
            pair,
            revealed: false,
        }
    }

    pub fn load_failed() -> Self {
        SessionState::Error {
            message: LOAD_FAILED_MESSAGE.to_string(),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            SessionState::Loading => "LOADING",
            SessionState::Loaded { .. } => "LOADED",
            SessionState::Empty => "EMPTY",
            SessionState::Error { .. } => "ERROR",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn pair(&self) -> Option<&WordPair> {
        match self {
            SessionState::Loaded { pair, .. } => Some(pair),
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, SessionState::Loaded { revealed: true, .. })
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SessionState::Empty => Some(NO_DATA_MESSAGE),
            SessionState::Error { message } => Some(message),
            _ => None,
        }
    }
}
