use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::session::state::{RawWordPair, WordPair, NO_DATA_MESSAGE};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    #[error("word source has no data")]
    EmptyResult,
    #[error("word source request failed: {0}")]
    Transport(String),
    #[error("malformed word source response: {0}")]
    Malformed(String),
}

pub trait WordSource: Send + Sync {
    fn fetch_word(
        &self,
        exclude: Option<&str>,
    ) -> impl Future<Output = Result<WordPair, WordSourceError>> + Send;
}

impl<S: WordSource> WordSource for Arc<S> {
    fn fetch_word(
        &self,
        exclude: Option<&str>,
    ) -> impl Future<Output = Result<WordPair, WordSourceError>> + Send {
        (**self).fetch_word(exclude)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordPayload {
    Pair(RawWordPair),
    Message { message: String },
}

pub fn classify_payload(body: &[u8]) -> Result<WordPair, WordSourceError> {
    let payload: WordPayload = serde_json::from_slice(body)
        .map_err(|err| WordSourceError::Malformed(err.to_string()))?;

    match payload {
        WordPayload::Pair(raw) => {
            WordPair::try_from(raw).map_err(|err| WordSourceError::Malformed(err.to_string()))
        }
        WordPayload::Message { message } if message == NO_DATA_MESSAGE => {
            Err(WordSourceError::EmptyResult)
        }
        WordPayload::Message { message } => Err(WordSourceError::Malformed(format!(
            "unexpected message: {message}"
        ))),
    }
}

#[derive(Clone)]
pub struct HttpWordSource {
    url: String,
    client: reqwest::Client,
}

impl HttpWordSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            url: url.into(),
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.word_source_url.clone(), config.word_source_timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordSource for HttpWordSource {
    async fn fetch_word(&self, exclude: Option<&str>) -> Result<WordPair, WordSourceError> {
        let mut request = self.client.get(&self.url);
        if let Some(english) = exclude {
            request = request.query(&[("exclude", english)]);
        }

        let response = request
            .send()
            .await
            .map_err(|err| WordSourceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(?status, %body, "word source returned error status");
            return Err(WordSourceError::Transport(format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| WordSourceError::Transport(err.to_string()))?;

        classify_payload(&bytes)
    }
}
