use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::services::word_source::{WordSource, WordSourceError};
use crate::session::state::{SessionState, WordPair};

pub const DEFAULT_REPEAT_RETRIES: u32 = 1;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("a word fetch is already in flight")]
    FetchInFlight,
    #[error("no word pair is loaded")]
    NotLoaded,
}

pub fn handle_fetch_result(result: Result<WordPair, WordSourceError>) -> SessionState {
    match result {
        Ok(pair) => SessionState::loaded(pair),
        Err(WordSourceError::EmptyResult) => SessionState::Empty,
        Err(err) => {
            warn!(error = %err, "word fetch failed");
            SessionState::load_failed()
        }
    }
}

#[derive(Debug, Default)]
struct Flight {
    in_flight: bool,
    previous: Option<String>,
}

pub struct WordPairSession<S: WordSource> {
    source: S,
    state_tx: watch::Sender<SessionState>,
    flight: Mutex<Flight>,
    fetch_count: AtomicU64,
    repeat_retries: u32,
}

impl<S: WordSource> WordPairSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_repeat_retries(source, DEFAULT_REPEAT_RETRIES)
    }

    pub fn with_repeat_retries(source: S, repeat_retries: u32) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Loading);
        Self {
            source,
            state_tx,
            flight: Mutex::new(Flight::default()),
            fetch_count: AtomicU64::new(0),
            repeat_retries,
        }
    }

    pub fn remembering(mut self, english: impl Into<String>) -> Self {
        self.flight.get_mut().previous = Some(english.into());
        self
    }

    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn previous_english(&self) -> Option<String> {
        self.flight.lock().previous.clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.flight.lock().in_flight
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    pub async fn initialize(&self) -> Result<SessionState, SessionError> {
        let (guard, exclude) = self.begin_fetch(true)?;
        self.load(guard, exclude).await
    }

    pub async fn request_next_word(&self) -> Result<SessionState, SessionError> {
        let (guard, exclude) = self.begin_fetch(false)?;
        self.load(guard, exclude).await
    }

    pub fn reveal_answer(&self) -> Result<(), SessionError> {
        let mut outcome = Err(SessionError::NotLoaded);
        self.state_tx.send_if_modified(|state| match state {
            SessionState::Loaded { revealed, .. } => {
                outcome = Ok(());
                if *revealed {
                    false
                } else {
                    *revealed = true;
                    true
                }
            }
            _ => false,
        });
        outcome
    }

    fn begin_fetch(
        &self,
        reset_previous: bool,
    ) -> Result<(FetchGuard<'_, S>, Option<String>), SessionError> {
        let mut flight = self.flight.lock();
        if flight.in_flight {
            debug!("word fetch rejected, another one is in flight");
            return Err(SessionError::FetchInFlight);
        }

        flight.in_flight = true;
        if reset_previous {
            flight.previous = None;
        }
        let exclude = flight.previous.clone();
        self.publish(SessionState::Loading);

        Ok((
            FetchGuard {
                session: self,
                settled: false,
            },
            exclude,
        ))
    }

    async fn load(
        &self,
        mut guard: FetchGuard<'_, S>,
        exclude: Option<String>,
    ) -> Result<SessionState, SessionError> {
        let exclude = exclude.as_deref();
        let mut result = self.dispatch(exclude).await;

        // A failed retry keeps the repeated pair.
        let mut retries = 0;
        while retries < self.repeat_retries && is_repeat(&result, exclude) {
            retries += 1;
            debug!(retries, "word source repeated the previous word, fetching again");
            match self.dispatch(exclude).await {
                Ok(pair) if Some(pair.english()) != exclude => result = Ok(pair),
                Ok(_) => continue,
                Err(err) => {
                    debug!(error = %err, "retry failed, keeping the repeated word");
                    break;
                }
            }
        }

        let next = handle_fetch_result(result);
        self.settle(&mut guard, next.clone());
        Ok(next)
    }

    async fn dispatch(&self, exclude: Option<&str>) -> Result<WordPair, WordSourceError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.source.fetch_word(exclude).await
    }

    fn settle(&self, guard: &mut FetchGuard<'_, S>, next: SessionState) {
        let mut flight = self.flight.lock();
        if let Some(pair) = next.pair() {
            flight.previous = Some(pair.english().to_string());
        }
        flight.in_flight = false;
        self.publish(next);
        guard.settled = true;
    }

    fn publish(&self, next: SessionState) -> bool {
        let mut next = Some(next);
        self.state_tx.send_if_modified(|current| match next.take() {
            Some(next) if *current != next => {
                debug!(from = current.as_str(), to = next.as_str(), "session transition");
                *current = next;
                true
            }
            _ => false,
        })
    }
}

fn is_repeat(result: &Result<WordPair, WordSourceError>, previous: Option<&str>) -> bool {
    match (result, previous) {
        (Ok(pair), Some(previous)) => pair.english() == previous,
        _ => false,
    }
}

// Abandoned fetches settle as a load failure.
struct FetchGuard<'a, S: WordSource> {
    session: &'a WordPairSession<S>,
    settled: bool,
}

impl<S: WordSource> Drop for FetchGuard<'_, S> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        warn!("word fetch abandoned before completion");
        let mut flight = self.session.flight.lock();
        flight.in_flight = false;
        self.session.publish(SessionState::load_failed());
    }
}
