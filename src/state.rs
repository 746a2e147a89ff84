use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::config::Config;
use crate::services::vocabulary::VocabularyStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    vocabulary: Arc<VocabularyStore>,
    app_title: Arc<str>,
    repeat_retries: u32,
}

impl AppState {
    pub fn new(vocabulary: Arc<VocabularyStore>, config: &Config) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            vocabulary,
            app_title: Arc::from(config.app_title.as_str()),
            repeat_retries: config.repeat_retries,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn vocabulary(&self) -> &Arc<VocabularyStore> {
        &self.vocabulary
    }

    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    pub fn repeat_retries(&self) -> u32 {
        self.repeat_retries
    }
}
