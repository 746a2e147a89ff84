pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod session;
pub mod state;
pub mod view;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::services::vocabulary::VocabularyStore;
use crate::state::AppState;

pub fn create_app(config: &Config) -> axum::Router {
    let vocabulary = seed::seed_vocabulary(config.words_file.as_deref());
    create_app_with_vocabulary(config, VocabularyStore::new(vocabulary))
}

pub fn create_app_with_vocabulary(config: &Config, vocabulary: VocabularyStore) -> axum::Router {
    let state = AppState::new(Arc::new(vocabulary), config);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
