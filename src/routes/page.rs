use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::response::AppError;
use crate::session::WordPairSession;
use crate::state::AppState;
use crate::view::{render_page, ViewModel};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    previous: Option<String>,
}

/// `?previous=<english>` is sent back by the "Next Word" form.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let session = WordPairSession::with_repeat_retries(
        Arc::clone(state.vocabulary()),
        state.repeat_retries(),
    );

    let previous = query
        .previous
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let session = match previous {
        Some(english) => session.remembering(english),
        None => session,
    };

    let loaded = if session.previous_english().is_some() {
        session.request_next_word().await
    } else {
        session.initialize().await
    }
    .map_err(|err| AppError::internal(err.to_string()))?;

    let view = ViewModel::from_state(&loaded);
    Ok(Html(render_page(state.app_title(), &view)))
}
