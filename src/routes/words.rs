use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::session::state::{WordPair, NO_DATA_MESSAGE};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct WordQuery {
    exclude: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// Random pair, or the literal empty marker when the vocabulary has none.
pub async fn get_word(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Response {
    let exclude = query.exclude.as_deref().filter(|v| !v.trim().is_empty());

    match state.vocabulary().random_pair(exclude) {
        Some(pair) => {
            tracing::debug!(english = pair.english(), "serving word pair");
            Json::<WordPair>(pair).into_response()
        }
        None => Json(MessageResponse {
            message: NO_DATA_MESSAGE,
        })
        .into_response(),
    }
}
