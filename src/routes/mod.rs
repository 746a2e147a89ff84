mod health;
mod page;
mod words;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let healthcheck_endpoint = normalize_healthcheck_endpoint(
        std::env::var("HEALTHCHECK_ENDPOINT")
            .ok()
            .as_deref()
            .unwrap_or("/health"),
    );

    Router::new()
        .route("/", get(page::index).fallback(method_fallback))
        .route(
            "/api/get-word",
            get(words::get_word).fallback(method_fallback),
        )
        .route(
            "/get-word.php",
            get(words::get_word).fallback(method_fallback),
        )
        .nest(&healthcheck_endpoint, health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

fn normalize_healthcheck_endpoint(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/health".to_string();
    }

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

async fn fallback_handler() -> Response {
    AppError::not_found("Route not found").into_response()
}

async fn method_fallback() -> Response {
    AppError::method_not_allowed("Method not allowed").into_response()
}
