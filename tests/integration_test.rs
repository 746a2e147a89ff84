use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

mod common;

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn test_health_root() {
    let app = common::create_test_app(&[("Hello", "Hallo")]);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["words"], 1);
}

#[tokio::test]
async fn test_health_root_degraded_without_words() {
    let app = common::create_test_app(&[]);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_live_and_info() {
    let app = common::create_test_app(&[("Hello", "Hallo")]);

    let response = get(app.clone(), "/health/live").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/health/info").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["service"], "vocab-flashcards");
    assert_eq!(body["title"], "Language App");
}

#[tokio::test]
async fn test_get_word_returns_pair() {
    let app = common::create_test_app(&[("Hello", "Hallo")]);
    let response = get(app, "/api/get-word").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["english"], "Hello");
    assert_eq!(body["german"], "Hallo");
}

#[tokio::test]
async fn test_get_word_honours_exclude() {
    let app = common::create_test_app(&[("Hello", "Hallo"), ("World", "Welt")]);

    for _ in 0..10 {
        let response = get(app.clone(), "/api/get-word?exclude=Hello").await;
        let body = body_json(response).await;
        assert_eq!(body["english"], "World");
    }
}

#[tokio::test]
async fn test_get_word_empty_marker() {
    let app = common::create_test_app(&[]);
    let response = get(app, "/get-word.php").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({"message": "No data found"}));
}

#[tokio::test]
async fn test_page_shows_english_and_hides_german() {
    let app = common::create_test_app(&[("Hello", "Hallo")]);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<title>Language App</title>"));
    assert!(html.contains(r#"data-testid="english-word">Hello</p>"#));
    assert!(html.contains(r#"style="visibility: hidden">Hallo</p>"#));
    assert!(html.contains(r#"data-testid="new-word-button""#));
    assert!(html.contains(r#"data-testid="show-answer-button""#));
}

#[tokio::test]
async fn test_page_next_word_moves_on() {
    let app = common::create_test_app(&[("Hello", "Hallo"), ("World", "Welt")]);
    let response = get(app, "/?previous=Hello").await;

    let html = body_text(response).await;
    assert!(html.contains(r#"data-testid="english-word">World</p>"#));
    assert!(html.contains(r#"style="visibility: hidden">Welt</p>"#));
}

#[tokio::test]
async fn test_page_without_words_shows_error() {
    let app = common::create_test_app(&[]);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"data-testid="error-message""#));
    assert!(html.contains("No data found"));
    assert!(!html.contains(r#"class="word-pair""#));
}

#[tokio::test]
async fn test_wrong_method() {
    let app = common::create_test_app(&[("Hello", "Hallo")]);
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/get-word")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_404_not_found() {
    let app = common::create_test_app(&[("Hello", "Hallo")]);
    let response = get(app, "/nonexistent/path").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_FOUND");
}
