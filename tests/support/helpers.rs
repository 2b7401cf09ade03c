// tests/support/helpers.rs
use super::builders::seeded_db;
use super::mocks::InMemoryDb;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use newsboard::application::services::ApplicationServices;
use newsboard::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    comment::CommentRepository,
    listing::ListDefaults,
    topic::TopicRepository,
    user::UserRepository,
};
use newsboard::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_services(db: &InMemoryDb) -> Arc<ApplicationServices> {
    let article_read: Arc<dyn ArticleReadRepository> = Arc::new(db.clone());
    let article_write: Arc<dyn ArticleWriteRepository> = Arc::new(db.clone());
    let comment_repo: Arc<dyn CommentRepository> = Arc::new(db.clone());
    let topic_repo: Arc<dyn TopicRepository> = Arc::new(db.clone());
    let user_repo: Arc<dyn UserRepository> = Arc::new(db.clone());

    Arc::new(ApplicationServices::new(
        article_read,
        article_write,
        comment_repo,
        topic_repo,
        user_repo,
        ListDefaults::default(),
    ))
}

pub fn build_test_state(db: &InMemoryDb) -> HttpState {
    HttpState {
        services: build_services(db),
    }
}

/// Router over the seeded fixture data.
pub async fn make_test_router() -> (axum::Router, InMemoryDb) {
    let db = seeded_db();
    (build_router(build_test_state(&db)), db)
}

pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a json body")
    };
    (status, json)
}

/// Assert that a response is a `{ "msg": ... }` error with the expected status and message.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_msg: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let (_, json) = read_json(resp).await;
    assert_eq!(json["msg"].as_str(), Some(expected_msg), "unexpected body: {json}");
}
