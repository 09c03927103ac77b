use std::sync::Arc;

use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use user_service::{app, app_with_repository, InMemoryUserRepository, User};

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

fn get_users() -> Request<String> {
    Request::builder()
        .uri("/users")
        .body(String::new())
        .unwrap()
}

#[tokio::test]
async fn list_users_returns_seeded_dataset() {
    let resp = app().oneshot(get_users()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0], User { id: 1, name: "Alice".to_string() });
    assert_eq!(users[1], User { id: 2, name: "Bob".to_string() });
}

#[tokio::test]
async fn list_users_body_is_the_canonical_json_array() {
    let resp = app().oneshot(get_users()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_bytes(resp).await;
    assert_eq!(body, r#"[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]"#);
}

#[tokio::test]
async fn list_users_is_stable_across_requests() {
    let first: Vec<User> = body_json(app().oneshot(get_users()).await.unwrap()).await;
    let second: Vec<User> = body_json(app().oneshot(get_users()).await.unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_repository_serves_empty_array() {
    let app = app_with_repository(Arc::new(InMemoryUserRepository::new(Vec::new())));
    let resp = app.oneshot(get_users()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}
