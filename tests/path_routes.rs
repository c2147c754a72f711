//! Router-level tests for the `path` deployment.

mod common;

use axum::http::StatusCode;
use request_echo::Deployment;
use serde_json::json;

use common::{expect_json, get, send};

#[tokio::test]
async fn path_message_echoes_segment() {
    let response = send(Deployment::Path, get("/message/hello")).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body, json!({"message": "hello"}));
}

#[tokio::test]
async fn path_message_is_percent_decoded() {
    let response = send(Deployment::Path, get("/message/hello%20there")).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body, json!({"message": "hello there"}));
}

#[tokio::test]
async fn api_routes_are_absent() {
    let response = send(Deployment::Path, get("/api/message?message=hi")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_segment_is_404() {
    let response = send(Deployment::Path, get("/message/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_405() {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/message/hello")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(Deployment::Path, request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
