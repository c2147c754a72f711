//! Shared helpers for router and server tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use request_echo::{Deployment, EchoConfig, HttpServer};
use tower::ServiceExt;

/// The full middleware-wrapped router for a deployment.
pub fn app(deployment: Deployment) -> Router {
    HttpServer::build_router(&EchoConfig::for_deployment(deployment))
}

/// Send one request through a fresh router.
pub async fn send(deployment: Deployment, request: Request<Body>) -> Response {
    app(deployment).oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Read the body and parse it as JSON.
pub async fn parse_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|e| panic!("Expected valid JSON body: {e}"))
}

/// Raw body bytes, for byte-level comparisons.
#[allow(dead_code)]
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Assert status and `application/json` content type, then return the JSON body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let ct = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap_or(""))
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "Expected application/json content-type, got: {ct}"
    );
    parse_json(response).await
}
