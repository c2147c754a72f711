//! Echo handlers.
//!
//! Each handler pulls one field out of the request and returns it inside a
//! JSON envelope. POST, PUT and DELETE also log what they received.

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::Json;

use crate::http::request::JsonBody;
use crate::http::response::{DataEnvelope, MessageEnvelope};

pub const DEFAULT_MESSAGE: &str = "This is a default message.";
pub const DEFAULT_CUSTOM_HEADER: &str = "No Custom Header Provided";
pub const JSON_RECEIVED: &str = "JSON received successfully";

pub const X_CUSTOM_HEADER: HeaderName = HeaderName::from_static("x-custom-header");

/// `GET /api/message?message=...`
///
/// The first `message` parameter wins when it is repeated.
pub async fn get_message(Query(params): Query<Vec<(String, String)>>) -> Json<MessageEnvelope> {
    let message = params
        .into_iter()
        .find(|(key, _)| key == "message")
        .map(|(_, value)| value)
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    Json(MessageEnvelope::new(message))
}

/// `GET /api/header-message`
pub async fn get_header_message(headers: HeaderMap) -> Json<MessageEnvelope> {
    let value = headers
        .get(X_CUSTOM_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_else(|| DEFAULT_CUSTOM_HEADER.to_string());

    Json(MessageEnvelope::new(format!("Custom header value: {}", value)))
}

/// `POST /api/message`
pub async fn post_message(JsonBody(data): JsonBody) -> (StatusCode, Json<DataEnvelope>) {
    tracing::info!("Received JSON: {}", data);

    (
        StatusCode::CREATED,
        Json(DataEnvelope {
            message: JSON_RECEIVED,
            data,
        }),
    )
}

/// `PUT /api/message/{id}`
pub async fn put_message(Path(id): Path<String>) -> Json<MessageEnvelope> {
    tracing::info!("PUT request with id: {}", id);
    Json(MessageEnvelope::new(format!("Updated resource with id: {}", id)))
}

/// `DELETE /api/message/{id}`
pub async fn delete_message(Path(id): Path<String>) -> Json<MessageEnvelope> {
    tracing::info!("DELETE request with id: {}", id);
    Json(MessageEnvelope::new(format!("Deleted resource with id: {}", id)))
}

/// `GET /message/{message}`
pub async fn get_path_message(Path(message): Path<String>) -> Json<MessageEnvelope> {
    Json(MessageEnvelope::new(message))
}
