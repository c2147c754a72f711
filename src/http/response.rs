//! Response envelopes and request-level errors.
//!
//! # Responsibilities
//! - Define the JSON envelopes every echo route returns
//! - Map request-level failures to HTTP status codes and JSON bodies
//!
//! # Design Decisions
//! - Envelopes are plain Serde structs; field order carries no meaning
//! - Error bodies are always `{"error": "<text>"}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// `{"message": ...}`, the envelope shared by every route but POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEnvelope {
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"message": ..., "data": <body>}`, returned by POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataEnvelope {
    pub message: &'static str,
    pub data: Value,
}

/// Request-level error type.
#[derive(Debug, Error)]
pub enum EchoError {
    /// Body is not JSON, or not declared as JSON.
    #[error("invalid JSON")]
    InvalidJson,

    /// Body exceeded the configured limit.
    #[error("payload too large")]
    PayloadTooLarge,
}

impl EchoError {
    pub fn status(&self) -> StatusCode {
        match self {
            EchoError::InvalidJson => StatusCode::BAD_REQUEST,
            EchoError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shapes() {
        assert_eq!(
            serde_json::to_value(MessageEnvelope::new("hello")).unwrap(),
            json!({"message": "hello"})
        );

        let posted = DataEnvelope {
            message: "JSON received successfully",
            data: json!([1, {"a": null}]),
        };
        assert_eq!(
            serde_json::to_value(posted).unwrap(),
            json!({"message": "JSON received successfully", "data": [1, {"a": null}]})
        );
    }

    #[test]
    fn test_error_status() {
        assert_eq!(EchoError::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            EchoError::PayloadTooLarge.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
