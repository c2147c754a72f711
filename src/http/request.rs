//! Request handling and extraction.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4) for every request
//! - Extract schema-free JSON bodies, mapping failures to `EchoError`
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-supplied `x-request-id` is kept, not replaced
//! - Any JSON value is accepted; there is no schema to validate against

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::Json;
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::EchoError;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// A JSON body of any shape.
///
/// Unlike `Json<Value>`, every parse failure (bad syntax, missing
/// `application/json` content type) is reported as `EchoError::InvalidJson`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = EchoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::BytesRejection(rejection))
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                Err(EchoError::PayloadTooLarge)
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected JSON body");
                Err(EchoError::InvalidJson)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde_json::json;

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_make_request_id_is_uuid() {
        let req = axum::http::Request::builder().body(()).unwrap();
        let id = MakeUuidRequestId.make_request_id(&req).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }

    #[tokio::test]
    async fn test_json_body_accepts_any_value() {
        let JsonBody(value) = JsonBody::from_request(json_request(r#"[1, "two", null]"#), &())
            .await
            .unwrap();
        assert_eq!(value, json!([1, "two", null]));
    }

    #[tokio::test]
    async fn test_json_body_rejects_bad_syntax() {
        let err = JsonBody::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, EchoError::InvalidJson));
    }

    #[tokio::test]
    async fn test_json_body_requires_content_type() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"a": 1}"#))
            .unwrap();
        let err = JsonBody::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, EchoError::InvalidJson));
    }
}
