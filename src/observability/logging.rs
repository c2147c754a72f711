//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Mirror events to stdout and to the configured log file
//! - Configure log level from config, overridable by `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - The file sink is opened in append mode and never rotated
//! - The file layer disables ANSI colours and formats span fields with its
//!   own formatter, so cached coloured fields from stdout never reach the file

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::field::Field;
use tracing::Subscriber;
use tracing_subscriber::field::MakeExt;
use tracing_subscriber::fmt::format::{debug_fn, Writer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EchoConfig;

/// Error type for logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file '{path}': {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Default directive for our crate and the tower-http trace layer.
fn default_directive(level: &str) -> String {
    let level = level.to_lowercase();
    format!("request_echo={level},tower_http={level}")
}

/// Open the log file for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_err = |source| LoggingError::OpenLogFile {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_err)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}

/// Plain `name=value` field rendering for the log file.
fn plain_field(writer: &mut Writer<'_>, field: &Field, value: &dyn fmt::Debug) -> fmt::Result {
    if field.name() == "message" {
        write!(writer, "{:?}", value)
    } else {
        write!(writer, "{}={:?}", field, value)
    }
}

/// Stdout layer plus an uncoloured layer writing to `log_file`.
pub fn build_subscriber(filter: EnvFilter, log_file: Arc<File>) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .fmt_fields(debug_fn(plain_field).delimited(" "))
                .with_writer(log_file),
        )
}

/// Install the global subscriber: stdout plus the append-only log file.
pub fn init_logging(config: &EchoConfig) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(&config.observability.log_level))?,
    };

    let log_file = Arc::new(open_log_file(Path::new(config.log_file()))?);

    build_subscriber(filter, log_file).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Deployment;
    use crate::http::HttpServer;
    use axum::body::Body;
    use axum::http::Request;
    use std::io::Write;
    use tower::ServiceExt;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive("INFO"),
            "request_echo=info,tower_http=info"
        );
    }

    #[test]
    fn test_open_log_file_creates_parents_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("app.log");

        let mut first = open_log_file(&path).unwrap();
        writeln!(first, "first").unwrap();
        drop(first);

        let mut second = open_log_file(&path).unwrap();
        writeln!(second, "second").unwrap();
        drop(second);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[tokio::test]
    async fn test_mutating_requests_log_one_plain_line_each() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let log_file = Arc::new(open_log_file(&path).unwrap());
        let _guard = tracing::subscriber::set_default(build_subscriber(
            EnvFilter::new("request_echo=info"),
            log_file,
        ));

        let app = HttpServer::build_router(&EchoConfig::for_deployment(Deployment::Api));
        let requests = [
            Request::builder()
                .method("POST")
                .uri("/api/message")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"a":1}"#))
                .unwrap(),
            Request::builder()
                .method("PUT")
                .uri("/api/message/42")
                .body(Body::empty())
                .unwrap(),
            Request::builder()
                .method("DELETE")
                .uri("/api/message/42")
                .body(Body::empty())
                .unwrap(),
        ];
        for request in requests {
            let response = app.clone().oneshot(request).await.unwrap();
            assert!(response.status().is_success());
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches(r#"Received JSON: {"a":1}"#).count(), 1);
        assert_eq!(content.matches("PUT request with id: 42").count(), 1);
        assert_eq!(content.matches("DELETE request with id: 42").count(), 1);
        assert!(content.contains("request_id="), "span fields missing: {content}");
        assert!(!content.contains('\x1b'), "ANSI escapes in log file: {content:?}");
    }
}
