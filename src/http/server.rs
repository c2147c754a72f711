//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router for the configured deployment
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Body limit is enforced while extracting, so oversized bodies get the
//!   same JSON error envelope as other body failures
//! - Serve on a bound listener until shutdown is signalled

use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::EchoConfig;
use crate::echo;
use crate::http::request::{MakeUuidRequestId, X_REQUEST_ID};

/// HTTP server for the echo service.
pub struct HttpServer {
    router: Router,
    config: EchoConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &EchoConfig) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeUuidRequestId))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(&X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        echo::router(config.deployment)
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(middleware)
    }

    /// Run the server until a shutdown message arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            deployment = %self.config.deployment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }
}
