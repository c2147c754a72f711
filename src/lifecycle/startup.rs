//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize logging from the validated configuration
//! - Bind the listener for the configured deployment
//! - Run the HTTP server until a signal arrives
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, so traffic only arrives when ready

use thiserror::Error;

use crate::config::{ConfigError, EchoConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::{self, ListenerError};
use crate::observability::{self, LoggingError};

/// Anything that can stop the service from starting or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the service and block until it shuts down.
pub async fn run(config: EchoConfig) -> Result<(), StartupError> {
    observability::init_logging(&config)?;

    tracing::info!(
        deployment = %config.deployment,
        bind_address = %config.bind_address(),
        log_file = %config.log_file(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = net::bind(config.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
