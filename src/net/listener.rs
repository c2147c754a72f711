//! TCP listener setup.
//!
//! # Responsibilities
//! - Parse the configured bind address
//! - Bind a Tokio listener, reporting failures as `ListenerError`

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The bind address did not parse.
    #[error("Invalid bind address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind to the given address.
pub async fn bind(address: &str) -> Result<TcpListener, ListenerError> {
    let addr: SocketAddr = address.parse().map_err(|source| ListenerError::Address {
        address: address.to_string(),
        source,
    })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { address: addr, source })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
