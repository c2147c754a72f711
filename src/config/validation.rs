//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check the bind address and log level parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EchoConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::EchoConfig;

/// Log levels accepted in `observability.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("log file path must not be empty")]
    EmptyLogFile,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &EchoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bind_address = config.bind_address();
    if bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(bind_address.to_string()));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.log_file().trim().is_empty() {
        errors.push(ValidationError::EmptyLogFile);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
