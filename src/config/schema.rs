//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the echo
//! service. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Which route set a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// The `/api/...` routes: query, header, JSON body, PUT and DELETE by id.
    #[default]
    Api,
    /// The single `/message/{message}` route.
    Path,
}

impl Deployment {
    /// Default listen address for this deployment.
    pub fn default_bind_address(self) -> &'static str {
        match self {
            Deployment::Api => "127.0.0.1:3031",
            Deployment::Path => "127.0.0.1:5000",
        }
    }

    /// Default log file for this deployment.
    pub fn default_log_file(self) -> &'static str {
        match self {
            Deployment::Api => "logs/app.log",
            Deployment::Path => "logs/path.log",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Deployment::Api => "api",
            Deployment::Path => "path",
        }
    }
}

impl std::fmt::Display for Deployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Deployment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "api" => Ok(Deployment::Api),
            "path" => Ok(Deployment::Path),
            other => Err(format!("unknown deployment '{}' (expected 'api' or 'path')", other)),
        }
    }
}

/// Root configuration for the echo service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EchoConfig {
    /// Route set served by this process.
    pub deployment: Deployment,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,
}

impl EchoConfig {
    /// Default configuration for the given deployment.
    pub fn for_deployment(deployment: Deployment) -> Self {
        Self {
            deployment,
            ..Self::default()
        }
    }

    /// Effective bind address: the configured one, else the deployment default.
    pub fn bind_address(&self) -> &str {
        self.listener
            .bind_address
            .as_deref()
            .unwrap_or_else(|| self.deployment.default_bind_address())
    }

    /// Effective log file: the configured one, else the deployment default.
    pub fn log_file(&self) -> &str {
        self.observability
            .log_file
            .as_deref()
            .unwrap_or_else(|| self.deployment.default_log_file())
    }
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            deployment: Deployment::default(),
            listener: ListenerConfig::default(),
            observability: ObservabilityConfig::default(),
            timeouts: TimeoutConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3031"). Unset means the deployment default.
    pub bind_address: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Append-only plain-text log file. Unset means the deployment default.
    pub log_file: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}
