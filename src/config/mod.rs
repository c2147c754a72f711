//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → EchoConfig (validated, immutable)
//!     → passed by value into the server bootstrap
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no global settings object
//! - All fields have defaults to allow minimal configs
//! - Bind address and log file default per deployment
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{Deployment, EchoConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
