//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → tracing events (info lines for POST/PUT/DELETE)
//!     → TraceLayer request spans
//!
//! Consumers (logging.rs):
//!     → stdout (human readable)
//!     → append-only log file (plain text, one line per event)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every span via the x-request-id header
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::{init_logging, LoggingError};
