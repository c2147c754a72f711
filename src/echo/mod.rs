//! The request-echo service.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → routes.rs (method + path pattern → handler, per deployment)
//!     → handlers.rs (extract one field, wrap it in an envelope)
//!     → JSON response with the route's fixed status
//! ```
//!
//! # Design Decisions
//! - Handlers are stateless; identical input gives identical output
//! - The route table is fixed at startup, one table per deployment
//! - Unknown paths and methods fall through to axum's 404 / 405

pub mod handlers;
pub mod routes;

pub use routes::router;
