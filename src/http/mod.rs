//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, JSON body extraction)
//!     → echo routes and handlers
//!     → response.rs (envelopes, error bodies)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{JsonBody, MakeUuidRequestId, X_REQUEST_ID};
pub use response::{DataEnvelope, EchoError, MessageEnvelope};
pub use server::HttpServer;
