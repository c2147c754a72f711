//! Request-echo service library.
//!
//! Two small HTTP deployments that echo a request field back inside a JSON
//! envelope. See [`echo`] for the route tables.

pub mod config;
pub mod echo;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::{Deployment, EchoConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
