//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! bind address from config
//!     → listener.rs (parse, bind)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal at startup; no retry

pub mod listener;

pub use listener::{bind, ListenerError};
