//! revalid_rs: HTTP conditional-cache negotiation in Rust.
//!
//! This crate implements the server side of HTTP cache revalidation:
//!
//! - **core**: validator types, header grammar, and the negotiator that
//!   decides between a fresh 200 and a 304 not-modified signal.
//! - **server**: axum glue that binds a listener, feeds requests to the
//!   negotiator, and writes the resulting envelope.
//!
//! The negotiator itself is stateless and listener-agnostic: it consumes a
//! [`RequestSnapshot`] and produces a [`ResponseEnvelope`], so it is
//! callable from a single-threaded event loop or a pooled-worker runtime
//! alike.

pub mod core;
pub mod server;

// Top-level re-exports for common usage
pub use crate::core::error::{Result, RevalidError};
pub use crate::core::negotiator::CacheNegotiator;
pub use crate::core::types;
pub use crate::core::types::{CacheValidator, NegotiationResult, RequestSnapshot, ResponseEnvelope};

pub use crate::server::{run_server, ServerConfig};
