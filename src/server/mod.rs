//! HTTP listener glue for the negotiator.
//!
//! The listener is an external capability from the negotiator's point of
//! view: it accepts a request, invokes the negotiator, and delivers the
//! resulting envelope. This module provides that capability with axum.
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ServerConfig`] | Port, route, and validator configuration |
//! | [`app`] | Router serving the negotiated route for any method |
//! | [`run_server`] | Bind the listener and serve until shutdown |

mod config;
mod handlers;
mod router;

pub use config::ServerConfig;
pub use handlers::handle_echo;
pub use router::{app, run_server};
