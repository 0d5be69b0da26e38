//! Router assembly and listener bootstrap.

use super::config::ServerConfig;
use super::handlers::handle_echo;
use crate::core::negotiator::CacheNegotiator;
use anyhow::Result;
use axum::{routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;

/// Build the router: the negotiated route accepts any method.
///
/// The negotiator is shared as immutable state; there is nothing to lock.
#[must_use]
pub fn app(config: &ServerConfig) -> Router {
    let negotiator = Arc::new(CacheNegotiator::new(config.validator.clone()));
    Router::new()
        .route(&config.route, any(handle_echo))
        .with_state(negotiator)
}

/// Bind the listener and serve until shutdown.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let app = app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
