//! HTTP endpoint
//!
//! An axum server exposing one stateless scan handler. Each request runs
//! the full pipeline in [`ShortsService::scan`] and shares nothing with
//! other requests.

mod handlers;
mod routes;
mod service;
mod types;

pub use handlers::{cors_headers, health, shorts, AppState};
pub use routes::create_router;
pub use service::{Outcome, ShortsService};
pub use types::{ErrorResponse, HealthResponse, ShortsRequest, ShortsResponse, CONSENT_MESSAGE};

use crate::config::Config;
use crate::{ConfigError, ScoutError};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Runs the HTTP server until Ctrl-C
///
/// # Arguments
///
/// * `config` - A validated configuration
///
/// # Returns
///
/// * `Ok(())` - Server shut down cleanly
/// * `Err(ScoutError)` - Startup or I/O failure
pub async fn serve(config: Config) -> Result<(), ScoutError> {
    let addr: SocketAddr = config.server.listen_addr.parse().map_err(|e| {
        ConfigError::Validation(format!(
            "listen_addr '{}' is not a socket address: {}",
            config.server.listen_addr, e
        ))
    })?;
    let route = config.server.route.clone();

    let state = AppState::new(ShortsService::new(config)?);
    let app = create_router(state, &route);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}{}", addr, route);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
