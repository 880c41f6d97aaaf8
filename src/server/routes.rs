//! Route definitions

use axum::{
    middleware,
    routing::{any, get},
    Router,
};

use super::handlers::{self, AppState};

/// Create the router: the shorts handler on `route`, plus `/health`
pub fn create_router(state: AppState, route: &str) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(route, any(handlers::shorts))
        .layer(middleware::map_response(handlers::cors_headers))
        .with_state(state)
}
