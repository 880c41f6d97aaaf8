//! HTTP handlers for the shorts endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::service::{Outcome, ShortsService};
use super::types::{
    ErrorResponse, HealthResponse, ShortsRequest, ShortsResponse, CONSENT_MESSAGE,
};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ShortsService>,
}

impl AppState {
    pub fn new(service: ShortsService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Shorts endpoint, bound to every method
///
/// `OPTIONS` is answered with an empty 200. Anything else runs one scan,
/// taking cookies from the body when it is a JSON object carrying them.
pub async fn shorts(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let request = ShortsRequest::from_body(&body);
    if request.cookies_content.is_none() && !body.is_empty() {
        tracing::debug!("No cookie payload in {} byte request body", body.len());
    }

    match state.service.scan(request.cookies_content.as_deref()).await {
        Ok(Outcome::Items(items)) => {
            (StatusCode::OK, Json(ShortsResponse::new(items))).into_response()
        }
        Ok(Outcome::ConsentWall) => {
            (StatusCode::OK, Json(ErrorResponse::new(CONSENT_MESSAGE))).into_response()
        }
        Err(e) => {
            tracing::error!("Scan failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Adds permissive CORS headers to every response
pub async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
