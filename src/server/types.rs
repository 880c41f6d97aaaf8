//! Request and response payloads for the HTTP endpoint

use crate::extract::ShortItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message returned when the site answers with a consent page
pub const CONSENT_MESSAGE: &str =
    "Consent page detected. Send valid session cookies to get past it.";

/// Body accepted by the shorts endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortsRequest {
    /// Raw Netscape `cookies.txt` text
    pub cookies_content: Option<String>,
}

impl ShortsRequest {
    /// Reads the cookie payload from a raw request body
    ///
    /// Any body that is not a JSON object with a non-empty string
    /// `cookiesContent` carries no cookies, whatever its content type.
    pub fn from_body(body: &[u8]) -> Self {
        let cookies_content = serde_json::from_slice::<Value>(body)
            .ok()
            .as_ref()
            .and_then(|value| value.get("cookiesContent"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Self { cookies_content }
    }
}

/// Successful scan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortsResponse {
    pub count: usize,
    pub data: Vec<ShortItem>,
}

impl ShortsResponse {
    pub fn new(data: Vec<ShortItem>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
}
