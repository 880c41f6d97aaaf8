//! Shorts-Scout: a homepage shorts scraper
//!
//! This crate fetches a video-platform homepage, pulls the embedded
//! bootstrap JSON out of the returned HTML and walks it to collect
//! short-form video entries. It is exposed as a single stateless HTTP
//! endpoint and as a one-shot CLI command.

pub mod config;
pub mod cookies;
pub mod extract;
pub mod fetch;
pub mod server;

use thiserror::Error;

/// Main error type for Shorts-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Too many redirects from {url} (limit {limit})")]
    RedirectLimit { url: String, limit: u32 },

    #[error("Redirect loop detected at {url}")]
    RedirectLoop { url: String },

    #[error("Invalid redirect location '{location}' from {url}")]
    InvalidRedirect { url: String, location: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Could not find YouTube data. IP might be blocked or layout changed.")]
    ExtractionFailed,

    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Malformed embedded data: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Shorts-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

// Re-export commonly used types
pub use config::Config;
pub use cookies::normalize_cookies;
pub use extract::{extract_shorts, ItemKind, ShortItem};
pub use fetch::{build_http_client, fetch_html};
pub use server::{Outcome, ShortsService};
