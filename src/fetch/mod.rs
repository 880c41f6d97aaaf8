//! Fetch module for outbound page requests
//!
//! This module contains:
//! - HTTP client construction with the browser-like header set
//! - GET requests with an optional `Cookie` header
//! - Manual redirect following with a hop limit and loop detection

mod fetcher;

pub use fetcher::{build_http_client, fetch_html, fetch_page, FetchedPage};
