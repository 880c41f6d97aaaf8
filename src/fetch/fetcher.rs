//! HTTP fetcher implementation
//!
//! This module handles the single outbound request the scout makes per
//! invocation, including:
//! - Building HTTP clients with the configured browser headers
//! - Attaching the caller's cookie header to every hop
//! - Redirect handling
//! - Error classification

use crate::config::FetchConfig;
use crate::{ConfigError, ScoutError};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, LOCATION, USER_AGENT,
};
use reqwest::{redirect::Policy, Client};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// A fully buffered page response
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the body was served from, after redirects
    pub final_url: Url,

    /// HTTP status code of the final response
    pub status_code: u16,

    /// Every redirect target followed, in order
    pub redirects: Vec<Url>,

    /// Page body decoded as text
    pub body: String,
}

/// Builds an HTTP client with the configured header set and timeouts
///
/// Redirects are disabled on the client itself; [`fetch_page`] follows them
/// by hand so that the hop limit and the cookie header stay under our
/// control.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(ScoutError)` - A header value was not valid, or the client failed to build
///
/// # Example
///
/// ```no_run
/// use shorts_scout::config::FetchConfig;
/// use shorts_scout::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, ScoutError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, header_value("user_agent", &config.user_agent)?);
    headers.insert(ACCEPT, header_value("accept", &config.accept)?);
    headers.insert(
        ACCEPT_LANGUAGE,
        header_value("accept_language", &config.accept_language)?,
    );

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::none()) // Handle redirects manually
        .https_only(config.https_only)
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue, ScoutError> {
    HeaderValue::from_str(value).map_err(|e| {
        ConfigError::Validation(format!("{} is not a valid header value: {}", field, e)).into()
    })
}

/// Fetches a page, following redirects, and buffers the whole body
///
/// # Request Flow
///
/// 1. Send GET with the client's fixed headers plus `Cookie` (if non-empty)
/// 2. On a 3xx carrying `Location`, resolve the target against the current
///    URL and repeat with the same cookie header
/// 3. Any other response (including a 3xx without `Location`) is final and
///    its body is returned regardless of status
///
/// | Condition | Result |
/// |-----------|--------|
/// | Transport failure | `Http` |
/// | Timeout | `Timeout` |
/// | More than `max_redirects` hops | `RedirectLimit` |
/// | Redirect to an already visited URL | `RedirectLoop` |
/// | Unusable `Location` value | `InvalidRedirect` |
pub async fn fetch_page(
    client: &Client,
    url: &str,
    cookie_header: Option<&str>,
    max_redirects: u32,
) -> Result<FetchedPage, ScoutError> {
    let start = Url::parse(url)?;
    let cookie_header = cookie_header.filter(|c| !c.is_empty());

    let mut current = start.clone();
    let mut visited: HashSet<String> = HashSet::from([start.to_string()]);
    let mut redirects = Vec::new();

    loop {
        let mut request = client.get(current.clone());
        if let Some(cookie) = cookie_header {
            request = request.header(COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_error(&current, e))?;
        let status = response.status();

        if status.is_redirection() {
            if let Some(location) = response.headers().get(LOCATION) {
                let location = location.to_str().map_err(|_| ScoutError::InvalidRedirect {
                    url: current.to_string(),
                    location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
                })?;
                let next = current
                    .join(location)
                    .map_err(|_| ScoutError::InvalidRedirect {
                        url: current.to_string(),
                        location: location.to_string(),
                    })?;

                if redirects.len() as u32 >= max_redirects {
                    return Err(ScoutError::RedirectLimit {
                        url: start.to_string(),
                        limit: max_redirects,
                    });
                }

                if !visited.insert(next.to_string()) {
                    return Err(ScoutError::RedirectLoop {
                        url: next.to_string(),
                    });
                }

                tracing::debug!("Redirect {} {} -> {}", status.as_u16(), current, next);
                redirects.push(next.clone());
                current = next;
                continue;
            }
        }

        if !status.is_success() {
            tracing::warn!("Fetched {} with status {}", current, status.as_u16());
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_error(&current, e))?;

        tracing::debug!(
            "Fetched {} ({} bytes, {} redirects)",
            current,
            body.len(),
            redirects.len()
        );

        return Ok(FetchedPage {
            final_url: current,
            status_code: status.as_u16(),
            redirects,
            body,
        });
    }
}

/// Fetches a page and returns only its body
pub async fn fetch_html(
    client: &Client,
    url: &str,
    cookie_header: Option<&str>,
    max_redirects: u32,
) -> Result<String, ScoutError> {
    fetch_page(client, url, cookie_header, max_redirects)
        .await
        .map(|page| page.body)
}

fn classify_error(url: &Url, error: reqwest::Error) -> ScoutError {
    if error.is_timeout() {
        ScoutError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScoutError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
