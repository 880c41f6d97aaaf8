//! The request pipeline
//!
//! One scan normalizes the caller's cookies, fetches the target page,
//! checks for a consent wall and extracts the entries. Nothing is shared
//! between scans apart from the immutable client and configuration.

use crate::config::Config;
use crate::cookies::normalize_cookies;
use crate::extract::{build_locator, extract_shorts, JsonLocator, ShortItem};
use crate::fetch::{build_http_client, fetch_page};
use crate::ScoutError;
use reqwest::Client;

/// Result of a scan that reached the target page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Entries found on the page, possibly none
    Items(Vec<ShortItem>),

    /// The site served a consent/interstitial page instead of content
    ConsentWall,
}

/// Runs scans against the configured target page
pub struct ShortsService {
    config: Config,
    client: Client,
    locator: Box<dyn JsonLocator>,
}

impl ShortsService {
    /// Creates a service, building the HTTP client and locator up front
    ///
    /// # Arguments
    ///
    /// * `config` - A validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(ShortsService)` - Ready to scan
    /// * `Err(ScoutError)` - Client or locator construction failed
    pub fn new(config: Config) -> Result<Self, ScoutError> {
        let client = build_http_client(&config.fetch)?;
        let locator = build_locator(config.extract.locator)?;
        Ok(Self {
            config,
            client,
            locator,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one scan
    ///
    /// # Arguments
    ///
    /// * `cookies_content` - Raw Netscape cookie file text, if the caller sent any
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome::Items)` - The page was parsed
    /// * `Ok(Outcome::ConsentWall)` - A consent page came back instead
    /// * `Err(ScoutError)` - Fetch or extraction failed
    pub async fn scan(&self, cookies_content: Option<&str>) -> Result<Outcome, ScoutError> {
        let cookie_header = cookies_content
            .map(normalize_cookies)
            .filter(|header| !header.is_empty());

        let fetch = &self.config.fetch;
        let page = fetch_page(
            &self.client,
            &fetch.target_url,
            cookie_header.as_deref(),
            fetch.max_redirects,
        )
        .await?;

        if let Some(marker) = self.consent_marker(page.final_url.as_str(), &page.body) {
            tracing::warn!("Consent page detected at {} (marker '{}')", page.final_url, marker);
            return Ok(Outcome::ConsentWall);
        }

        let items = match extract_shorts(
            &page.body,
            self.locator.as_ref(),
            &self.config.extract.site_origin,
        ) {
            Ok(items) => items,
            Err(ScoutError::ExtractionFailed) => {
                tracing::warn!(
                    "No embedded data found in {} ({} bytes)",
                    page.final_url,
                    page.body.len()
                );
                return Err(ScoutError::ExtractionFailed);
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            "Scanned {} (cookies: {}): {} items",
            page.final_url,
            cookie_header.is_some(),
            items.len()
        );

        Ok(Outcome::Items(items))
    }

    /// Returns the first consent marker present in the final URL or body
    fn consent_marker(&self, final_url: &str, body: &str) -> Option<&str> {
        self.config
            .extract
            .consent_markers
            .iter()
            .map(String::as_str)
            .find(|marker| final_url.contains(marker) || body.contains(marker))
    }
}
