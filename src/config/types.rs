use serde::Deserialize;

/// Browser user agent sent with every outbound request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// `Accept` header sent with every outbound request
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// `Accept-Language` header sent with every outbound request
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

pub const DEFAULT_TARGET_URL: &str = "https://www.youtube.com/";
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.youtube.com";

/// Main configuration structure for Shorts-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// HTTP endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the endpoint binds to
    #[serde(rename = "listen-addr")]
    pub listen_addr: String,

    /// Path the shorts handler is mounted on
    pub route: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            route: "/api".to_string(),
        }
    }
}

/// Outbound fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Homepage fetched on every request
    #[serde(rename = "target-url")]
    pub target_url: String,

    #[serde(rename = "user-agent")]
    pub user_agent: String,

    pub accept: String,

    #[serde(rename = "accept-language")]
    pub accept_language: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of redirect hops followed before giving up
    #[serde(rename = "max-redirects")]
    pub max_redirects: u32,

    /// Refuse plain-http URLs, including redirect targets
    #[serde(rename = "https-only")]
    pub https_only: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
            https_only: true,
        }
    }
}

/// Which strategy is used to find the embedded JSON in a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocatorKind {
    /// Non-greedy regex over the raw document
    #[default]
    Regex,
    /// Parse the document and scan `<script>` bodies
    ScriptTag,
}

/// Extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Origin prepended to relative video paths (no trailing slash)
    #[serde(rename = "site-origin")]
    pub site_origin: String,

    pub locator: LocatorKind,

    /// Substrings that identify a consent/interstitial page
    #[serde(rename = "consent-markers")]
    pub consent_markers: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            locator: LocatorKind::Regex,
            consent_markers: vec!["consent.youtube.com".to_string()],
        }
    }
}
