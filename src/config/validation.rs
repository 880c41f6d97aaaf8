use crate::config::types::{Config, ExtractConfig, FetchConfig, ServerConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

const MAX_REDIRECT_LIMIT: u32 = 50;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_fetch_config(&config.fetch)?;
    validate_extract_config(&config.extract)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.listen_addr.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "listen_addr '{}' is not a socket address: {}",
            config.listen_addr, e
        ))
    })?;

    if !config.route.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "route must start with '/', got '{}'",
            config.route
        )));
    }

    if config.route == "/health" {
        return Err(ConfigError::Validation(
            "route cannot be '/health', which is reserved".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.target_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid target_url: {}", e)))?;

    if config.https_only && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "target_url '{}' must use HTTPS scheme while https_only is set",
            config.target_url
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.max_redirects < 1 || config.max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be between 1 and {}, got {}",
            MAX_REDIRECT_LIMIT, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates extraction configuration
fn validate_extract_config(config: &ExtractConfig) -> Result<(), ConfigError> {
    Url::parse(&config.site_origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site_origin: {}", e)))?;

    if config.site_origin.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "site_origin must not end with '/', got '{}'",
            config.site_origin
        )));
    }

    if config.consent_markers.iter().any(|m| m.is_empty()) {
        return Err(ConfigError::Validation(
            "consent_markers cannot contain empty strings".to_string(),
        ));
    }

    Ok(())
}
