//! Configuration module for Shorts-Scout
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every field has a default, so running without a file
//! reproduces the built-in browser header set and target page.
//!
//! # Example
//!
//! ```no_run
//! use shorts_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Scanning {}", config.fetch.target_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ExtractConfig, FetchConfig, LocatorKind, ServerConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
