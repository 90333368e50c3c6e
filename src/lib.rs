//! Campus-Roster: a staff and study-group directory scraper
//!
//! This crate crawls a university site's public listings and persists two
//! name-to-identifier mappings: one for staff members, one for study groups.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for crawl and persistence operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("All {attempts} fetch attempts failed for {url}")]
    FetchExhausted { url: String, attempts: u32 },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid selector rule: {0}")]
    Selector(String),

    #[error("Invalid identifier pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

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

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{Entry, EntityCatalog};
pub use config::Config;
pub use crawler::Fetcher;
