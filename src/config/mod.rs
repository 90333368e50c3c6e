//! Configuration module for Campus-Roster
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. The configuration file is optional: every field has a production
//! default, so the crawler runs with no arguments at all.
//!
//! # Example
//!
//! ```no_run
//! use campus_roster::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("roster.toml")).unwrap();
//! println!("Crawling {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::load_config;
