//! Crawler module for listing traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with bounded retry
//! - Entry extraction from anchor elements
//! - The flat pagination strategy (staff listing)
//! - The nested faculty/course strategy (group listing)

mod extract;
mod fetcher;
mod groups;
mod staff;

pub use extract::{extract_entries, parse_selector};
pub use fetcher::{build_http_client, Fetcher};
pub use groups::crawl_groups;
pub use staff::crawl_staff;
