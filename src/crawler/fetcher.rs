//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building an HTTP client with the configured user agent
//! - GET requests with a bounded, strictly sequential retry loop
//! - Fixed inter-attempt delay (no backoff, no jitter)

use crate::config::{FetcherConfig, SiteConfig};
use crate::CrawlError;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Builds an HTTP client with the configured user agent and timeout
///
/// # Arguments
///
/// * `site` - Source site configuration (user agent)
/// * `fetcher` - Fetch behavior configuration (per-attempt timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    site: &SiteConfig,
    fetcher: &FetcherConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(site.user_agent.clone())
        .timeout(Duration::from_secs(fetcher.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages with a bounded retry loop and returns parsed documents
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | 2xx response | Return parsed document immediately |
/// | Non-success status | Failed attempt |
/// | Timeout / connection error | Failed attempt |
/// | Attempts remain | Sleep the fixed delay, try again |
/// | Attempts exhausted | `CrawlError::FetchExhausted` |
///
/// Attempts are strictly sequential; there is never more than one request
/// in flight for a single `fetch` call.
pub struct Fetcher {
    client: Client,
    retries: u32,
    retry_delay: Duration,
}

impl Fetcher {
    /// Creates a fetcher from configuration
    pub fn new(site: &SiteConfig, config: &FetcherConfig) -> Result<Self, CrawlError> {
        let client = build_http_client(site, config)?;
        Ok(Self {
            client,
            retries: config.retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    /// Fetches a URL and parses the response body as an HTML document
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to fetch
    ///
    /// # Returns
    ///
    /// * `Ok(Html)` - Parsed document from the first successful attempt
    /// * `Err(CrawlError::FetchExhausted)` - Every attempt failed
    pub async fn fetch(&self, url: &str) -> Result<Html, CrawlError> {
        for attempt in 1..=self.retries {
            match self.try_fetch(url).await {
                Ok(body) => return Ok(Html::parse_document(&body)),
                Err(e) => {
                    tracing::warn!(
                        "Fetch attempt {}/{} failed for {}: {}",
                        attempt,
                        self.retries,
                        url,
                        e
                    );
                    if attempt < self.retries {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(CrawlError::FetchExhausted {
            url: url.to_string(),
            attempts: self.retries,
        })
    }

    /// One GET attempt; non-success status codes count as failures
    async fn try_fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.text().await
    }
}
