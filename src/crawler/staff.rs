//! Flat pagination strategy for the staff listing
//!
//! The staff directory is a single listing split over numbered pages. The
//! strategy discovers the page count from the pagination control on the
//! seed page, then walks pages 1..=count in order, merging extracted
//! entries into one catalog. Page fetch failures are fatal here: pagination
//! pages are assumed uniformly reachable, unlike the faculty/course pages
//! of the nested strategy.

use crate::catalog::EntityCatalog;
use crate::crawler::extract::{extract_entries, parse_selector};
use crate::crawler::fetcher::Fetcher;
use crate::CrawlError;
use regex::Regex;
use scraper::{Html, Selector};

/// Anchors that carry one staff member each
const STAFF_LINK_RULE: &str = "li.list-group-item a[href]";

/// Identifier embedded in a staff profile href, e.g. `/staff/12345-petrov-p-p`
const STAFF_ID_PATTERN: &str = r"/staff/(\d+)-";

/// Pagination control on the seed page
const PAGINATION_RULE: &str = "ul.pagination";

/// Crawls the whole staff listing into one catalog
///
/// # Arguments
///
/// * `fetcher` - Fetch primitive to use for every page
/// * `base_url` - Site base URL, no trailing slash
///
/// # Returns
///
/// * `Ok(EntityCatalog)` - Merged entries from every listing page
/// * `Err(CrawlError)` - Any page fetch exhausted its retries
pub async fn crawl_staff(fetcher: &Fetcher, base_url: &str) -> Result<EntityCatalog, CrawlError> {
    let link_selector = parse_selector(STAFF_LINK_RULE)?;
    let pagination_selector = parse_selector(PAGINATION_RULE)?;
    let item_selector = parse_selector("li")?;
    let id_pattern = Regex::new(STAFF_ID_PATTERN)?;

    let page_count = {
        let seed = fetcher.fetch(&format!("{}/staff", base_url)).await?;
        declared_page_count(&seed, &pagination_selector, &item_selector).unwrap_or(1)
    };
    tracing::info!("Staff listing spans {} page(s)", page_count);

    let mut catalog = EntityCatalog::new();
    for page in 1..=page_count {
        let url = format!("{}/staff?page={}&letter=0", base_url, page);
        let entries = {
            let document = fetcher.fetch(&url).await?;
            extract_entries(&document, &link_selector, &id_pattern)
        };
        tracing::debug!("Staff page {}: {} entries", page, entries.len());
        catalog.merge(entries);
    }

    Ok(catalog)
}

/// Reads the page count declared by the pagination control
///
/// The control lists page links with "previous"/"next" items at the ends,
/// so with more than two items the second-to-last one names the last page.
/// Returns `None` when the control is absent, too short, or its text is
/// not an integer; the caller treats that as a single-page listing.
fn declared_page_count(
    document: &Html,
    pagination_selector: &Selector,
    item_selector: &Selector,
) -> Option<u32> {
    let control = document.select(pagination_selector).next()?;
    let items: Vec<_> = control.select(item_selector).collect();
    if items.len() <= 2 {
        return None;
    }

    let text = items[items.len() - 2].text().collect::<String>();
    text.trim().parse().ok()
}
