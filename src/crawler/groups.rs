//! Nested faculty/course strategy for the group listing
//!
//! Groups are not listed flat: the schedule section is partitioned by
//! faculty, and each faculty page is further parameterized by course year
//! (1 through 6). The strategy discovers the faculty identifiers from the
//! schedule seed page, then visits every faculty × course combination.
//!
//! Some combinations legitimately do not exist (a faculty without a sixth
//! year simply 404s), so a failed combination is recorded and skipped
//! rather than ending the crawl. Only failure to load the seed page is
//! fatal to the whole strategy.

use crate::catalog::{EntityCatalog, Entry};
use crate::crawler::extract::{extract_entries, parse_selector};
use crate::crawler::fetcher::Fetcher;
use crate::CrawlError;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Faculty links on the schedule seed page
const FACULTY_LINK_RULE: &str = r#"a[href^="/rasp/faculty/"]"#;

/// Identifier embedded in a faculty href, e.g. `/rasp/faculty/492685242`
const FACULTY_ID_PATTERN: &str = r"/rasp/faculty/(\d+)";

/// Group links on a faculty page
const GROUP_LINK_RULE: &str = r#"a[href*="groupId="]"#;

/// Identifier embedded in a group href, e.g. `?groupId=530996`
const GROUP_ID_PATTERN: &str = r"groupId=(\d+)";

/// Course years iterated within each faculty
const COURSE_RANGE: RangeInclusive<u8> = 1..=6;

/// Outcome of one faculty/course page visit
///
/// Failures are carried as data, not propagated: a missing course page
/// must not prevent sibling combinations from being attempted.
enum CourseOutcome {
    Entries(Vec<Entry>),
    Skipped(CrawlError),
}

/// Crawls every faculty × course combination into one catalog
///
/// # Arguments
///
/// * `fetcher` - Fetch primitive to use for every page
/// * `base_url` - Site base URL, no trailing slash
///
/// # Returns
///
/// * `Ok(EntityCatalog)` - Merged entries from every reachable combination
/// * `Err(CrawlError)` - The seed page could not be loaded
pub async fn crawl_groups(fetcher: &Fetcher, base_url: &str) -> Result<EntityCatalog, CrawlError> {
    let group_selector = parse_selector(GROUP_LINK_RULE)?;
    let id_pattern = Regex::new(GROUP_ID_PATTERN)?;

    let faculties = discover_faculties(fetcher, base_url).await?;
    tracing::info!("Discovered {} faculties", faculties.len());

    let mut catalog = EntityCatalog::new();
    for faculty in &faculties {
        for course in COURSE_RANGE {
            let url = format!("{}/rasp/faculty/{}?course={}", base_url, faculty, course);
            match visit_course(fetcher, &url, &group_selector, &id_pattern).await {
                CourseOutcome::Entries(entries) => {
                    tracing::debug!(
                        "Faculty {} course {}: {} entries",
                        faculty,
                        course,
                        entries.len()
                    );
                    catalog.merge(entries);
                }
                CourseOutcome::Skipped(reason) => {
                    tracing::warn!("Skipping faculty {} course {}: {}", faculty, course, reason);
                }
            }
        }
    }

    Ok(catalog)
}

/// Collects the deduplicated faculty identifier set from the seed page
///
/// Iteration order of the set is not part of the contract; it only decides
/// which entry wins when two faculties list a group under the same name.
async fn discover_faculties(
    fetcher: &Fetcher,
    base_url: &str,
) -> Result<BTreeSet<u64>, CrawlError> {
    let link_selector = parse_selector(FACULTY_LINK_RULE)?;
    let id_pattern = Regex::new(FACULTY_ID_PATTERN)?;

    let document = fetcher.fetch(&format!("{}/rasp", base_url)).await?;
    Ok(faculty_ids(&document, &link_selector, &id_pattern))
}

/// Pattern-matches faculty identifiers out of the selected links
fn faculty_ids(document: &Html, link_selector: &Selector, id_pattern: &Regex) -> BTreeSet<u64> {
    let mut ids = BTreeSet::new();
    for element in document.select(link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(captures) = id_pattern.captures(href) else {
            continue;
        };
        if let Ok(id) = captures[1].parse() {
            ids.insert(id);
        }
    }
    ids
}

/// Visits one faculty/course page, isolating any failure into the outcome
async fn visit_course(
    fetcher: &Fetcher,
    url: &str,
    selector: &Selector,
    id_pattern: &Regex,
) -> CourseOutcome {
    match fetcher.fetch(url).await {
        Ok(document) => CourseOutcome::Entries(extract_entries(&document, selector, id_pattern)),
        Err(e) => CourseOutcome::Skipped(e),
    }
}
