//! Entry extraction from anchor elements
//!
//! Given a parsed document, a CSS selection rule, and an identifier
//! pattern, this module derives (display name, identifier) pairs. Anchors
//! whose link target does not match the pattern are expected noise
//! (navigation links and the like) and are skipped silently.

use crate::catalog::Entry;
use crate::CrawlError;
use regex::Regex;
use scraper::{Html, Selector};

/// Compiles a CSS selector rule, mapping the parse error into [`CrawlError`]
pub fn parse_selector(rule: &str) -> Result<Selector, CrawlError> {
    Selector::parse(rule).map_err(|e| CrawlError::Selector(e.to_string()))
}

/// Extracts entries from every element matched by `selector`
///
/// For each matched element, the visible text is trimmed and internal
/// whitespace collapsed to form the display name; the identifier is the
/// first capture group of `id_pattern` applied to the `href` attribute.
/// Elements with no `href` or a non-matching target contribute nothing.
///
/// # Arguments
///
/// * `document` - Parsed page to read
/// * `selector` - Rule selecting candidate link elements
/// * `id_pattern` - Pattern whose first capture group is the identifier
///
/// # Returns
///
/// The materialized entry set for this document, in document order
pub fn extract_entries(document: &Html, selector: &Selector, id_pattern: &Regex) -> Vec<Entry> {
    let mut entries = Vec::new();

    for element in document.select(selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(captures) = id_pattern.captures(href) else {
            continue;
        };
        let Some(id) = captures.get(1) else {
            continue;
        };

        let name = normalize_name(&element.text().collect::<String>());
        entries.push(Entry {
            name,
            id: id.as_str().to_string(),
        });
    }

    entries
}

/// Collapses internal whitespace runs to single spaces and trims the ends
fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_pattern() -> Regex {
        Regex::new(r"/staff/(\d+)-").unwrap()
    }

    fn anchor_selector() -> Selector {
        Selector::parse("a[href]").unwrap()
    }

    #[test]
    fn test_extract_matching_anchor() {
        let html = r#"<ul><li><a href="/staff/12345-petrov">Petrov P. P.</a></li></ul>"#;
        let document = Html::parse_document(html);
        let entries = extract_entries(&document, &anchor_selector(), &staff_pattern());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Petrov P. P.");
        assert_eq!(entries[0].id, "12345");
    }

    #[test]
    fn test_name_whitespace_is_collapsed() {
        let html = "<a href=\"/staff/7-x\">\n  Petrov \t  P.   P.  \n</a>";
        let document = Html::parse_document(html);
        let entries = extract_entries(&document, &anchor_selector(), &staff_pattern());

        assert_eq!(entries[0].name, "Petrov P. P.");
    }

    #[test]
    fn test_non_matching_href_is_skipped() {
        let html = r#"
            <a href="/staff/12345-petrov">Petrov P. P.</a>
            <a href="/news/42">Latest news</a>
            <a href="/staff">All staff</a>
        "#;
        let document = Html::parse_document(html);
        let entries = extract_entries(&document, &anchor_selector(), &staff_pattern());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "12345");
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">Anchor without target</a>"#;
        let document = Html::parse_document(html);
        let selector = Selector::parse("a").unwrap();
        let entries = extract_entries(&document, &selector, &staff_pattern());

        assert!(entries.is_empty());
    }

    #[test]
    fn test_output_never_exceeds_input() {
        let html = r#"
            <a href="/staff/1-a">A</a>
            <a href="/staff/2-b">B</a>
            <a href="/other">C</a>
        "#;
        let document = Html::parse_document(html);
        let entries = extract_entries(&document, &anchor_selector(), &staff_pattern());

        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_query_parameter_pattern() {
        let pattern = Regex::new(r"groupId=(\d+)").unwrap();
        let html = r#"<a href="/rasp?groupId=530996&selectedWeek=5">2205-240502D</a>"#;
        let document = Html::parse_document(html);
        let entries = extract_entries(&document, &anchor_selector(), &pattern);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "2205-240502D");
        assert_eq!(entries[0].id, "530996");
    }

    #[test]
    fn test_parse_selector_rejects_garbage() {
        assert!(parse_selector("li.list-group-item a[href]").is_ok());
        assert!(parse_selector(":::").is_err());
    }
}
