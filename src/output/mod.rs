//! Output module for persisting crawl results
//!
//! A catalog is serialized as one JSON object mapping display names to
//! identifier strings, with human-readable indentation and non-ASCII
//! characters preserved literally.

use crate::catalog::EntityCatalog;
use crate::CrawlError;
use std::path::Path;

/// Writes a catalog to disk as pretty-printed JSON
///
/// # Arguments
///
/// * `path` - Destination file, overwritten if present
/// * `catalog` - The mapping to persist
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(CrawlError)` - Serialization or IO failure
pub fn write_catalog(path: &Path, catalog: &EntityCatalog) -> Result<(), CrawlError> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Entry;
    use std::collections::BTreeMap;
    use tempfile::NamedTempFile;

    #[test]
    fn test_round_trip_preserves_non_ascii() {
        let mut catalog = EntityCatalog::new();
        catalog.insert(Entry {
            name: "Иванов И. И.".to_string(),
            id: "12345".to_string(),
        });

        let file = NamedTempFile::new().unwrap();
        write_catalog(file.path(), &catalog).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        // Cyrillic must land in the file literally, not as \u escapes
        assert!(written.contains("Иванов И. И."));
        assert!(!written.contains("\\u"));

        let parsed: BTreeMap<String, String> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["Иванов И. И."], "12345");
    }

    #[test]
    fn test_output_is_indented() {
        let mut catalog = EntityCatalog::new();
        catalog.insert(Entry {
            name: "A".to_string(),
            id: "1".to_string(),
        });
        catalog.insert(Entry {
            name: "B".to_string(),
            id: "2".to_string(),
        });

        let file = NamedTempFile::new().unwrap();
        write_catalog(file.path(), &catalog).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("  \"A\": \"1\""));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_empty_catalog_writes_empty_object() {
        let file = NamedTempFile::new().unwrap();
        write_catalog(file.path(), &EntityCatalog::new()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written.trim(), "{}");
    }
}
