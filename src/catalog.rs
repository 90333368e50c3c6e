//! Catalog types shared by both crawl strategies
//!
//! An [`Entry`] is one (display name, numeric identifier) pair extracted
//! from a link element. An [`EntityCatalog`] accumulates entries for one
//! entity kind (staff or groups) into an ordered name-to-identifier mapping.

use serde::Serialize;
use std::collections::BTreeMap;

/// One extracted (display name, identifier) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Whitespace-normalized visible text of the link
    pub name: String,

    /// Digits captured from the link target
    pub id: String,
}

/// Ordered name-to-identifier mapping for one entity kind
///
/// Keys are unique; inserting an entry whose name is already present
/// overwrites the stored identifier (last write wins). Serializes as a
/// single JSON object in key order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct EntityCatalog {
    entries: BTreeMap<String, String>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one entry, overwriting any identifier stored under the same name
    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry.name, entry.id);
    }

    /// Folds a batch of entries into the catalog, in iteration order
    pub fn merge(&mut self, entries: impl IntoIterator<Item = Entry>) {
        for entry in entries {
            self.insert(entry);
        }
    }

    /// Looks up the identifier stored under a display name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (name, identifier) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, id: &str) -> Entry {
        Entry {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = EntityCatalog::new();
        catalog.insert(entry("Smith J.", "101"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Smith J."), Some("101"));
        assert_eq!(catalog.get("Jones K."), None);
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let mut catalog = EntityCatalog::new();
        catalog.insert(entry("Smith J.", "101"));
        catalog.insert(entry("Smith J.", "202"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Smith J."), Some("202"));
    }

    #[test]
    fn test_merge_batch() {
        let mut catalog = EntityCatalog::new();
        catalog.merge(vec![
            entry("A", "1"),
            entry("B", "2"),
            entry("A", "3"), // later entry in the batch overwrites
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A"), Some("3"));
        assert_eq!(catalog.get("B"), Some("2"));
    }

    #[test]
    fn test_iteration_in_key_order() {
        let mut catalog = EntityCatalog::new();
        catalog.insert(entry("b", "2"));
        catalog.insert(entry("a", "1"));

        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
