use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::DiscoverError;

/// A discovered FXML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    identifier: String,
    relative_path: String,
    source: PathBuf,
}

impl ResourceEntry {
    /// Create an entry for a resource path such as `/fxml/Main.fxml`.
    pub fn new(identifier: impl Into<String>, relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        Self {
            identifier: identifier.into(),
            source: PathBuf::from(&relative_path),
            relative_path,
        }
    }

    /// Record the on-disk file the entry came from.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// File base name without extension (e.g., "Main").
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Path rooted at the anchor segment (e.g., "/fxml/Main.fxml").
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Where the file was found.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Identifier to resource mapping, unique by identifier.
///
/// Iteration follows insertion order; [`ResourceMapping::sorted`] gives the
/// identifier order used for generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceMapping {
    entries: IndexMap<String, ResourceEntry>,
}

impl ResourceMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from entries, rejecting duplicate identifiers.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ResourceEntry>,
    ) -> Result<Self, DiscoverError> {
        let mut mapping = Self::new();
        for entry in entries {
            mapping.insert(entry)?;
        }
        Ok(mapping)
    }

    pub(crate) fn insert(&mut self, entry: ResourceEntry) -> Result<(), DiscoverError> {
        if let Some(existing) = self.entries.get(entry.identifier()) {
            return Err(DiscoverError::DuplicateIdentifier {
                identifier: entry.identifier.clone(),
                first: existing.source.clone(),
                second: entry.source,
            });
        }
        self.entries.insert(entry.identifier.clone(), entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by identifier.
    pub fn get(&self, identifier: &str) -> Option<&ResourceEntry> {
        self.entries.get(identifier)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.entries.values()
    }

    /// Entries ordered by identifier.
    pub fn sorted(&self) -> Vec<&ResourceEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries() {
        let mapping = ResourceMapping::from_entries([
            ResourceEntry::new("Main", "/fxml/Main.fxml"),
            ResourceEntry::new("Settings", "/fxml/settings/Settings.fxml"),
        ])
        .unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get("Settings").unwrap().relative_path(),
            "/fxml/settings/Settings.fxml"
        );
        assert!(mapping.get("Other").is_none());
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let err = ResourceMapping::from_entries([
            ResourceEntry::new("Main", "/fxml/Main.fxml").with_source("a/fxml/Main.fxml"),
            ResourceEntry::new("Main", "/fxml/other/Main.fxml").with_source("b/fxml/Main.fxml"),
        ])
        .unwrap_err();

        let DiscoverError::DuplicateIdentifier {
            identifier,
            first,
            second,
        } = err;
        assert_eq!(identifier, "Main");
        assert_eq!(first, PathBuf::from("a/fxml/Main.fxml"));
        assert_eq!(second, PathBuf::from("b/fxml/Main.fxml"));
    }

    #[test]
    fn test_sorted_orders_by_identifier() {
        let mapping = ResourceMapping::from_entries([
            ResourceEntry::new("Settings", "/fxml/Settings.fxml"),
            ResourceEntry::new("About", "/fxml/About.fxml"),
            ResourceEntry::new("Main", "/fxml/Main.fxml"),
        ])
        .unwrap();

        let insertion: Vec<_> = mapping.iter().map(|e| e.identifier()).collect();
        assert_eq!(insertion, ["Settings", "About", "Main"]);

        let sorted: Vec<_> = mapping.sorted().iter().map(|e| e.identifier()).collect();
        assert_eq!(sorted, ["About", "Main", "Settings"]);
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = ResourceMapping::new();
        assert!(mapping.is_empty());
        assert!(mapping.sorted().is_empty());
    }
}
