//! Recursive FXML discovery.

use std::path::{Component, Path, PathBuf};

use fxmlgen_core::normalize_separators;
use walkdir::WalkDir;

use crate::{DiscoverError, ResourceEntry, ResourceMapping};

/// Directory name resource paths are rooted at.
pub const DEFAULT_ANCHOR: &str = "fxml";

/// Extension of the files we collect (case-sensitive).
pub const DEFAULT_EXTENSION: &str = "fxml";

/// Discover FXML files under `roots` with the default anchor and extension.
pub fn discover<P: AsRef<Path>>(
    roots: impl IntoIterator<Item = P>,
) -> Result<Discovery, DiscoverError> {
    Discoverer::default().discover(roots)
}

/// Outcome of a discovery run.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Everything found across all roots.
    pub mapping: ResourceMapping,
    /// Roots whose walk failed.
    pub skipped: Vec<SkippedRoot>,
}

/// A root whose walk was aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRoot {
    pub root: PathBuf,
    pub reason: String,
}

/// Walks resource roots and collects matching files.
#[derive(Debug, Clone)]
pub struct Discoverer {
    anchor: String,
    extension: String,
}

impl Default for Discoverer {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR, DEFAULT_EXTENSION)
    }
}

impl Discoverer {
    pub fn new(anchor: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            extension: extension.into(),
        }
    }

    /// Walk every root in order.
    ///
    /// A root that cannot be walked is logged and skipped; files already
    /// collected from it are kept. Identifier collisions fail the run.
    pub fn discover<P: AsRef<Path>>(
        &self,
        roots: impl IntoIterator<Item = P>,
    ) -> Result<Discovery, DiscoverError> {
        let mut discovery = Discovery::default();

        for root in roots {
            let root = root.as_ref();
            if let Some(skipped) = self.walk_root(root, &mut discovery.mapping)? {
                discovery.skipped.push(skipped);
            }
        }

        Ok(discovery)
    }

    fn walk_root(
        &self,
        root: &Path,
        mapping: &mut ResourceMapping,
    ) -> Result<Option<SkippedRoot>, DiscoverError> {
        tracing::debug!(root = %root.display(), "scanning resource root");

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(
                        root = %root.display(),
                        error = %err,
                        "unable to retrieve FXML resources, skipping root"
                    );
                    return Ok(Some(SkippedRoot {
                        root: root.to_path_buf(),
                        reason: err.to_string(),
                    }));
                }
            };

            if !entry.file_type().is_file() || !self.matches(entry.path()) {
                continue;
            }

            match self.resource_entry(entry.path()) {
                Some(resource) => {
                    tracing::debug!(
                        identifier = resource.identifier(),
                        path = resource.relative_path(),
                        "found FXML file"
                    );
                    mapping.insert(resource)?;
                }
                None => {
                    tracing::debug!(
                        file = %entry.path().display(),
                        anchor = %self.anchor,
                        "no anchor segment, dropping file"
                    );
                }
            }
        }

        Ok(None)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.extension.as_str())
    }

    fn resource_entry(&self, path: &Path) -> Option<ResourceEntry> {
        let identifier = path.file_stem()?.to_str()?;
        let relative_path = anchored_path(path, &self.anchor)?;
        if identifier.is_empty() || relative_path.is_empty() {
            return None;
        }
        Some(ResourceEntry::new(identifier, relative_path).with_source(path))
    }
}

/// Path from the last `anchor` segment (inclusive) to the end, with `/`
/// separators and a leading `/`.
///
/// Returns `None` when no segment equals `anchor`.
pub fn anchored_path(path: &Path, anchor: &str) -> Option<String> {
    let segments: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect();

    let start = segments.iter().rposition(|segment| segment == anchor)?;
    let joined: String = segments[start..]
        .iter()
        .flat_map(|segment| ["/", segment.as_ref()])
        .collect();
    Some(normalize_separators(&joined))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tracing_test::traced_test;

    use super::*;

    fn touch(base: &Path, rel: &str) -> PathBuf {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<?xml version=\"1.0\"?>").unwrap();
        path
    }

    #[test]
    fn test_anchored_path() {
        assert_eq!(
            anchored_path(Path::new("/p/src/main/resources/fxml/Main.fxml"), "fxml"),
            Some("/fxml/Main.fxml".to_string())
        );
        assert_eq!(
            anchored_path(Path::new("resources/fxml/settings/Settings.fxml"), "fxml"),
            Some("/fxml/settings/Settings.fxml".to_string())
        );
        assert_eq!(anchored_path(Path::new("/p/views/Main.fxml"), "fxml"), None);
    }

    #[test]
    fn test_anchored_path_uses_last_anchor() {
        assert_eq!(
            anchored_path(Path::new("/fxml/project/resources/fxml/Main.fxml"), "fxml"),
            Some("/fxml/Main.fxml".to_string())
        );
    }

    #[test]
    fn test_discovers_main_fxml() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "resources/fxml/Main.fxml");

        let discovery = discover([temp.path().join("resources/fxml")]).unwrap();

        let main = discovery.mapping.get("Main").unwrap();
        assert_eq!(main.relative_path(), "/fxml/Main.fxml");
        assert_eq!(discovery.mapping.len(), 1);
        assert!(discovery.skipped.is_empty());
    }

    #[test]
    fn test_discovers_nested_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "resources/fxml/Main.fxml");
        touch(temp.path(), "resources/fxml/settings/Settings.fxml");

        let discovery = discover([temp.path().join("resources/fxml")]).unwrap();

        assert_eq!(
            discovery.mapping.get("Settings").unwrap().relative_path(),
            "/fxml/settings/Settings.fxml"
        );
    }

    #[test]
    fn test_ignores_other_extensions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "resources/fxml/Main.fxml");
        touch(temp.path(), "resources/fxml/style.css");
        touch(temp.path(), "resources/fxml/Upper.FXML");
        touch(temp.path(), "resources/fxml/Backup.fxml.bak");
        fs::create_dir_all(temp.path().join("resources/fxml/dir.fxml")).unwrap();

        let discovery = discover([temp.path().join("resources/fxml")]).unwrap();

        let ids: Vec<_> = discovery.mapping.iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, ["Main"]);
    }

    #[test]
    fn test_drops_files_without_anchor() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "resources/views/Orphan.fxml");

        let discovery = discover([temp.path().join("resources/views")]).unwrap();

        assert!(discovery.mapping.is_empty());
        assert!(discovery.skipped.is_empty());
    }

    #[test]
    fn test_duplicate_identifier_fails() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "resources/fxml/a/Main.fxml");
        touch(temp.path(), "resources/fxml/b/Main.fxml");

        let err = discover([temp.path().join("resources/fxml")]).unwrap_err();

        let DiscoverError::DuplicateIdentifier { identifier, .. } = err;
        assert_eq!(identifier, "Main");
    }

    #[test]
    fn test_duplicate_identifier_across_roots_fails() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "one/fxml/Main.fxml");
        touch(temp.path(), "two/fxml/Main.fxml");

        let result = discover([temp.path().join("one/fxml"), temp.path().join("two/fxml")]);

        assert!(result.is_err());
    }

    #[test]
    #[traced_test]
    fn test_missing_root_is_skipped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "present/fxml/Main.fxml");
        let missing = temp.path().join("missing/fxml");

        let discovery = discover([missing.clone(), temp.path().join("present/fxml")]).unwrap();

        assert_eq!(discovery.mapping.len(), 1);
        assert_eq!(discovery.skipped.len(), 1);
        assert_eq!(discovery.skipped[0].root, missing);
        assert!(logs_contain("unable to retrieve FXML resources"));
    }

    #[test]
    fn test_all_roots_missing_yields_empty_mapping() {
        let temp = TempDir::new().unwrap();

        let discovery = discover([temp.path().join("nope")]).unwrap();

        assert!(discovery.mapping.is_empty());
        assert_eq!(discovery.skipped.len(), 1);
    }

    #[test]
    fn test_custom_anchor_and_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "res/views/Login.view");
        touch(temp.path(), "res/views/Main.fxml");

        let discovery = Discoverer::new("views", "view")
            .discover([temp.path().join("res")])
            .unwrap();

        let ids: Vec<_> = discovery.mapping.iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, ["Login"]);
        assert_eq!(
            discovery.mapping.get("Login").unwrap().relative_path(),
            "/views/Login.view"
        );
    }

    #[test]
    fn test_walk_order_is_sorted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "fxml/Zeta.fxml");
        touch(temp.path(), "fxml/Alpha.fxml");
        touch(temp.path(), "fxml/Mid.fxml");

        let discovery = discover([temp.path().join("fxml")]).unwrap();

        let ids: Vec<_> = discovery.mapping.iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, ["Alpha", "Mid", "Zeta"]);
    }
}
