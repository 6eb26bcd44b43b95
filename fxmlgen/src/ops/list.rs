//! List operation - show what discovery finds.

use std::path::Path;

use eyre::Result;
use fxmlgen_core::{to_constant_name, to_lookup_key};
use fxmlgen_java::TITLE_SUFFIX;
use fxmlgen_manifest::Manifest;

use super::Project;
use crate::reports::{ListReport, ListedEntry};

/// Execute the list operation.
pub fn list(manifest: &Manifest, output_dir: &Path) -> Result<ListReport> {
    let project = Project::new(manifest, output_dir);
    let discovery = project.discover()?;

    let entries = discovery
        .mapping
        .sorted()
        .into_iter()
        .map(|entry| ListedEntry {
            constant: to_constant_name(entry.identifier()),
            path: entry.relative_path().to_string(),
            title_key: to_lookup_key(entry.identifier(), TITLE_SUFFIX),
            source: entry.source().to_path_buf(),
        })
        .collect();

    Ok(ListReport {
        roots: project.fxml_roots(),
        entries,
        skipped: discovery.skipped,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::ops::testing::{manifest, touch};

    #[test]
    fn test_lists_sorted_entries() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/resources/fxml/settings/Settings.fxml");
        touch(temp.path(), "src/main/resources/fxml/Main.fxml");

        let report = list(&manifest(""), temp.path()).unwrap();

        let constants: Vec<_> = report.entries.iter().map(|e| e.constant.as_str()).collect();
        assert_eq!(constants, ["MAIN", "SETTINGS"]);
        assert_eq!(report.entries[1].path, "/fxml/settings/Settings.fxml");
        assert_eq!(report.entries[1].title_key, "settings.title");
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_lists_skipped_roots() {
        let temp = TempDir::new().unwrap();

        let report = list(&manifest(""), temp.path()).unwrap();

        assert!(report.entries.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.roots, [temp.path().join("src/main/resources/fxml")]);
    }
}
