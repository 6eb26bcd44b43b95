//! List command report data structures.

use std::path::PathBuf;

use fxmlgen_resources::SkippedRoot;

use super::output::{Output, Report};

/// Report data from listing discovered files.
#[derive(Debug)]
pub struct ListReport {
    /// Roots that were walked.
    pub roots: Vec<PathBuf>,
    /// Entries ordered by identifier.
    pub entries: Vec<ListedEntry>,
    pub skipped: Vec<SkippedRoot>,
}

/// One discovered FXML file and what it becomes.
#[derive(Debug)]
pub struct ListedEntry {
    pub constant: String,
    pub path: String,
    pub title_key: String,
    pub source: PathBuf,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for skipped in &self.skipped {
            out.warning(&format!(
                "skipped '{}': {}",
                skipped.root.display(),
                skipped.reason
            ));
        }

        if self.entries.is_empty() {
            out.section("No FXML files found under");
            for root in &self.roots {
                out.list_item(&root.display().to_string());
            }
            return;
        }

        out.section(&format!("FXML files ({})", self.entries.len()));
        for entry in &self.entries {
            out.list_item(&format!("{} {}", entry.constant, entry.path));
            out.key_value_indented("title key", &entry.title_key);
            out.key_value_indented("source", &entry.source.display().to_string());
        }
    }
}
