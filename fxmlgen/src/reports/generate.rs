//! Generate command report data structures.

use std::path::PathBuf;

use fxmlgen_resources::SkippedRoot;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Destination package, as displayed.
    pub package: String,
    /// Generated enum name.
    pub type_name: String,
    /// Resource roots that could not be walked.
    pub skipped: Vec<SkippedRoot>,
    /// Constant names in declaration order.
    pub constants: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// No FXML files were found.
    Nothing,
    /// The file was written (or already up to date).
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewFile),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    /// The file already held the generated content.
    pub unchanged: bool,
}

/// The file that would be written.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the project directory.
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for skipped in &self.skipped {
            out.warning(&format!(
                "skipped '{}': {}",
                skipped.root.display(),
                skipped.reason
            ));
        }

        match &self.result {
            GenerationResult::Nothing => {
                out.preformatted("No FXML files found, nothing to generate.");
            }
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => {
                out.divider(&preview.path.display().to_string());
                out.preformatted(&preview.content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} would be generated with {} constant(s)",
                    self.type_name,
                    self.constants.len()
                ));
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Package", &self.package);
        out.section(&format!("{} ({})", self.type_name, self.constants.len()));
        for constant in &self.constants {
            out.list_item(constant);
        }
        out.newline();

        let label = if written.unchanged {
            "Up to date"
        } else {
            "Generated"
        };
        out.key_value(label, &written.path.display().to_string());
    }
}
