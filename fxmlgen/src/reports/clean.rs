//! Clean command report data structures.

use std::path::PathBuf;

use fxmlgen_core::CleanResult;

use super::output::{Output, Report};

/// Report data from removing the generated enum.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Where the generated enum lives.
    pub path: PathBuf,
    pub result: CleanResult,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.result {
            CleanResult::Removed => {
                if self.dry_run {
                    out.section("Would delete");
                } else {
                    out.section("Deleted");
                }
                out.removed_item(&path);
            }
            CleanResult::Skipped => {
                out.warning(&format!(
                    "{} was not generated by fxmlgen, leaving it in place",
                    path
                ));
            }
            CleanResult::Missing => out.preformatted("Nothing to clean."),
        }
    }
}
