//! Clean operation - remove the generated enum.

use std::path::Path;

use eyre::Result;
use fxmlgen_core::{GENERATED_HEADER, remove_generated};
use fxmlgen_java::FxmlEnumFile;
use fxmlgen_manifest::Manifest;

use super::Project;
use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Project directory manifest paths resolve against.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Only a file that still starts with the generated header is removed.
pub fn clean(manifest: &Manifest, opts: CleanOptions) -> Result<CleanReport> {
    let project = Project::new(manifest, opts.output_dir);
    let package = project.package(None)?;

    let path = opts.output_dir.join(FxmlEnumFile::target_path(
        project.source_root(),
        &package,
        project.type_name(),
    ));
    let result = remove_generated(&path, Some(GENERATED_HEADER), opts.dry_run)?;
    tracing::debug!(path = %path.display(), ?result, "cleaned generated enum");

    Ok(CleanReport {
        dry_run: opts.dry_run,
        path,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use fxmlgen_core::CleanResult;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::{
        generate,
        generate::GenerateOptions,
        testing::{manifest, touch},
    };

    const MANIFEST: &str = "[generator]\npackage = \"com.example.gen\"\n";

    fn options(output_dir: &Path, dry_run: bool) -> CleanOptions<'_> {
        CleanOptions {
            output_dir,
            dry_run,
        }
    }

    fn generate_into(root: &Path) {
        touch(root, "src/main/resources/fxml/Main.fxml");
        generate(
            &manifest(MANIFEST),
            GenerateOptions {
                output_dir: root,
                dry_run: false,
                package: None,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_clean_removes_generated_enum() {
        let temp = TempDir::new().unwrap();
        generate_into(temp.path());

        let report = clean(&manifest(MANIFEST), options(temp.path(), false)).unwrap();

        assert_eq!(report.result, CleanResult::Removed);
        assert!(!report.path.exists());
    }

    #[test]
    fn test_clean_dry_run_keeps_file() {
        let temp = TempDir::new().unwrap();
        generate_into(temp.path());

        let report = clean(&manifest(MANIFEST), options(temp.path(), true)).unwrap();

        assert_eq!(report.result, CleanResult::Removed);
        assert!(report.path.exists());
    }

    #[test]
    fn test_clean_skips_hand_written_file() {
        let temp = TempDir::new().unwrap();
        let path = temp
            .path()
            .join("src/main/java/com/example/gen/FxmlEnum.java");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "public enum FxmlEnum {}\n").unwrap();

        let report = clean(&manifest(MANIFEST), options(temp.path(), false)).unwrap();

        assert_eq!(report.result, CleanResult::Skipped);
        assert!(path.exists());
    }

    #[test]
    fn test_clean_missing_file() {
        let temp = TempDir::new().unwrap();

        let report = clean(&manifest(MANIFEST), options(temp.path(), false)).unwrap();

        assert_eq!(report.result, CleanResult::Missing);
    }
}
