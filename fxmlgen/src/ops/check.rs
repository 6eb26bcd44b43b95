//! Check operation - validate without writing.

use std::path::Path;

use eyre::Result;
use fxmlgen_java::{DeclarationModel, synthesize};
use fxmlgen_manifest::Manifest;
use fxmlgen_resources::{PropertiesBundle, TitleResolver};

use super::Project;
use crate::reports::CheckReport;

/// Options for the check operation.
pub struct CheckOptions<'a> {
    /// Project directory manifest paths resolve against.
    pub output_dir: &'a Path,
    /// Package to use instead of the manifest's.
    pub package: Option<&'a str>,
}

/// Execute the check operation.
///
/// Runs discovery and synthesis, then compares the title keys with the
/// bundle's `.properties` file when one is present.
pub fn check(manifest: &Manifest, config_path: &Path, opts: CheckOptions) -> Result<CheckReport> {
    let project = Project::new(manifest, opts.output_dir);
    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
    };

    let package = match project.package(opts.package) {
        Ok(package) => package,
        Err(e) => {
            report.errors.push(e.to_string());
            return Ok(report);
        }
    };

    let discovery = match project.discover() {
        Ok(discovery) => discovery,
        Err(e) => {
            report.errors.push(format!("{:#}", e));
            return Ok(report);
        }
    };

    for skipped in &discovery.skipped {
        report.warnings.push(format!(
            "skipped '{}': {}",
            skipped.root.display(),
            skipped.reason
        ));
    }

    if discovery.mapping.is_empty() {
        report
            .infos
            .push("no FXML files found, nothing would be generated".to_string());
        return Ok(report);
    }

    let model = match synthesize(&discovery.mapping, &package, &project.synthesis_options()) {
        Ok(model) => model,
        Err(e) => {
            report.errors.push(e.to_string());
            return Ok(report);
        }
    };

    report.infos.push(format!(
        "{} constant(s) in {}.{}",
        model.constants.len(),
        package,
        model.type_name
    ));

    let bundle_path = project.bundle_path();
    match PropertiesBundle::find(project.resource_dirs(), &bundle_path)? {
        Some(bundle) => {
            let location = bundle
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| bundle_path.clone());
            for key in missing_title_keys(&model, &bundle) {
                tracing::warn!(key, bundle = %location, "title key missing from bundle");
                report
                    .warnings
                    .push(format!("title key '{}' is missing from '{}'", key, location));
            }
        }
        None => report.warnings.push(format!(
            "bundle '{}.properties' not found in any resource directory",
            bundle_path
        )),
    }

    Ok(report)
}

/// Title keys of `model` that `resolver` cannot resolve.
pub fn missing_title_keys<'m>(
    model: &'m DeclarationModel,
    resolver: &impl TitleResolver,
) -> Vec<&'m str> {
    model
        .title_keys()
        .filter(|key| resolver.resolve(key).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ops::testing::{manifest, touch};

    const MANIFEST: &str = "[generator]\npackage = \"com.example.gen\"\n";

    fn run(manifest_src: &str, root: &Path) -> CheckReport {
        check(
            &manifest(manifest_src),
            Path::new("fxmlgen.toml"),
            CheckOptions {
                output_dir: root,
                package: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_reports_missing_title_keys() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/resources/fxml/Main.fxml");
        touch(temp.path(), "src/main/resources/fxml/Settings.fxml");
        fs::write(
            temp.path().join("src/main/resources/Bundle.properties"),
            "main.title=Main Window\n",
        )
        .unwrap();

        let report = run(MANIFEST, temp.path());

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'settings.title'"));
        assert_eq!(report.infos, ["2 constant(s) in com.example.gen.FxmlEnum"]);
    }

    #[test]
    fn test_latin1_bundle_is_read() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/resources/fxml/Main.fxml");
        touch(temp.path(), "src/main/resources/fxml/Settings.fxml");
        fs::write(
            temp.path().join("src/main/resources/Bundle.properties"),
            b"main.title=Fen\xEAtre principale\n",
        )
        .unwrap();

        let report = run(MANIFEST, temp.path());

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'settings.title'"));
    }

    #[test]
    fn test_complete_bundle_has_no_warnings() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/resources/fxml/Main.fxml");
        fs::write(
            temp.path().join("src/main/resources/Bundle.properties"),
            "main.title=Main Window\n",
        )
        .unwrap();

        let report = run(MANIFEST, temp.path());

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_bundle_warns() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/resources/fxml/Main.fxml");

        let report = run(MANIFEST, temp.path());

        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            ["bundle 'Bundle.properties' not found in any resource directory"]
        );
    }

    #[test]
    fn test_empty_package_is_an_error() {
        let temp = TempDir::new().unwrap();

        let report = run("", temp.path());

        assert!(!report.is_valid());
        assert_eq!(report.errors, ["destination package is empty"]);
    }

    #[test]
    fn test_case_collision_is_an_error() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main/resources/fxml/Main.fxml");
        touch(temp.path(), "src/main/resources/fxml/other/MAIN.fxml");

        let report = run(MANIFEST, temp.path());

        assert!(!report.is_valid());
        assert!(report.errors[0].contains("constant 'MAIN'"));
    }

    #[test]
    fn test_missing_root_is_a_warning() {
        let temp = TempDir::new().unwrap();

        let report = run(MANIFEST, temp.path());

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("skipped '"));
        assert_eq!(
            report.infos,
            ["no FXML files found, nothing would be generated"]
        );
    }
}
