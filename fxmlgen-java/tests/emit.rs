//! Writing the generated enum to disk.

use std::fs;

use fxmlgen_core::{GENERATED_HEADER, WriteResult};
use fxmlgen_java::{EmptyPackagePolicy, FxmlEnumFile, Package, SynthesisOptions, emit, synthesize};
use fxmlgen_resources::discover;
use tempfile::TempDir;

fn write_fxml(base: &std::path::Path, rel: &str) {
    let path = base.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "<AnchorPane/>").unwrap();
}

fn enum_file(project: &std::path::Path) -> FxmlEnumFile {
    let discovery = discover([project.join("src/main/resources/fxml")]).unwrap();
    let package = Package::parse("com.example.gen", EmptyPackagePolicy::Reject).unwrap();
    let model = synthesize(&discovery.mapping, &package, &SynthesisOptions::default()).unwrap();
    FxmlEnumFile::new(model, "src/main/java")
}

#[test]
fn test_emit_writes_file_under_package_dirs() {
    let temp = TempDir::new().unwrap();
    write_fxml(temp.path(), "src/main/resources/fxml/Main.fxml");

    let emitted = emit(&enum_file(temp.path()), temp.path()).unwrap();

    assert_eq!(emitted.result, WriteResult::Written);
    assert_eq!(
        emitted.path,
        temp.path()
            .join("src/main/java/com/example/gen/FxmlEnum.java")
    );
    let content = fs::read_to_string(&emitted.path).unwrap();
    assert!(content.starts_with(GENERATED_HEADER));
    assert!(content.contains("return \"/fxml/Main.fxml\";"));
}

#[test]
fn test_emit_is_idempotent() {
    let temp = TempDir::new().unwrap();
    write_fxml(temp.path(), "src/main/resources/fxml/Main.fxml");
    write_fxml(temp.path(), "src/main/resources/fxml/settings/Settings.fxml");

    let first = emit(&enum_file(temp.path()), temp.path()).unwrap();
    let first_bytes = fs::read(&first.path).unwrap();

    let second = emit(&enum_file(temp.path()), temp.path()).unwrap();
    let second_bytes = fs::read(&second.path).unwrap();

    assert_eq!(second.result, WriteResult::Unchanged);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_emit_overwrites_stale_file() {
    let temp = TempDir::new().unwrap();
    write_fxml(temp.path(), "src/main/resources/fxml/Main.fxml");
    let target = temp
        .path()
        .join("src/main/java/com/example/gen/FxmlEnum.java");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "stale").unwrap();

    let emitted = emit(&enum_file(temp.path()), temp.path()).unwrap();

    assert_eq!(emitted.result, WriteResult::Written);
    assert_ne!(fs::read_to_string(&target).unwrap(), "stale");
}

#[test]
fn test_emit_reports_unwritable_target() {
    let temp = TempDir::new().unwrap();
    write_fxml(temp.path(), "src/main/resources/fxml/Main.fxml");
    // A regular file where the source root directory should be.
    fs::create_dir_all(temp.path().join("src/main")).unwrap();
    fs::write(temp.path().join("src/main/java"), "not a directory").unwrap();

    let err = emit(&enum_file(temp.path()), temp.path()).unwrap_err();

    assert!(format!("{err}").contains("failed to write generated FxmlEnum"));
}
