//! Generate operation - discover, synthesize and write the enum.

use std::path::Path;

use eyre::{Result, WrapErr};
use fxmlgen_core::{GeneratedFile, WriteResult};
use fxmlgen_java::{FxmlEnumFile, emit, synthesize};
use fxmlgen_manifest::Manifest;

use super::Project;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project directory manifest paths resolve against.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Package to use instead of the manifest's.
    pub package: Option<&'a str>,
}

/// Execute the generate operation.
///
/// The package is validated before the resource tree is read. An empty
/// resource tree is not an error; nothing is written.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let project = Project::new(manifest, opts.output_dir);
    let package = project.package(opts.package)?;

    let discovery = project.discover()?;
    let mut report = GenerateReport {
        package: package.to_string(),
        type_name: project.type_name().to_string(),
        skipped: discovery.skipped,
        constants: Vec::new(),
        result: GenerationResult::Nothing,
    };

    if discovery.mapping.is_empty() {
        tracing::info!("no FXML files found, nothing to generate");
        return Ok(report);
    }

    tracing::info!(count = discovery.mapping.len(), "found FXML files");
    tracing::info!(package = %package, "generating into package");

    let model = synthesize(&discovery.mapping, &package, &project.synthesis_options())
        .wrap_err_with(|| format!("failed to synthesize {}", project.type_name()))?;
    report.constants = model.constants.iter().map(|c| c.name.clone()).collect();

    let file = FxmlEnumFile::new(model, project.source_root()).with_indent(project.indent());

    report.result = if opts.dry_run {
        GenerationResult::Preview(PreviewFile {
            path: file.relative_path(),
            content: file.render(),
        })
    } else {
        let emitted = emit(&file, opts.output_dir)?;
        GenerationResult::Written(WrittenResult {
            path: emitted.path,
            unchanged: emitted.result == WriteResult::Unchanged,
        })
    };

    Ok(report)
}
