use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use fxmlgen_codegen::Indent;
use fxmlgen_java::{EmptyPackagePolicy, Package, SynthesisError, SynthesisOptions};
use fxmlgen_manifest::{EmptyPackage, FxmlgenToml, GeneratorConfig, Manifest};
use fxmlgen_resources::{DEFAULT_ANCHOR, Discovery, discover};

/// The directory manifest paths resolve against: `output` when given,
/// otherwise the directory holding the manifest.
pub(crate) fn project_dir(fxmlgen_toml: &FxmlgenToml, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => dir.to_path_buf(),
        None => fxmlgen_toml.base_dir().to_path_buf(),
    }
}

/// Generator settings resolved against a project directory.
pub(crate) struct Project<'a> {
    root: &'a Path,
    config: &'a GeneratorConfig,
}

impl<'a> Project<'a> {
    pub fn new(manifest: &'a Manifest, root: &'a Path) -> Self {
        Self {
            root,
            config: &manifest.generator,
        }
    }

    /// Configured resource directories below the project root.
    pub fn resource_dirs(&self) -> Vec<PathBuf> {
        self.config
            .resources
            .iter()
            .map(|dir| self.root.join(dir))
            .collect()
    }

    /// The `fxml` directory right under each resource directory.
    pub fn fxml_roots(&self) -> Vec<PathBuf> {
        self.resource_dirs()
            .into_iter()
            .map(|dir| dir.join(DEFAULT_ANCHOR))
            .collect()
    }

    /// Validate the destination package, preferring `override_package`.
    pub fn package(&self, override_package: Option<&str>) -> Result<Package, SynthesisError> {
        let policy = match self.config.empty_package {
            EmptyPackage::Reject => EmptyPackagePolicy::Reject,
            EmptyPackage::Default => EmptyPackagePolicy::DefaultPackage,
        };
        Package::parse(override_package.unwrap_or(&self.config.package), policy)
    }

    pub fn discover(&self) -> Result<Discovery> {
        discover(self.fxml_roots()).wrap_err("failed to discover FXML resources")
    }

    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            type_name: self.config.type_name.clone(),
            bundle: self.config.bundle.clone(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.config.type_name
    }

    pub fn source_root(&self) -> &Path {
        &self.config.source_root
    }

    pub fn indent(&self) -> Indent {
        if self.config.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.config.indent)
        }
    }

    /// Bundle base name as a path, e.g. `i18n.Messages` -> `i18n/Messages`.
    pub fn bundle_path(&self) -> String {
        self.config.bundle.replace('.', "/")
    }
}
