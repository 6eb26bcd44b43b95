use std::path::PathBuf;

use fxmlgen_core::validate_identifier;
use serde::Deserialize;

use crate::{Result, error::SourceContext};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "fxmlgen.toml";

const MAX_INDENT: u8 = 16;

/// Root manifest structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Destination Java package, e.g. `com.example.gen`.
    pub package: String,
    /// Resource roots, relative to the project directory (the manifest's
    /// directory unless the command line names another).
    pub resources: Vec<PathBuf>,
    /// Directory generated sources are written below, relative to the
    /// project directory.
    pub source_root: PathBuf,
    pub type_name: String,
    /// Resource bundle base name passed to `ResourceBundle.getBundle`.
    pub bundle: String,
    pub empty_package: EmptyPackage,
    /// Spaces per indent level.
    pub indent: u8,
    pub use_tabs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            resources: vec![PathBuf::from("src/main/resources")],
            source_root: PathBuf::from("src/main/java"),
            type_name: "FxmlEnum".to_string(),
            bundle: "Bundle".to_string(),
            empty_package: EmptyPackage::default(),
            indent: 4,
            use_tabs: false,
        }
    }
}

/// `empty-package = "reject" | "default"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPackage {
    #[default]
    Reject,
    Default,
}

impl Manifest {
    /// Parse manifest content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        let generator = &self.generator;

        // Blank packages are left to the empty-package policy.
        let package = generator.package.trim();
        if !package.is_empty() {
            for segment in package.split('.') {
                if let Some(reason) = validate_identifier(segment) {
                    return Err(ctx.invalid_identifier_error(
                        "package",
                        package,
                        format!("segment '{}': {}", segment, reason),
                    ));
                }
            }
        }

        if let Some(reason) = validate_identifier(&generator.type_name) {
            return Err(ctx.invalid_identifier_error("type-name", &generator.type_name, reason));
        }

        if generator.bundle.trim().is_empty() {
            return Err(ctx.validation_error("bundle", "bundle base name cannot be empty"));
        }

        if generator.resources.is_empty() {
            return Err(ctx.validation_error("resources", "at least one resource root is required"));
        }

        if generator.indent > MAX_INDENT {
            return Err(ctx.validation_error(
                "indent",
                format!("indent must be at most {} spaces", MAX_INDENT),
            ));
        }

        Ok(())
    }
}

impl std::str::FromStr for Manifest {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, MANIFEST_FILE)
    }
}
