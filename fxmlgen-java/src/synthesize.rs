//! Declaration synthesis: mapping in, enum model out.

use std::collections::HashMap;

use fxmlgen_core::{to_constant_name, to_lookup_key, validate_identifier};
use fxmlgen_resources::ResourceMapping;

use crate::{AccessorSpec, BundleHelper, ConstantSpec, DeclarationModel, Package, SynthesisError};

/// Name of the generated enum unless configured otherwise.
pub const DEFAULT_TYPE_NAME: &str = "FxmlEnum";

/// `ResourceBundle` base name unless configured otherwise.
pub const DEFAULT_BUNDLE: &str = "Bundle";

/// Appended to the lower-cased identifier to form the title key.
pub const TITLE_SUFFIX: &str = ".title";

const PATH_ACCESSOR: &str = "getFxmlFile";
const TITLE_ACCESSOR: &str = "getTitle";
const BUNDLE_HELPER: &str = "getStringFromResourceBundle";

/// Knobs for [`synthesize`].
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    pub type_name: String,
    pub bundle: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_TYPE_NAME.to_string(),
            bundle: DEFAULT_BUNDLE.to_string(),
        }
    }
}

/// Build the enum model for `mapping` in `package`.
///
/// Constants are ordered by identifier so output is reproducible. Titles
/// are not resolved here; each constant only carries its bundle key.
pub fn synthesize(
    mapping: &ResourceMapping,
    package: &Package,
    options: &SynthesisOptions,
) -> Result<DeclarationModel, SynthesisError> {
    if mapping.is_empty() {
        return Err(SynthesisError::EmptyMapping);
    }

    if let Some(reason) = validate_identifier(&options.type_name) {
        return Err(SynthesisError::InvalidTypeName {
            name: options.type_name.clone(),
            reason: reason.to_string(),
        });
    }

    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut constants = Vec::with_capacity(mapping.len());

    for entry in mapping.sorted() {
        let identifier = entry.identifier();
        let name = to_constant_name(identifier);

        if let Some(reason) = validate_identifier(&name) {
            return Err(SynthesisError::InvalidConstantName {
                identifier: identifier.to_string(),
                name,
                reason: reason.to_string(),
            });
        }

        if let Some(first) = seen.insert(name.clone(), identifier) {
            return Err(SynthesisError::DuplicateConstant {
                name,
                first: first.to_string(),
                second: identifier.to_string(),
            });
        }

        constants.push(ConstantSpec {
            name,
            identifier: identifier.to_string(),
            path: entry.relative_path().to_string(),
            title_key: to_lookup_key(identifier, TITLE_SUFFIX),
        });
    }

    Ok(DeclarationModel {
        package: package.clone(),
        type_name: options.type_name.clone(),
        constants,
        path_accessor: AccessorSpec::new(PATH_ACCESSOR, "Classpath location of the FXML file."),
        title_accessor: AccessorSpec::new(TITLE_ACCESSOR, "Display title from the resource bundle."),
        bundle_helper: BundleHelper {
            method_name: BUNDLE_HELPER.to_string(),
            base_name: options.bundle.clone(),
        },
    })
}
