use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building a [`DeclarationModel`](crate::DeclarationModel).
///
/// All of these are configuration or input problems detected before
/// anything is written.
#[derive(Debug, Error, Diagnostic)]
pub enum SynthesisError {
    #[error("no FXML files to generate constants for")]
    #[diagnostic(code(fxmlgen::empty_mapping))]
    EmptyMapping,

    #[error("destination package is empty")]
    #[diagnostic(
        code(fxmlgen::empty_package),
        help(
            "set `package` under [generator] in fxmlgen.toml, or set `empty-package = \"default\"` to generate into the default package"
        )
    )]
    EmptyPackage,

    #[error("invalid package name '{package}': segment '{segment}': {reason}")]
    #[diagnostic(code(fxmlgen::invalid_package))]
    InvalidPackage {
        package: String,
        segment: String,
        reason: String,
    },

    #[error("invalid enum type name '{name}': {reason}")]
    #[diagnostic(code(fxmlgen::invalid_type_name))]
    InvalidTypeName { name: String, reason: String },

    #[error("'{identifier}' does not map to a valid constant name '{name}': {reason}")]
    #[diagnostic(
        code(fxmlgen::invalid_constant),
        help("rename the FXML file so its base name is a valid Java identifier")
    )]
    InvalidConstantName {
        identifier: String,
        name: String,
        reason: String,
    },

    #[error("'{first}' and '{second}' both map to constant '{name}'")]
    #[diagnostic(
        code(fxmlgen::duplicate_constant),
        help("FXML base names must differ by more than letter case")
    )]
    DuplicateConstant {
        name: String,
        first: String,
        second: String,
    },
}
