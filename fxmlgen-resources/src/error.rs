use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort resource discovery.
///
/// Unreadable roots are not errors; they are reported as
/// [`SkippedRoot`](crate::SkippedRoot)s.
#[derive(Debug, Error, Diagnostic)]
pub enum DiscoverError {
    #[error("duplicate FXML identifier '{identifier}' in '{first}' and '{second}'")]
    #[diagnostic(
        code(fxmlgen::duplicate_identifier),
        help("both files would become the same enum constant; rename one of them")
    )]
    DuplicateIdentifier {
        identifier: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Errors raised while loading a `.properties` bundle.
#[derive(Debug, Error, Diagnostic)]
pub enum BundleError {
    #[error("failed to read bundle '{path}'")]
    #[diagnostic(code(fxmlgen::bundle_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
