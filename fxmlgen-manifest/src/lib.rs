//! Parsing and validation for `fxmlgen.toml`.
//!
//! The manifest plays the part of the build plugin configuration: it names
//! the destination package, the resource roots to scan and where the
//! generated source goes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;

pub use error::{Error, Result};
pub use file::FxmlgenToml;
pub use manifest::{EmptyPackage, GeneratorConfig, MANIFEST_FILE, Manifest};
