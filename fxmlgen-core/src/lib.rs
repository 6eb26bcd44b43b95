//! Core utilities and types for the fxmlgen enum generator.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by the rest of the fxmlgen workspace.

mod file;
mod utils;

/// Header comment placed at the top of every generated Java file.
pub const GENERATED_HEADER: &str = "// Generated by fxmlgen. Do not edit.";

// File operations
pub use file::{CleanResult, FileRules, GeneratedFile, Overwrite, WriteResult, remove_generated};
// String utilities
pub use utils::{
    is_java_keyword, normalize_separators, to_constant_name, to_lookup_key, validate_identifier,
};
