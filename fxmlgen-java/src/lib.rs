//! Java enum generation for fxmlgen.
//!
//! [`synthesize`] turns a [`ResourceMapping`](fxmlgen_resources::ResourceMapping)
//! into a [`DeclarationModel`]; [`FxmlEnumFile`] renders that model as Java
//! source and [`emit`] writes it under the source root.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod emit;
mod error;
mod java_file;
mod model;
mod package;
mod synthesize;

pub mod ast;
pub mod files;

pub use ast::{EnumConstant, EnumDecl, Method, Param, string_literal};
pub use emit::{Emitted, emit};
pub use error::SynthesisError;
pub use files::FxmlEnumFile;
pub use java_file::JavaFile;
pub use model::{AccessorSpec, BundleHelper, ConstantSpec, DeclarationModel};
pub use package::{EmptyPackagePolicy, Package};
pub use synthesize::{DEFAULT_BUNDLE, DEFAULT_TYPE_NAME, SynthesisOptions, TITLE_SUFFIX, synthesize};
