//! FXML resource discovery for fxmlgen.
//!
//! Walks resource roots for `.fxml` files and builds the
//! identifier-to-path [`ResourceMapping`] the enum generator consumes.
//! Also provides the [`TitleResolver`] capability and a `.properties`
//! backed implementation used to check bundle coverage.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bundle;
mod discover;
mod error;
mod mapping;

pub use bundle::{PropertiesBundle, TitleResolver};
pub use discover::{
    DEFAULT_ANCHOR, DEFAULT_EXTENSION, Discoverer, Discovery, SkippedRoot, anchored_path, discover,
};
pub use error::{BundleError, DiscoverError};
pub use mapping::{ResourceEntry, ResourceMapping};
