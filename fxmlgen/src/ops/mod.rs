//! Core operations.
//!
//! This module contains the business logic for fxmlgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;
pub mod list;
mod project;

pub use check::check;
pub use clean::clean;
pub use generate::generate;
pub use list::list;
pub(crate) use project::{Project, project_dir};
