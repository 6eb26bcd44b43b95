//! Shared code generation building blocks for fxmlgen.
//!
//! This crate provides language-agnostic primitives used by the
//! Java emitter (`fxmlgen-java`).
//!
//! - [`builder`] - CodeBuilder, CodeFragment, Renderable, Indent

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
