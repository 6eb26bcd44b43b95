//! JavaFile abstraction for structured Java source generation.

use fxmlgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::Package;

/// A structured representation of a Java compilation unit.
///
/// Renders, in order: header comment, package declaration, type
/// declarations, separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let source = JavaFile::new(package)
///     .header(GENERATED_HEADER)
///     .add(enum_decl)
///     .render();
/// ```
pub struct JavaFile {
    header: Option<String>,
    package: Package,
    types: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    pub fn new(package: Package) -> Self {
        Self {
            header: None,
            package,
            types: Vec::new(),
        }
    }

    /// Set the leading comment, written verbatim.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a type declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.types.push(node.to_fragments());
        self
    }

    /// Render with conventional 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(header) = &self.header {
            builder.push_line(header);
        }

        if let Package::Named(name) = &self.package {
            builder.push_line(&format!("package {};", name));
        }

        let has_preamble = self.header.is_some() || !self.package.is_default();
        for (i, fragments) in self.types.iter().enumerate() {
            if i > 0 || has_preamble {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
