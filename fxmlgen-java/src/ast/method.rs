//! Java method builder.

use fxmlgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Java method.
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// Builder for Java methods.
///
/// Abstract methods render as a single signature line; everything else
/// renders as a block with its body statements.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
    annotations: Vec<String>,
    is_abstract: bool,
    return_type: String,
    params: Vec<Param>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            is_abstract: false,
            return_type: return_type.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an annotation without the `@`, e.g. `Override`.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a statement; the trailing `;` is appended.
    pub fn statement(mut self, statement: impl Into<String>) -> Self {
        self.body.push(format!("{};", statement.into()));
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let modifiers = if self.is_abstract {
            "public abstract"
        } else {
            "public"
        };
        format!(
            "{} {} {}({})",
            modifiers, self.return_type, self.name, params
        )
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::javadoc(doc.clone()));
        }

        for annotation in &self.annotations {
            fragments.push(CodeFragment::line(format!("@{}", annotation)));
        }

        if self.is_abstract {
            fragments.push(CodeFragment::line(format!("{};", self.signature())));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} {{", self.signature()),
                self.body.iter().map(CodeFragment::line).collect(),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}
