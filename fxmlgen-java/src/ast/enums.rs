//! Java enum builder.

use fxmlgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Method;

/// A constant in a Java enum, optionally with a class body.
#[derive(Debug, Clone)]
pub struct EnumConstant {
    pub name: String,
    pub methods: Vec<Method>,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Add a method to the constant's body.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    fn to_fragments(&self, separator: char) -> Vec<CodeFragment> {
        if self.methods.is_empty() {
            return vec![CodeFragment::line(format!("{}{}", self.name, separator))];
        }

        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }

        vec![CodeFragment::block(
            format!("{} {{", self.name),
            body,
            Some(format!("}}{}", separator)),
        )]
    }
}

/// Builder for Java enums.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    name: String,
    constants: Vec<EnumConstant>,
    methods: Vec<Method>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constants: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn constant(mut self, constant: EnumConstant) -> Self {
        self.constants.push(constant);
        self
    }

    /// Add a member method, declared after the constants.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        let last = self.constants.len().saturating_sub(1);

        for (i, constant) in self.constants.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            let separator = if i == last { ';' } else { ',' };
            body.extend(constant.to_fragments(separator));
        }

        // A body without constants still needs the terminating `;`
        // before any member declarations.
        if self.constants.is_empty() && !self.methods.is_empty() {
            body.push(CodeFragment::line(";"));
        }

        for method in &self.methods {
            body.push(CodeFragment::Blank);
            body.extend(method.to_fragments());
        }

        body
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.constants.is_empty() && self.methods.is_empty() {
            return vec![CodeFragment::line(format!("public enum {} {{}}", self.name))];
        }

        vec![CodeFragment::block(
            format!("public enum {} {{", self.name),
            self.body_fragments(),
            Some("}".to_string()),
        )]
    }
}
