use std::path::{Path, PathBuf};

use fxmlgen_codegen::Indent;
use fxmlgen_core::{FileRules, GENERATED_HEADER, GeneratedFile};

use crate::{
    DeclarationModel, EnumConstant, EnumDecl, JavaFile, Method, Package, Param,
    ast::string_literal,
};

/// The generated enum source file.
pub struct FxmlEnumFile {
    model: DeclarationModel,
    source_root: PathBuf,
    indent: Indent,
}

impl FxmlEnumFile {
    /// `source_root` is relative to the base directory passed to
    /// [`GeneratedFile::path`] (e.g., `src/main/java`).
    pub fn new(model: DeclarationModel, source_root: impl Into<PathBuf>) -> Self {
        Self {
            model,
            source_root: source_root.into(),
            indent: Indent::JAVA,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn model(&self) -> &DeclarationModel {
        &self.model
    }

    /// Path relative to the base directory, e.g.
    /// `src/main/java/com/example/gen/FxmlEnum.java`.
    pub fn relative_path(&self) -> PathBuf {
        Self::target_path(&self.source_root, &self.model.package, &self.model.type_name)
    }

    /// Where an enum named `type_name` in `package` lives below `source_root`.
    pub fn target_path(source_root: &Path, package: &Package, type_name: &str) -> PathBuf {
        let mut path = source_root.to_path_buf();
        for segment in package.segments() {
            path.push(segment);
        }
        path.push(format!("{}.java", type_name));
        path
    }

    fn enum_decl(&self) -> EnumDecl {
        let model = &self.model;
        let helper = &model.bundle_helper;

        let mut decl = EnumDecl::new(&model.type_name);
        for constant in &model.constants {
            decl = decl.constant(
                EnumConstant::new(&constant.name)
                    .method(
                        Method::new(&model.path_accessor.name, "String")
                            .annotation("Override")
                            .statement(format!("return {}", string_literal(&constant.path))),
                    )
                    .method(
                        Method::new(&model.title_accessor.name, "String")
                            .annotation("Override")
                            .statement(format!(
                                "return {}({})",
                                helper.method_name,
                                string_literal(&constant.title_key)
                            )),
                    ),
            );
        }

        decl.method(
            Method::new(&model.path_accessor.name, "String")
                .doc(&model.path_accessor.doc)
                .abstract_(),
        )
        .method(
            Method::new(&model.title_accessor.name, "String")
                .doc(&model.title_accessor.doc)
                .abstract_(),
        )
        .method(
            Method::new(&helper.method_name, "String")
                .param(Param::new("String", "key"))
                .statement(format!(
                    "return java.util.ResourceBundle.getBundle({}).getString(key)",
                    string_literal(&helper.base_name)
                )),
        )
    }
}

impl GeneratedFile for FxmlEnumFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        JavaFile::new(self.model.package.clone())
            .header(GENERATED_HEADER)
            .add(self.enum_decl())
            .render_with_indent(self.indent)
    }
}
