use crate::Package;

/// The generated enum, ready to be rendered.
///
/// Constants come first, then the abstract accessors, then the bundle
/// helper; renderers keep that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationModel {
    pub package: Package,
    pub type_name: String,
    pub constants: Vec<ConstantSpec>,
    pub path_accessor: AccessorSpec,
    pub title_accessor: AccessorSpec,
    pub bundle_helper: BundleHelper,
}

/// One enum constant and the values its overrides return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantSpec {
    /// Constant name (upper-cased identifier).
    pub name: String,
    /// Identifier the constant was derived from.
    pub identifier: String,
    /// Literal returned by the path accessor.
    pub path: String,
    /// Bundle key the title accessor resolves at run time.
    pub title_key: String,
}

/// An abstract no-argument accessor returning `String`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSpec {
    pub name: String,
    pub doc: String,
}

impl AccessorSpec {
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
        }
    }
}

/// The shared `String -> String` lookup emitted into the enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleHelper {
    pub method_name: String,
    /// `ResourceBundle` base name passed to `getBundle`.
    pub base_name: String,
}

impl DeclarationModel {
    /// Find a constant by name.
    pub fn constant(&self, name: &str) -> Option<&ConstantSpec> {
        self.constants.iter().find(|c| c.name == name)
    }

    /// Every bundle key the generated code will look up.
    pub fn title_keys(&self) -> impl Iterator<Item = &str> {
        self.constants.iter().map(|c| c.title_key.as_str())
    }
}
