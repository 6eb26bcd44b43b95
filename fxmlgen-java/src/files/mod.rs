//! Generated file definitions.

mod fxml_enum;

pub use fxml_enum::FxmlEnumFile;
