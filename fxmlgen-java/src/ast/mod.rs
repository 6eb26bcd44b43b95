//! Java declaration builders.

mod enums;
mod literal;
mod method;

pub use enums::{EnumConstant, EnumDecl};
pub use literal::string_literal;
pub use method::{Method, Param};
