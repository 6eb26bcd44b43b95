//! Shared string helpers for identifiers and resource paths.

/// Java reserved words, including the literals `true`, `false` and `null`.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Convert an identifier to an enum constant name (e.g., "Main" -> "MAIN")
pub fn to_constant_name(identifier: &str) -> String {
    identifier.to_uppercase()
}

/// Build the bundle lookup key for an identifier (e.g., "Settings" -> "settings.title")
pub fn to_lookup_key(identifier: &str, suffix: &str) -> String {
    let mut key = identifier.to_lowercase();
    key.push_str(suffix);
    key
}

/// Check whether a name is a Java reserved word.
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Validate a Java identifier.
///
/// Returns `None` when the name is valid, or the reason it is not.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return Some("name must start with a letter, '_' or '$'");
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name may only contain letters, digits, '_' and '$'");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved word");
    }

    None
}

/// Normalize path separators to forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_constant_name() {
        assert_eq!(to_constant_name("Main"), "MAIN");
        assert_eq!(to_constant_name("mainView"), "MAINVIEW");
        assert_eq!(to_constant_name("already_UPPER"), "ALREADY_UPPER");
        assert_eq!(to_constant_name(""), "");
    }

    #[test]
    fn test_to_lookup_key() {
        assert_eq!(to_lookup_key("Settings", ".title"), "settings.title");
        assert_eq!(to_lookup_key("MainView", ".title"), "mainview.title");
    }

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("MAIN"), None);
        assert_eq!(validate_identifier("_PRIVATE"), None);
        assert_eq!(validate_identifier("$X1"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1ST").is_some());
        assert!(validate_identifier("MY-VIEW").is_some());
        assert!(validate_identifier("A.B").is_some());
        assert!(validate_identifier("class").is_some());
    }

    #[test]
    fn test_is_java_keyword() {
        assert!(is_java_keyword("enum"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("ENUM"));
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators("\\fxml\\Main.fxml"), "/fxml/Main.fxml");
        assert_eq!(normalize_separators("/fxml/Main.fxml"), "/fxml/Main.fxml");
    }
}
