use std::fmt;

use fxmlgen_core::validate_identifier;

use crate::SynthesisError;

/// What to do when the destination package is empty or blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPackagePolicy {
    /// Fail with [`SynthesisError::EmptyPackage`].
    #[default]
    Reject,
    /// Generate into the Java default package.
    DefaultPackage,
}

/// A validated Java package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Package {
    /// The unnamed default package.
    Default,
    /// A dotted package name such as `com.example.gen`.
    Named(String),
}

impl Package {
    /// Validate `name` as a destination package.
    pub fn parse(name: &str, policy: EmptyPackagePolicy) -> Result<Self, SynthesisError> {
        let name = name.trim();
        if name.is_empty() {
            return match policy {
                EmptyPackagePolicy::Reject => Err(SynthesisError::EmptyPackage),
                EmptyPackagePolicy::DefaultPackage => Ok(Self::Default),
            };
        }

        for segment in name.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(SynthesisError::InvalidPackage {
                    package: name.to_string(),
                    segment: segment.to_string(),
                    reason: reason.to_string(),
                });
            }
        }

        Ok(Self::Named(name.to_string()))
    }

    /// Package segments, empty for the default package.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Default => Vec::new(),
            Self::Named(name) => name.split('.').collect(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("<default package>"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_package() {
        let package = Package::parse("com.example.gen", EmptyPackagePolicy::Reject).unwrap();
        assert_eq!(package, Package::Named("com.example.gen".to_string()));
        assert_eq!(package.segments(), ["com", "example", "gen"]);
        assert_eq!(package.to_string(), "com.example.gen");
    }

    #[test]
    fn test_empty_package_rejected() {
        assert!(matches!(
            Package::parse("", EmptyPackagePolicy::Reject),
            Err(SynthesisError::EmptyPackage)
        ));
        assert!(matches!(
            Package::parse("   ", EmptyPackagePolicy::Reject),
            Err(SynthesisError::EmptyPackage)
        ));
    }

    #[test]
    fn test_empty_package_default_policy() {
        let package = Package::parse("", EmptyPackagePolicy::DefaultPackage).unwrap();
        assert!(package.is_default());
        assert!(package.segments().is_empty());
    }

    #[test]
    fn test_invalid_segments() {
        for name in ["com..gen", "com.1st", "com.my-app", "com.class", ".com"] {
            assert!(
                matches!(
                    Package::parse(name, EmptyPackagePolicy::Reject),
                    Err(SynthesisError::InvalidPackage { .. })
                ),
                "{name} should be rejected"
            );
        }
    }
}
