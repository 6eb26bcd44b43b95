//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Findings from validating the manifest, resource tree and bundle.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// Problems that would make `generate` fail.
    pub errors: Vec<String>,
    /// Skipped roots and title keys the bundle lacks.
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether `generate` would succeed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.is_valid() {
            return;
        }

        let config = self.config_path.display();
        match self.warnings.len() {
            0 => out.preformatted(&format!("✓ {} is valid", config)),
            n => out.preformatted(&format!("✓ {} is valid ({} warning(s))", config, n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    fn report(errors: &[&str], warnings: &[&str]) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("fxmlgen.toml"),
            errors: errors.iter().map(|s| s.to_string()).collect(),
            warnings: warnings.iter().map(|s| s.to_string()).collect(),
            infos: vec!["1 constant(s) in com.example.FxmlEnum".to_string()],
        }
    }

    #[test]
    fn test_render_valid_with_warnings() {
        let mut out = BufferOutput::default();
        report(&[], &["title key 'main.title' is missing from 'Bundle.properties'"])
            .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: title key 'main.title' is missing from 'Bundle.properties'",
                "info: 1 constant(s) in com.example.FxmlEnum",
                "✓ fxmlgen.toml is valid (1 warning(s))",
            ]
        );
    }

    #[test]
    fn test_render_errors() {
        let mut out = BufferOutput::default();
        report(&["destination package is empty"], &[]).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "error: destination package is empty",
                "info: 1 constant(s) in com.example.FxmlEnum",
            ]
        );
    }
}
