use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tempfile::NamedTempFile;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => {
                if is_unchanged(&path, &content) {
                    tracing::debug!(path = %path.display(), "generated file is up to date");
                    Ok(WriteResult::Unchanged)
                } else {
                    write_file(&path, &content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }

    /// Remove the file from disk.
    ///
    /// When the rules carry a header, a file that does not start with it was
    /// not produced by us and is left in place.
    fn clean(&self, base: &Path, dry_run: bool) -> Result<CleanResult> {
        remove_generated(&self.path(base), self.rules().header, dry_run)
    }
}

/// Remove a generated file at `path`.
///
/// With a `header`, a file that does not start with it is left in place and
/// reported as [`CleanResult::Skipped`].
pub fn remove_generated(path: &Path, header: Option<&str>, dry_run: bool) -> Result<CleanResult> {
    if !path.exists() {
        return Ok(CleanResult::Missing);
    }

    if let Some(header) = header {
        let existing = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        if !existing.starts_with(header) {
            return Ok(CleanResult::Skipped);
        }
    }

    if !dry_run {
        fs::remove_file(path).wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
    }
    Ok(CleanResult::Removed)
}

fn is_unchanged(path: &Path, content: &str) -> bool {
    fs::read(path).is_ok_and(|existing| existing == content.as_bytes())
}

/// Write `content` to `path` atomically.
///
/// The content lands in a temporary file next to the target and is then
/// persisted over it, so the target is never observed half-written.
fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .wrap_err_with(|| format!("failed to stage '{}'", path.display()))?;
    tmp.write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tmp.persist(path)
        .wrap_err_with(|| format!("failed to persist '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content
    Unchanged,
}

/// Result of a clean operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanResult {
    /// File was removed (or would be, in a dry run)
    Removed,
    /// File exists but lacks the generated header
    Skipped,
    /// Nothing to remove
    Missing,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated code that is always rewritten.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }

    /// Rules for generated code that is only rewritten when it changed.
    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
            header: None,
        }
    }

    /// Mark files as carrying a generated header.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Overwrite only when the content differs
    IfChanged,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}
