use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// A loaded `fxmlgen.toml` file.
#[derive(Debug)]
pub struct FxmlgenToml {
    path: PathBuf,
    manifest: Manifest,
}

impl FxmlgenToml {
    /// Read and parse the manifest at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| {
            Box::new(Error::Io {
                path: path.clone(),
                source,
            })
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Directory containing the manifest; `.` for a bare file name.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
