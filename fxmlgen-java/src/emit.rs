use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use fxmlgen_core::{GeneratedFile, WriteResult};

use crate::FxmlEnumFile;

/// What [`emit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Render `file` and write it below `base`.
pub fn emit(file: &FxmlEnumFile, base: &Path) -> Result<Emitted> {
    let path = file.path(base);
    let result = file.write(base).wrap_err_with(|| {
        format!(
            "failed to write generated {} to '{}'",
            file.model().type_name,
            path.display()
        )
    })?;

    match result {
        WriteResult::Written => tracing::info!(path = %path.display(), "wrote generated enum"),
        WriteResult::Unchanged => tracing::info!(path = %path.display(), "generated enum is up to date"),
    }

    Ok(Emitted { path, result })
}
