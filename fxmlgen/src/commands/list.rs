use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fxmlgen_manifest::FxmlgenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to fxmlgen.toml (defaults to ./fxmlgen.toml)
    #[arg(short, long, default_value = "fxmlgen.toml")]
    pub config: PathBuf,

    /// Project directory (defaults to the directory containing fxmlgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let fxmlgen_toml = FxmlgenToml::open(&self.config).unwrap_or_exit();
        let project_dir = ops::project_dir(&fxmlgen_toml, self.output.as_deref());
        let report = ops::list(fxmlgen_toml.manifest(), &project_dir)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
