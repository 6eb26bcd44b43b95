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
pub struct CleanCommand {
    /// Path to fxmlgen.toml (defaults to ./fxmlgen.toml)
    #[arg(short, long, default_value = "fxmlgen.toml")]
    pub config: PathBuf,

    /// Project directory (defaults to the directory containing fxmlgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let fxmlgen_toml = FxmlgenToml::open(&self.config).unwrap_or_exit();
        let project_dir = ops::project_dir(&fxmlgen_toml, self.output.as_deref());

        let report = ops::clean(
            fxmlgen_toml.manifest(),
            ops::clean::CleanOptions {
                output_dir: &project_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
