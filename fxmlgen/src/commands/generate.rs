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
pub struct GenerateCommand {
    /// Path to fxmlgen.toml (defaults to ./fxmlgen.toml)
    #[arg(short, long, default_value = "fxmlgen.toml")]
    pub config: PathBuf,

    /// Project directory (defaults to the directory containing fxmlgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated enum instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Destination package (overrides fxmlgen.toml setting)
    #[arg(short, long)]
    pub package: Option<String>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let fxmlgen_toml = FxmlgenToml::open(&self.config).unwrap_or_exit();
        let project_dir = ops::project_dir(&fxmlgen_toml, self.output.as_deref());

        let report = ops::generate(
            fxmlgen_toml.manifest(),
            ops::generate::GenerateOptions {
                output_dir: &project_dir,
                dry_run: self.dry_run,
                package: self.package.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
