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
pub struct CheckCommand {
    /// Path to fxmlgen.toml (defaults to ./fxmlgen.toml)
    #[arg(short, long, default_value = "fxmlgen.toml")]
    pub config: PathBuf,

    /// Project directory (defaults to the directory containing fxmlgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Destination package (overrides fxmlgen.toml setting)
    #[arg(short, long)]
    pub package: Option<String>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let fxmlgen_toml = FxmlgenToml::open(&self.config).unwrap_or_exit();
        let project_dir = ops::project_dir(&fxmlgen_toml, self.output.as_deref());

        let report = ops::check(
            fxmlgen_toml.manifest(),
            &self.config,
            ops::check::CheckOptions {
                output_dir: &project_dir,
                package: self.package.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
